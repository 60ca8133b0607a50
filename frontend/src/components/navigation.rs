use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use common::navigation::{
    is_highlighted, logo_action, resolve, NavAction, NavTarget, Page, BOOK_DEMO, NAV_ITEMS,
};

use crate::components::helpers::scroll_to_section;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    #[prop_or(AttrValue::Static("home"))]
    pub active_section: AttrValue,
    /// Told about every section the bar scrolls to on the current page.
    #[prop_or_default]
    pub on_section: Callback<&'static str>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let navigator = use_navigator();
    let page = use_route::<Route>()
        .map(|route| route.page())
        .unwrap_or(Page::NotFound);
    let menu_open = use_state(|| false);
    let products_open = use_state(|| false);

    let perform = {
        let on_section = props.on_section.clone();
        let menu_open = menu_open.clone();
        let products_open = products_open.clone();
        Callback::from(move |action: NavAction| {
            menu_open.set(false);
            products_open.set(false);
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            match action {
                NavAction::OpenCareers => navigator.push(&Route::Careers),
                NavAction::RouteHome => navigator.push(&Route::Home),
                NavAction::ScrollTo(section) => {
                    scroll_to_section(section);
                    on_section.emit(section);
                }
                NavAction::RouteHomeThenScroll { section, delay } => {
                    navigator.push(&Route::Home);
                    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                    Timeout::new(millis, move || scroll_to_section(section)).forget();
                }
            }
        })
    };

    let go = |target: NavTarget| {
        let perform = perform.clone();
        Callback::from(move |_: MouseEvent| perform.emit(resolve(target, page)))
    };

    let on_logo = {
        let perform = perform.clone();
        Callback::from(move |_: MouseEvent| perform.emit(logo_action(page)))
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let show_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(true))
    };
    let hide_products = {
        let products_open = products_open.clone();
        Callback::from(move |_: MouseEvent| products_open.set(false))
    };

    let item_class = |highlighted: bool| classes!("nav-item", highlighted.then_some("active"));

    let desktop_items = NAV_ITEMS.iter().map(|item| {
        let highlighted = is_highlighted(item, &props.active_section, page);
        if item.children.is_empty() {
            return html! {
                <button class={item_class(highlighted)} onclick={go(item.target)}>{ item.label }</button>
            };
        }
        html! {
            <div class="nav-dropdown" onmouseenter={show_products.clone()} onmouseleave={hide_products.clone()}>
                <button class={item_class(highlighted)} onclick={go(item.target)}>{ item.label }</button>
                if *products_open {
                    <div class="nav-dropdown-menu">
                        { for item.children.iter().map(|link| html! {
                            <button class="nav-dropdown-item" onclick={go(link.target)}>{ link.label }</button>
                        }) }
                    </div>
                }
            </div>
        }
    });

    let mobile_items = NAV_ITEMS.iter().map(|item| {
        let highlighted = is_highlighted(item, &props.active_section, page);
        html! {
            <div>
                <button class={item_class(highlighted)} onclick={go(item.target)}>{ item.label }</button>
                if !item.children.is_empty() {
                    <div class="nav-mobile-children">
                        { for item.children.iter().map(|link| html! {
                            <button class="nav-dropdown-item" onclick={go(link.target)}>{ link.label }</button>
                        }) }
                    </div>
                }
            </div>
        }
    });

    html! {
        <nav class="nav-bar">
            <div class="nav-inner">
                <div class="nav-logo" onclick={on_logo}>
                    <img src="/assets/logo_1.png" alt="Nukkad Shops Logo" />
                </div>
                <div class="nav-desktop">{ for desktop_items }</div>
                <div class="nav-actions">
                    <span class="nav-language">{ "English" }</span>
                    <button class="btn btn-primary" onclick={go(BOOK_DEMO.target)}>{ BOOK_DEMO.label }</button>
                </div>
                <button class="nav-menu-toggle" aria-label="Menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="nav-mobile">
                    { for mobile_items }
                    <button class="btn btn-primary nav-mobile-demo" onclick={go(BOOK_DEMO.target)}>{ BOOK_DEMO.label }</button>
                </div>
            }
        </nav>
    }
}
