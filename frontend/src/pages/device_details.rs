use yew::prelude::*;
use yew_router::prelude::*;

use common::content::devices::{find_by_slug, DEVICES};
use common::model::device::{Device, DeviceId};
use common::navigation::{resolve, NavAction, NavTarget, Page};

use crate::components::footer::Footer;
use crate::components::helpers::scroll_to_section;
use crate::components::navigation::Navigation;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct DeviceDetailsProps {
    pub device_id: AttrValue,
}

#[function_component(DeviceDetailsPage)]
pub fn device_details_page(props: &DeviceDetailsProps) -> Html {
    let navigator = use_navigator();
    let slug = if props.device_id.is_empty() {
        DeviceId::default().slug()
    } else {
        props.device_id.as_str()
    };

    let Some(device) = find_by_slug(slug) else {
        return html! {
            <>
                <Navigation />
                <main class="page not-found">
                    <h1>{ "Device not found" }</h1>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">{ "Return to Home" }</Link<Route>>
                </main>
            </>
        };
    };

    let request_demo = Callback::from(move |_: MouseEvent| {
        let Some(navigator) = navigator.as_ref() else {
            return;
        };
        if let NavAction::RouteHomeThenScroll { section, delay } =
            resolve(NavTarget::Section("demo"), Page::Device)
        {
            navigator.push(&Route::Home);
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, move || scroll_to_section(section))
                .forget();
        }
    });

    html! {
        <>
            <Navigation />
            <main class="page device-details">
                <nav class="device-selector">
                    { for DEVICES.iter().map(|other| html! {
                        <Link<Route>
                            to={Route::Device { device_id: other.id.slug().to_string() }}
                            classes={classes!("chip", (other.id == device.id).then_some("active"))}
                        >
                            { other.name() }
                        </Link<Route>>
                    }) }
                </nav>
                { device_hero(device) }
                <section class="section">
                    <h2>{ "Device Configurations" }</h2>
                    <p class="muted">{ "Explore the complete specifications and features" }</p>
                    <div class="config-grid">
                        { for device.configurations.iter().map(|config| html! {
                            <article class="config-card">
                                <img src={config.image} alt={config.kind.label()} />
                                <span class="config-kind">{ config.kind.label() }</span>
                                <h3>{ config.value }</h3>
                                <p class="muted">{ config.description }</p>
                            </article>
                        }) }
                    </div>
                </section>
                <section class="section cta">
                    <h2>{ format!("Ready to transform your business with {}?", device.name()) }</h2>
                    <button class="btn btn-primary" onclick={request_demo}>{ "Request a Demo" }</button>
                </section>
            </main>
            <Footer />
        </>
    }
}

fn device_hero(device: &'static Device) -> Html {
    html! {
        <section class="device-hero">
            <img src={device.image} alt={device.name()} />
            <div>
                <h1>{ device.name() }</h1>
                <p class="tagline">{ device.tagline }</p>
                <p class="muted">{ device.description }</p>
            </div>
        </section>
    }
}
