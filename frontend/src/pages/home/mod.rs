//! Single-page home: every marketing section, the active-section tracker
//! for the navigation bar, and the brochure popup that opens on its own
//! after a while.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use common::config::BROCHURE_POPUP_DELAY;
use common::navigation::{active_section, SectionBounds, HOME_SECTIONS};

use crate::components::brochure::BrochurePopup;
use crate::components::footer::Footer;
use crate::components::navigation::Navigation;

mod call_to_action;
mod faq;
mod features;
mod hero;
mod industries;
mod metrics;
mod partners;
mod showcase;
mod testimonials;

use call_to_action::CallToAction;
use faq::Faq;
use features::Features;
use hero::Hero;
use industries::Industries;
use metrics::Metrics;
use partners::Partners;
use showcase::ProductShowcase;
use testimonials::Testimonials;

pub enum Msg {
    OpenBrochure,
    CloseBrochure,
    SectionSelected(&'static str),
    Scrolled,
}

pub struct HomePage {
    active_section: &'static str,
    brochure_open: bool,
    popup_timer: Option<Timeout>,
    scroll_listener: Option<Closure<dyn Fn()>>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let delay = u32::try_from(BROCHURE_POPUP_DELAY.as_millis()).unwrap_or(u32::MAX);
        Self {
            active_section: HOME_SECTIONS[0],
            brochure_open: false,
            popup_timer: Some(Timeout::new(delay, move || {
                link.send_message(Msg::OpenBrochure)
            })),
            scroll_listener: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenBrochure => {
                self.popup_timer = None;
                self.brochure_open = true;
                true
            }
            Msg::CloseBrochure => {
                self.brochure_open = false;
                true
            }
            Msg::SectionSelected(section) => {
                self.active_section = section;
                true
            }
            Msg::Scrolled => match measure_active_section() {
                Some(section) if section != self.active_section => {
                    self.active_section = section;
                    true
                }
                _ => false,
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="home">
                <Navigation
                    active_section={self.active_section}
                    on_section={link.callback(Msg::SectionSelected)}
                />
                <main class="page">
                    <div id="home"><Hero on_open_brochure={link.callback(|_| Msg::OpenBrochure)} /></div>
                    <div id="products"><ProductShowcase /></div>
                    <div id="industries"><Industries /></div>
                    <div id="features"><Features /></div>
                    <Metrics />
                    <div id="testimonials"><Testimonials /></div>
                    <div id="partners"><Partners /></div>
                    <div id="faq"><Faq /></div>
                    <div id="demo"><CallToAction /></div>
                    <Footer />
                </main>
                <BrochurePopup
                    open={self.brochure_open}
                    on_close={link.callback(|_| Msg::CloseBrochure)}
                />
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Scrolled));
        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                log::warn!("section tracking disabled: {err:?}");
            }
        }
        self.scroll_listener = Some(listener);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(listener), Some(window)) = (self.scroll_listener.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

fn measure_active_section() -> Option<&'static str> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let sections: Vec<SectionBounds> = HOME_SECTIONS
        .iter()
        .filter_map(|&id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect();
    active_section(&sections, viewport)
}
