use web_sys::Element;
use yew::prelude::*;

use common::carousel::{ScrollExtent, SCROLL_STEP_PX};
use common::content::industries::INDUSTRIES;

use crate::components::helpers::scroll_to_section;

pub enum Msg {
    Measure,
    Scroll(f64),
}

/// Horizontal scroller of industry cards with arrow buttons.
pub struct Industries {
    scroller: NodeRef,
    extent: ScrollExtent,
}

impl Component for Industries {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            scroller: NodeRef::default(),
            extent: ScrollExtent::INITIAL,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(scroller) = self.scroller.cast::<Element>() else {
            return false;
        };
        match msg {
            Msg::Scroll(delta) => {
                scroller.scroll_by_with_x_and_y(delta, 0.0);
                false
            }
            Msg::Measure => {
                let extent = ScrollExtent::measure(
                    f64::from(scroller.scroll_left()),
                    f64::from(scroller.scroll_width()),
                    f64::from(scroller.client_width()),
                );
                let changed = extent != self.extent;
                self.extent = extent;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="section industries">
                <h2>{ "Industries We Serve" }</h2>
                <p class="muted">{ "Powering retail businesses with smart billing and inventory solutions" }</p>
                <div class="scroller-frame">
                    <button
                        class="scroller-arrow left"
                        aria-label="Previous"
                        disabled={!self.extent.can_scroll_left}
                        onclick={link.callback(|_| Msg::Scroll(-SCROLL_STEP_PX))}
                    >{ "‹" }</button>
                    <div class="scroller" ref={self.scroller.clone()} onscroll={link.callback(|_| Msg::Measure)}>
                        { for INDUSTRIES.iter().map(|industry| html! {
                            <article class="industry-card">
                                <img src={industry.image} alt={industry.title} />
                                <h3>{ industry.title }</h3>
                                <p>{ industry.description }</p>
                            </article>
                        }) }
                    </div>
                    <button
                        class="scroller-arrow right"
                        aria-label="Next"
                        disabled={!self.extent.can_scroll_right}
                        onclick={link.callback(|_| Msg::Scroll(SCROLL_STEP_PX))}
                    >{ "›" }</button>
                </div>
                <div class="industries-cta">
                    <h3>{ "Don't See Your Industry?" }</h3>
                    <p class="muted">{ "We customize solutions for businesses of all sizes and types." }</p>
                    <button class="btn btn-primary" onclick={Callback::from(|_: MouseEvent| scroll_to_section("demo"))}>
                        { "Talk to Our Team" }
                    </button>
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Measure);
        }
    }
}
