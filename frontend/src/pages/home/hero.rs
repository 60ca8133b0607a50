use gloo_timers::callback::Interval;
use yew::prelude::*;

use common::carousel::{next_index, CAROUSEL_INTERVAL_MS};
use common::content::devices::HERO_CAROUSEL;
use common::content::metrics::HERO_STATS;

use crate::components::counter::{AnimatedCounter, CounterFormat};
use crate::components::helpers::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_brochure: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let open_brochure = props.on_open_brochure.reform(|_: MouseEvent| ());
    let call_for_demo = Callback::from(|_: MouseEvent| scroll_to_section("demo"));

    html! {
        <section class="hero">
            <div class="hero-copy">
                <span class="pill">{ "Trusted by 10,000+ retailers" }</span>
                <h1>{ "Smart POS for Every Indian Store" }</h1>
                <p class="muted">
                    { "Empowering kirana stores, supermarkets, multi-counter retail and restaurants with fast billing, inventory and analytics." }
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={call_for_demo}>{ "Call for Demo" }</button>
                    <button class="btn btn-outline" onclick={open_brochure}>{ "Download Brochure" }</button>
                </div>
                <div class="hero-stats">
                    { for HERO_STATS.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <strong>
                                <AnimatedCounter end={stat.value} suffix={stat.suffix} format={CounterFormat::Compact} />
                            </strong>
                            <span>{ stat.label }</span>
                        </div>
                    }) }
                </div>
            </div>
            <DeviceCarousel />
        </section>
    }
}

pub enum CarouselMsg {
    Advance,
    Select(usize),
}

/// Device images rotating under the hero copy.
pub struct DeviceCarousel {
    current: usize,
    _ticker: Interval,
}

impl Component for DeviceCarousel {
    type Message = CarouselMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        Self {
            current: 0,
            _ticker: Interval::new(CAROUSEL_INTERVAL_MS, move || {
                link.send_message(CarouselMsg::Advance)
            }),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.current = match msg {
            CarouselMsg::Advance => next_index(self.current, HERO_CAROUSEL.len()),
            CarouselMsg::Select(index) => index.min(HERO_CAROUSEL.len().saturating_sub(1)),
        };
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(slide) = HERO_CAROUSEL.get(self.current) else {
            return Html::default();
        };
        html! {
            <div class="device-carousel">
                <img src={slide.image} alt={slide.name} />
                <div class="device-carousel-caption">
                    <strong>{ slide.name }</strong>
                    <span>{ slide.feature }</span>
                </div>
                <div class="dots">
                    { for (0..HERO_CAROUSEL.len()).map(|index| html! {
                        <button
                            class={classes!("dot", (index == self.current).then_some("active"))}
                            aria-label={format!("Slide {}", index + 1)}
                            onclick={ctx.link().callback(move |_| CarouselMsg::Select(index))}
                        />
                    }) }
                </div>
            </div>
        }
    }
}
