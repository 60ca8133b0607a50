use yew::prelude::*;

use common::content::features::FEATURES;

use crate::components::marquee::Marquee;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="section features">
            <h2>{ "Key Features of the Devices" }</h2>
            <p class="muted">{ "Comprehensive features designed to streamline your retail operations and boost productivity." }</p>
            <Marquee duration={40}>
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <img src={feature.image} alt={feature.title} />
                        <span>{ feature.title }</span>
                    </div>
                }) }
            </Marquee>
        </section>
    }
}
