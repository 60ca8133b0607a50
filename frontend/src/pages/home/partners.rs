use yew::prelude::*;

use common::content::partners::{PARTNERS, PARTNER_BENEFITS};

use crate::components::marquee::Marquee;

#[function_component(Partners)]
pub fn partners() -> Html {
    html! {
        <section class="section partners">
            <h2>{ "Proud to be the choice of leading businesses" }</h2>
            <p class="muted">{ "Collaborating with industry leaders to deliver exceptional technology" }</p>
            <Marquee duration={35} reverse={true}>
                { for PARTNERS.iter().map(|partner| html! {
                    <div class="partner-logo">
                        <img src={partner.logo} alt={partner.name} />
                    </div>
                }) }
            </Marquee>
            <div class="benefits-grid">
                { for PARTNER_BENEFITS.iter().map(|benefit| html! {
                    <div class="benefit">
                        <h3>{ benefit.title }</h3>
                        <p class="muted">{ benefit.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
