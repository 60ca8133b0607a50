use yew::prelude::*;

use common::config::{SALES_EMAIL, SALES_PHONE};

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="section cta">
            <h2>{ "Ready to Transform Your Store?" }</h2>
            <p>
                { "Join " }<strong>{ "12,000+" }</strong>{ " retailers across India growing with Nukkad Shops" }
            </p>
            <div class="cta-actions">
                <a class="btn btn-primary" href={format!("tel:{SALES_PHONE}")}>{ "Call Sales" }</a>
                <a class="btn btn-outline" href={format!("mailto:{SALES_EMAIL}")}>{ "Email Us" }</a>
            </div>
            <div class="cta-badges">
                <span>{ "Easy Growth For Your Store" }</span>
                <span>{ "4.9/5 Rating" }</span>
                <span>{ "Made in India 🇮🇳" }</span>
            </div>
        </section>
    }
}
