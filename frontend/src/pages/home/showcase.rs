use yew::prelude::*;
use yew_router::prelude::*;

use common::content::devices::DEVICES;
use common::model::device::{Device, DeviceId};

use crate::route::Route;

/// Specs visible before a card is expanded.
const COLLAPSED_SPECS: usize = 4;

#[function_component(ProductShowcase)]
pub fn product_showcase() -> Html {
    let expanded = use_state(|| None::<DeviceId>);

    html! {
        <section class="section showcase">
            <h2>{ "Choose Your Perfect POS" }</h2>
            <p class="muted">{ "Premium devices designed for modern retail excellence" }</p>
            <div class="showcase-grid">
                { for DEVICES.iter().map(|device| {
                    let is_open = *expanded == Some(device.id);
                    let toggle = {
                        let expanded = expanded.clone();
                        let id = device.id;
                        Callback::from(move |_: MouseEvent| {
                            expanded.set(if is_open { None } else { Some(id) })
                        })
                    };
                    device_card(device, is_open, toggle)
                }) }
            </div>
        </section>
    }
}

fn device_card(device: &'static Device, expanded: bool, toggle: Callback<MouseEvent>) -> Html {
    let shown = if expanded {
        device.headline_specs.len()
    } else {
        COLLAPSED_SPECS
    };
    html! {
        <article class="device-card" id={device.id.slug()}>
            <img src={device.image} alt={device.name()} />
            <h3>{ device.name() }</h3>
            <p class="tagline">{ device.tagline }</p>
            <p class="muted">{ device.description }</p>
            <dl class="spec-list">
                { for device.headline_specs.iter().take(shown).map(|spec| html! {
                    <div class="spec-row">
                        <dt>{ spec.kind.label() }</dt>
                        <dd>{ spec.value }</dd>
                    </div>
                }) }
            </dl>
            <div class="device-card-actions">
                <button class="btn btn-ghost" onclick={toggle}>
                    { if expanded { "Show Less" } else { "All Specs" } }
                </button>
                <Link<Route>
                    to={Route::Device { device_id: device.id.slug().to_string() }}
                    classes="btn btn-primary"
                >
                    { "View Details" }
                </Link<Route>>
            </div>
        </article>
    }
}
