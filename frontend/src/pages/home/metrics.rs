use yew::prelude::*;

use common::content::metrics::METRICS;

use crate::components::counter::{AnimatedCounter, CounterFormat};

#[function_component(Metrics)]
pub fn metrics() -> Html {
    html! {
        <section class="section metrics">
            <h2>{ "Trusted by Thousands" }</h2>
            <div class="metrics-grid">
                { for METRICS.iter().map(|metric| html! {
                    <div class="metric">
                        <strong>
                            <AnimatedCounter
                                start={metric.start_from}
                                end={metric.value}
                                suffix={metric.suffix}
                                format={CounterFormat::Indian}
                                on_view={true}
                            />
                        </strong>
                        <h3>{ metric.label }</h3>
                        <p class="muted">{ metric.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
