use yew::prelude::*;

use common::content::faq::{toggle, FAQ};

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section class="section faq">
            <h2>{ "Frequently Asked Questions" }</h2>
            <p class="muted">{ "Everything you need to know about Nukkad Shops POS solutions" }</p>
            <div class="faq-list">
                { for FAQ.iter().enumerate().map(|(index, entry)| {
                    let is_open = *open == Some(index);
                    let onclick = {
                        let open = open.clone();
                        Callback::from(move |_: MouseEvent| open.set(toggle(*open, index)))
                    };
                    html! {
                        <div class={classes!("faq-item", is_open.then_some("open"))}>
                            <button class="faq-question" {onclick} aria-expanded={is_open.to_string()}>
                                <span>{ entry.question }</span>
                                <span class="faq-icon">{ if is_open { "−" } else { "+" } }</span>
                            </button>
                            if is_open {
                                <div class="faq-answer">
                                    <img src={entry.image} alt="" />
                                    <p>{ entry.answer }</p>
                                    if !entry.points.is_empty() {
                                        <ul>
                                            { for entry.points.iter().map(|point| html! { <li>{ *point }</li> }) }
                                        </ul>
                                    }
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
