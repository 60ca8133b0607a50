use yew::prelude::*;

use common::content::testimonials::{Testimonial, TESTIMONIALS};

use crate::components::marquee::Marquee;

const MAX_RATING: u8 = 5;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section testimonials">
            <h2>{ "Trusted by Industry Leaders and Loved by Clients" }</h2>
            <p class="muted">{ "See what our customers have to say about their experience" }</p>
            <Marquee duration={60}>
                { for TESTIMONIALS.iter().map(card) }
            </Marquee>
        </section>
    }
}

fn card(testimonial: &'static Testimonial) -> Html {
    let stars: String = (0..MAX_RATING)
        .map(|i| if i < testimonial.rating { '★' } else { '☆' })
        .collect();
    html! {
        <figure class="testimonial-card">
            <div class="stars" aria-label={format!("{} out of {MAX_RATING}", testimonial.rating)}>{ stars }</div>
            <blockquote>{ testimonial.text }</blockquote>
            <figcaption>
                <img src={testimonial.image} alt={testimonial.name} />
                <div>
                    <strong>{ testimonial.name }</strong>
                    <span>{ format!("{}, {}", testimonial.role, testimonial.company) }</span>
                </div>
            </figcaption>
        </figure>
    }
}
