use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub children: Html,
    /// Seconds for one full loop.
    #[prop_or(30)]
    pub duration: u32,
    #[prop_or_default]
    pub reverse: bool,
}

/// Endless horizontal scroller that stops while hovered.
#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let paused = use_state(|| false);
    let pause = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let resume = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let track_style = format!(
        "animation-duration: {}s; animation-direction: {}; animation-play-state: {};",
        props.duration,
        if props.reverse { "reverse" } else { "normal" },
        if *paused { "paused" } else { "running" },
    );

    html! {
        <div class="marquee" onmouseenter={pause} onmouseleave={resume}>
            <div class="marquee-track" style={track_style}>
                { props.children.clone() }
                <div class="marquee-copy" aria-hidden="true">{ props.children.clone() }</div>
            </div>
        </div>
    }
}
