use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use common::counters::{count_up, format_compact, format_indian, COUNT_UP_MS};

const FRAME_MS: u32 = 16;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum CounterFormat {
    /// `12,000`, `1M`, `2.4M`.
    Compact,
    /// `24,00,000`.
    Indian,
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    #[prop_or_default]
    pub start: u64,
    pub end: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(CounterFormat::Compact)]
    pub format: CounterFormat,
    /// Wait until the counter is scrolled into view before counting.
    #[prop_or_default]
    pub on_view: bool,
}

pub enum Msg {
    CheckVisible,
    Tick,
}

/// Number that counts up from `start` to `end` with an ease-out curve.
pub struct AnimatedCounter {
    value: u64,
    node: NodeRef,
    started_at: Option<f64>,
    ticker: Option<Interval>,
    scroll_listener: Option<Closure<dyn Fn()>>,
}

impl AnimatedCounter {
    fn start(&mut self, ctx: &Context<Self>) {
        self.remove_scroll_listener();
        let link = ctx.link().clone();
        self.started_at = Some(js_sys::Date::now());
        self.ticker = Some(Interval::new(FRAME_MS, move || link.send_message(Msg::Tick)));
    }

    fn in_view(&self) -> bool {
        let Some(element) = self.node.cast::<Element>() else {
            return false;
        };
        let viewport = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let rect = element.get_bounding_client_rect();
        rect.top() < viewport && rect.bottom() > 0.0
    }

    fn remove_scroll_listener(&mut self) {
        if let (Some(listener), Some(window)) = (self.scroll_listener.take(), web_sys::window()) {
            window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}

impl Component for AnimatedCounter {
    type Message = Msg;
    type Properties = CounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            value: ctx.props().start,
            node: NodeRef::default(),
            started_at: None,
            ticker: None,
            scroll_listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CheckVisible => {
                if self.started_at.is_none() && self.in_view() {
                    self.start(ctx);
                }
                false
            }
            Msg::Tick => {
                let Some(started_at) = self.started_at else {
                    return false;
                };
                let props = ctx.props();
                let elapsed = js_sys::Date::now() - started_at;
                self.value = count_up(props.start, props.end, elapsed);
                if elapsed >= COUNT_UP_MS {
                    self.ticker = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let text = match props.format {
            CounterFormat::Compact => format_compact(self.value),
            CounterFormat::Indian => format_indian(self.value),
        };
        html! { <span class="counter" ref={self.node.clone()}>{ text }{ props.suffix.clone() }</span> }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if !ctx.props().on_view || self.in_view() {
            self.start(ctx);
            return;
        }
        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::CheckVisible));
        if let Some(window) = web_sys::window() {
            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .ok();
        }
        self.scroll_listener = Some(listener);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.remove_scroll_listener();
    }
}
