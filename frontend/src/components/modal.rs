use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Overlay dialog. Clicking the backdrop or the close button emits `on_close`;
/// the page behind it does not scroll while it is open.
pub struct Modal {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return Html::default();
        }

        let close = props.on_close.reform(|_: MouseEvent| ());
        let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="modal-backdrop show" id={self.id.clone()} onclick={close.clone()}>
                <div
                    class={classes!("modal-panel", props.wide.then_some("wide"))}
                    role="dialog"
                    aria-modal="true"
                    onclick={stop}
                >
                    <button class="modal-close" aria-label="Close" onclick={close}>{ "✕" }</button>
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        lock_page_scroll(ctx.props().open);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        lock_page_scroll(false);
    }
}

fn lock_page_scroll(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "" };
        body.style().set_property("overflow", value).ok();
    }
}
