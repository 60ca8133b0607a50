use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlScriptElement;
use yew::prelude::*;
use yew_router::prelude::*;

use common::config::{HUBSPOT_SCRIPT_ID, HUBSPOT_SCRIPT_SRC};

use crate::route::{switch, Route};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <ScrollToTop />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Err(err) = load_hubspot() {
                log::warn!("HubSpot script could not be injected: {err:?}");
            }
        }
    }
}

/// Injects the HubSpot tracking script unless it is already on the page.
fn load_hubspot() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(HUBSPOT_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script: HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    script.set_id(HUBSPOT_SCRIPT_ID);
    script.set_src(HUBSPOT_SCRIPT_SRC);
    script.set_async(true);
    script.set_defer(true);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&script)?;
    log::info!("HubSpot script loaded");
    Ok(())
}

/// Scrolls back to the top whenever the path changes.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let location = use_location();
    let path = location.map(|l| l.path().to_string()).unwrap_or_default();

    use_effect_with(path, |_| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
        || ()
    });

    Html::default()
}
