//! DOM helpers shared by the pages: toasts, smooth scrolling and sharing.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const TOAST_MS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(15, 23, 42, 0.9)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "8px").ok();
                style.set_property("z-index", "10000").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                        html_toast.remove();
                    });
                }
            }
        }
    }
}

/// Smooth-scrolls the element with `id` to the middle of the viewport.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    let Some(element) = element else {
        log::debug!("no section with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Shares the current page through the Web Share API, or copies its URL to
/// the clipboard where sharing is not supported.
pub fn share_current_page(title: &str, text: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let url = window.location().href().unwrap_or_default();
    let navigator: JsValue = window.navigator().into();

    if let Some(share) = method(&navigator, "share") {
        let data = Object::new();
        let fields = [("title", title), ("text", text), ("url", url.as_str())];
        for (key, value) in fields {
            Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value)).ok();
        }
        await_promise(share.call1(&navigator, &data), |result| {
            if let Err(err) = result {
                log::debug!("share dismissed: {err:?}");
            }
        });
        return;
    }

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined());
    let write = clipboard
        .as_ref()
        .and_then(|clipboard| method(clipboard, "writeText"));
    match (clipboard, write) {
        (Some(clipboard), Some(write)) => {
            await_promise(write.call1(&clipboard, &JsValue::from_str(&url)), |result| {
                match result {
                    Ok(_) => show_toast("Job link copied to clipboard!"),
                    Err(err) => log::warn!("could not copy job link: {err:?}"),
                }
            });
        }
        _ => log::warn!("neither sharing nor the clipboard is available"),
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn await_promise(
    call: Result<JsValue, JsValue>,
    done: impl FnOnce(Result<JsValue, JsValue>) + 'static,
) {
    match call.and_then(|value| value.dyn_into::<Promise>().map_err(JsValue::from)) {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            done(JsFuture::from(promise).await);
        }),
        Err(err) => done(Err(err)),
    }
}
