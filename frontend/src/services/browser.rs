use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use common::errors::SubmissionError;
use common::submission::lead::BrowserEffects;
use common::submission::{LocalTask, Spawner, Timer};

/// Deep links and downloads through the current window.
#[derive(Clone, Copy, Default)]
pub struct BrowserWindow;

impl BrowserEffects for BrowserWindow {
    fn open_external(&self, url: &str) -> Result<(), SubmissionError> {
        let window = web_sys::window()
            .ok_or_else(|| SubmissionError::DeepLink("no window".to_string()))?;
        // With `noopener` the call returns no handle even when the tab opened.
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map(|_| ())
            .map_err(|err| SubmissionError::DeepLink(format!("{err:?}")))
    }

    fn save_file(&self, file_name: &str, bytes: &[u8], mime: &str) -> Result<(), SubmissionError> {
        save_blob(file_name, bytes, mime)
            .map_err(|err| SubmissionError::AssetUnavailable(format!("{err:?}")))
    }
}

fn save_blob(file_name: &str, bytes: &[u8], mime: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.set_rel("noopener noreferrer");
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Runs detached tasks on the page's event loop.
#[derive(Clone, Copy, Default)]
pub struct LocalSpawner;

impl Spawner for LocalSpawner {
    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
    }
}
