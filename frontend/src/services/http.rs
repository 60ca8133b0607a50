use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use web_sys::AbortController;

use common::config::Endpoints;
use common::errors::SubmissionError;
use common::requests::BrochureLeadRequest;
use common::submission::lead::LeadGateway;

/// Talks to the lead backend with `gloo-net`.
#[derive(Clone)]
pub struct HttpLeadGateway {
    endpoints: Endpoints,
}

impl HttpLeadGateway {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn from_build_env() -> Self {
        Self::new(Endpoints::from_build_env())
    }
}

#[async_trait(?Send)]
impl LeadGateway for HttpLeadGateway {
    async fn submit_lead(
        &self,
        request: &BrochureLeadRequest,
        timeout: Duration,
    ) -> Result<(), SubmissionError> {
        let controller =
            AbortController::new().map_err(|err| SubmissionError::Network(format!("{err:?}")))?;
        let timed_out = Rc::new(Cell::new(false));

        // Dropping the handle cancels the timer.
        let _abort_timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(millis(timeout), move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let response = Request::post(&self.endpoints.brochure_lead())
            .abort_signal(Some(&controller.signal()))
            .json(request)
            .map_err(|err| SubmissionError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| {
                if timed_out.get() {
                    SubmissionError::Timeout
                } else {
                    SubmissionError::Network(err.to_string())
                }
            })?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let message = server_message(&response).await;
        log::warn!(
            "lead endpoint returned {status}: {}",
            message.as_deref().unwrap_or("no message")
        );
        Err(SubmissionError::Server { status, message })
    }

    async fn fetch_brochure(&self) -> Result<Vec<u8>, SubmissionError> {
        let response = Request::get(&self.endpoints.brochure_asset())
            .send()
            .await
            .map_err(|err| SubmissionError::Network(err.to_string()))?;

        if !response.ok() {
            return Err(SubmissionError::Server {
                status: response.status(),
                message: None,
            });
        }

        response
            .binary()
            .await
            .map_err(|err| SubmissionError::Network(err.to_string()))
    }
}

/// The `message` field of an error body, when the body is JSON and has one.
async fn server_message(response: &Response) -> Option<String> {
    let body = response.json::<serde_json::Value>().await.ok()?;
    body.get("message")?.as_str().map(str::to_owned)
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
