//! Brochure lead flow: the WhatsApp redirect path and the direct download
//! path.

use std::time::Duration;

use async_trait::async_trait;

use super::{Notice, Phase, Spawner, SubmissionGate};
use crate::config::{
    BROCHURE_FILE_NAME, BROCHURE_MIME_TYPE, LeadTimings, WHATSAPP_BUSINESS_NUMBER,
};
use crate::errors::{SubmissionError, ValidationError};
use crate::model::lead::{Lead, LeadForm, LeadSource};
use crate::requests::BrochureLeadRequest;
use crate::validation::validate_lead;

pub const UNTRACKED_DOWNLOAD_NOTICE: &str =
    "Brochure downloaded! Note: Your details may not have been saved. Please contact us if needed.";

/// The external backend: lead tracking and the brochure asset.
#[async_trait(?Send)]
pub trait LeadGateway {
    /// Posts the lead. Only a 2xx response counts as tracked.
    async fn submit_lead(
        &self,
        request: &BrochureLeadRequest,
        timeout: Duration,
    ) -> Result<(), SubmissionError>;

    async fn fetch_brochure(&self) -> Result<Vec<u8>, SubmissionError>;
}

/// Side effects that leave the page.
pub trait BrowserEffects {
    /// Opens `url` in a new browsing context.
    fn open_external(&self, url: &str) -> Result<(), SubmissionError>;

    /// Hands `bytes` to the browser as a download named `file_name`.
    fn save_file(&self, file_name: &str, bytes: &[u8], mime: &str) -> Result<(), SubmissionError>;
}

/// What the popup should do after a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Non-blocking message to show while waiting for the reset.
    pub notice: Option<Notice>,
    /// Delay before the popup closes and the form is cleared.
    pub reset_after: Duration,
    /// Deep link that was opened, on the messaging path.
    pub redirect: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadOutcome {
    /// Another attempt was already in flight; nothing happened.
    Busy,
    Rejected(ValidationError),
    Completed(Completion),
    /// Blocking failure. The form keeps its contents.
    Failed(SubmissionError),
}

pub struct LeadFlow<G, B, S> {
    gateway: G,
    browser: B,
    spawner: S,
    timings: LeadTimings,
    whatsapp_number: String,
    gate: SubmissionGate,
}

impl<G, B, S> LeadFlow<G, B, S>
where
    G: LeadGateway + Clone + 'static,
    B: BrowserEffects,
    S: Spawner,
{
    pub fn new(gateway: G, browser: B, spawner: S) -> Self {
        Self {
            gateway,
            browser,
            spawner,
            timings: LeadTimings::default(),
            whatsapp_number: WHATSAPP_BUSINESS_NUMBER.to_string(),
            gate: SubmissionGate::new(),
        }
    }

    pub fn with_timings(mut self, timings: LeadTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn phase(&self) -> Phase {
        self.gate.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_busy()
    }

    /// A completed attempt is waiting for its reset.
    pub fn completion_pending(&self) -> bool {
        self.gate.phase() == Phase::Succeeded
    }

    /// Returns the flow to `Idle` once the popup has been reset.
    pub fn reset(&self) {
        self.gate.reset();
    }

    pub async fn submit(&self, form: &LeadForm, source: LeadSource) -> LeadOutcome {
        if !self.gate.try_begin() {
            log::debug!("brochure submit ignored, an attempt is already running");
            return LeadOutcome::Busy;
        }

        let lead = match validate_lead(form) {
            Ok(lead) => lead,
            Err(err) => {
                log::debug!("brochure form rejected: {err}");
                self.gate.reject(err.clone());
                return LeadOutcome::Rejected(err);
            }
        };

        self.gate.start();
        let request = BrochureLeadRequest::new(&lead, source);
        let result = match source {
            LeadSource::Whatsapp => self.send_via_whatsapp(&lead, request),
            LeadSource::Direct => self.download_directly(request).await,
        };

        match result {
            Ok(completion) => {
                self.gate.succeed();
                LeadOutcome::Completed(completion)
            }
            Err(err) => {
                log::error!("brochure request via {} failed: {err:?}", source.as_str());
                self.gate.fail(err.clone());
                LeadOutcome::Failed(err)
            }
        }
    }

    fn send_via_whatsapp(
        &self,
        lead: &Lead,
        request: BrochureLeadRequest,
    ) -> Result<Completion, SubmissionError> {
        let gateway = self.gateway.clone();
        let timeout = self.timings.messaging_tracking_timeout;
        self.spawner.spawn(Box::pin(async move {
            match gateway.submit_lead(&request, timeout).await {
                Ok(()) => log::info!("whatsapp lead tracked"),
                Err(err) => log::warn!("whatsapp lead was not tracked: {err:?}"),
            }
        }));

        let link = lead.whatsapp_link(&self.whatsapp_number);
        self.browser.open_external(&link)?;

        Ok(Completion {
            notice: None,
            reset_after: self.timings.messaging_reset_delay,
            redirect: Some(link),
        })
    }

    async fn download_directly(
        &self,
        request: BrochureLeadRequest,
    ) -> Result<Completion, SubmissionError> {
        let tracked = match self
            .gateway
            .submit_lead(&request, self.timings.direct_tracking_timeout)
            .await
        {
            Ok(()) => true,
            Err(err) => {
                log::warn!("direct lead was not tracked: {err:?}");
                false
            }
        };

        let bytes = self.gateway.fetch_brochure().await.map_err(as_asset_error)?;
        self.browser
            .save_file(BROCHURE_FILE_NAME, &bytes, BROCHURE_MIME_TYPE)
            .map_err(as_asset_error)?;
        log::info!("brochure downloaded ({} bytes, tracked: {tracked})", bytes.len());

        if tracked {
            return Ok(Completion {
                notice: None,
                reset_after: Duration::ZERO,
                redirect: None,
            });
        }

        let shown_for = self.timings.untracked_notice_duration;
        Ok(Completion {
            notice: Some(Notice::info(UNTRACKED_DOWNLOAD_NOTICE, shown_for)),
            reset_after: shown_for,
            redirect: None,
        })
    }
}

fn as_asset_error(err: SubmissionError) -> SubmissionError {
    match err {
        SubmissionError::AssetUnavailable(_) => err,
        other => SubmissionError::AssetUnavailable(other.to_string()),
    }
}
