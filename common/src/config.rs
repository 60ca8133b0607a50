//! Build-time configuration and the fixed constants of the site.
//!
//! The only environment-supplied value is the API host. It is read with
//! `option_env!` when the crate is compiled (Trunk forwards the variable to
//! cargo), falling back to a local development server.

use std::time::Duration;

/// API host used when `API_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// WhatsApp business number: country code followed by the number, no `+`.
pub const WHATSAPP_BUSINESS_NUMBER: &str = "917997095678";

pub const BROCHURE_FILE_NAME: &str = "Nukkad_Shops_Brochure.pdf";
pub const BROCHURE_MIME_TYPE: &str = "application/pdf";

/// `localStorage` key holding the job application log.
pub const APPLICATIONS_STORAGE_KEY: &str = "job_applications";

pub const SALES_PHONE: &str = "+917997095678";
pub const SALES_EMAIL: &str = "sales@nukkadshops.com";
pub const CAREERS_EMAIL: &str = "careers@nukkadshops.com";

pub const HUBSPOT_SCRIPT_ID: &str = "hs-script-loader";
pub const HUBSPOT_SCRIPT_SRC: &str = "//js-na2.hs-scripts.com/243714442.js";

/// Delay before the brochure popup opens on its own.
pub const BROCHURE_POPUP_DELAY: Duration = Duration::from_secs(10);

/// Timings of the lead flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadTimings {
    /// Timeout of the tracking call on the messaging path.
    pub messaging_tracking_timeout: Duration,
    /// Timeout of the tracking call on the direct-download path.
    pub direct_tracking_timeout: Duration,
    /// Delay between opening the deep link and resetting the form.
    pub messaging_reset_delay: Duration,
    /// How long the "details may not be saved" notice stays up.
    pub untracked_notice_duration: Duration,
}

impl Default for LeadTimings {
    fn default() -> Self {
        Self {
            messaging_tracking_timeout: Duration::from_secs(5),
            direct_tracking_timeout: Duration::from_secs(10),
            messaging_reset_delay: Duration::from_secs(1),
            untracked_notice_duration: Duration::from_secs(5),
        }
    }
}

/// Timings of the job application flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationTimings {
    /// Simulated network latency before the record is stored.
    pub simulated_latency: Duration,
    /// How long the success view stays up before the form resets.
    pub success_display: Duration,
}

impl Default for ApplicationTimings {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_secs(2),
            success_display: Duration::from_secs(3),
        }
    }
}

/// The two endpoints of the external backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        let base = if base.is_empty() { DEFAULT_API_BASE } else { base };
        Self {
            base: base.to_string(),
        }
    }

    /// Endpoints for the API host baked in at build time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_URL").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST` target receiving lead records.
    pub fn brochure_lead(&self) -> String {
        format!("{}/api/brochure", self.base)
    }

    /// `GET` target serving the brochure PDF.
    pub fn brochure_asset(&self) -> String {
        format!("{}/brochure", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_trim_trailing_slashes() {
        let endpoints = Endpoints::new("https://api.nukkadshops.com//");
        assert_eq!(
            endpoints.brochure_lead(),
            "https://api.nukkadshops.com/api/brochure"
        );
        assert_eq!(
            endpoints.brochure_asset(),
            "https://api.nukkadshops.com/brochure"
        );
    }

    #[test]
    fn blank_base_falls_back_to_the_local_server() {
        assert_eq!(Endpoints::new("  ").base(), DEFAULT_API_BASE);
    }
}
