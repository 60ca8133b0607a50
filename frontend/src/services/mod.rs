//! Browser implementations of the traits the submission flows are written
//! against.

pub mod browser;
pub mod http;
pub mod storage;

use common::submission::application::ApplicationFlow;
use common::submission::lead::LeadFlow;

use browser::{BrowserWindow, GlooTimer, LocalSpawner};
use http::HttpLeadGateway;
use storage::LocalStorageApplicationLog;

pub type BrochureFlow = LeadFlow<HttpLeadGateway, BrowserWindow, LocalSpawner>;
pub type JobApplicationFlow = ApplicationFlow<LocalStorageApplicationLog, GlooTimer>;

pub fn brochure_flow() -> BrochureFlow {
    LeadFlow::new(HttpLeadGateway::from_build_env(), BrowserWindow, LocalSpawner)
}

pub fn job_application_flow() -> JobApplicationFlow {
    ApplicationFlow::new(LocalStorageApplicationLog::default(), GlooTimer)
}
