use common::model::lead::LeadSource;
use common::submission::lead::LeadOutcome;

pub enum Msg {
    SetName(String),
    SetMobile(String),
    SetEmail(String),
    SetCity(String),
    SetConsent(bool),
    Submit(LeadSource),
    Finished(LeadOutcome),
    /// Closes the popup and clears the form once a completed attempt has run its course.
    ResetAndClose,
    Close,
}
