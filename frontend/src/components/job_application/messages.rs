use common::model::application::{ApplicationField, ResumeRef};
use common::submission::application::ApplicationOutcome;

pub enum Msg {
    SetField(ApplicationField, String),
    ResumeSelected(Option<ResumeRef>),
    Submit,
    Finished(ApplicationOutcome),
    ResetAndClose,
    Close,
    Share,
}
