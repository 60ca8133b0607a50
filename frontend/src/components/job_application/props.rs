use yew::prelude::*;

use common::model::job::Job;

#[derive(Properties, PartialEq, Clone)]
pub struct JobApplicationProps {
    /// The opening being viewed; nothing is rendered without one.
    pub job: Option<&'static Job>,
    pub on_close: Callback<()>,
}
