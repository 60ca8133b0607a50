use std::rc::Rc;

use gloo_timers::callback::Timeout;

use common::model::application::{ApplicationForm, ResumeRef};

use crate::services::{job_application_flow, JobApplicationFlow};

pub struct JobApplicationModal {
    pub form: ApplicationForm,
    pub resume: Option<ResumeRef>,
    pub error: Option<String>,
    pub submitting: bool,
    /// The success view is up until the reset.
    pub submitted: bool,
    pub flow: Rc<JobApplicationFlow>,
    pub reset_timer: Option<Timeout>,
}

impl JobApplicationModal {
    pub fn new() -> Self {
        Self {
            form: ApplicationForm::default(),
            resume: None,
            error: None,
            submitting: false,
            submitted: false,
            flow: Rc::new(job_application_flow()),
            reset_timer: None,
        }
    }

    pub fn clear(&mut self) {
        self.form = ApplicationForm::default();
        self.resume = None;
        self.error = None;
        self.submitting = false;
        self.submitted = false;
        self.reset_timer = None;
        self.flow.reset();
    }
}
