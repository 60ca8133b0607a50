use std::rc::Rc;

use gloo_timers::callback::Timeout;

use common::model::lead::{LeadForm, LeadSource};
use common::submission::Notice;

use crate::services::{brochure_flow, BrochureFlow};

pub struct BrochurePopup {
    pub form: LeadForm,
    /// Blocking message from validation or a failed attempt.
    pub error: Option<String>,
    /// Non-blocking message shown until the reset.
    pub notice: Option<Notice>,
    /// Path of the attempt in flight, for the button labels.
    pub submitting: Option<LeadSource>,
    pub flow: Rc<BrochureFlow>,
    pub reset_timer: Option<Timeout>,
}

impl BrochurePopup {
    pub fn new() -> Self {
        Self {
            form: LeadForm::default(),
            error: None,
            notice: None,
            submitting: None,
            flow: Rc::new(brochure_flow()),
            reset_timer: None,
        }
    }

    pub fn clear(&mut self) {
        self.form = LeadForm::default();
        self.error = None;
        self.notice = None;
        self.submitting = None;
        self.reset_timer = None;
        self.flow.reset();
    }
}
