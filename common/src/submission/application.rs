//! Job application flow and the append-only application log.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;

use super::{Phase, SubmissionGate, Timer};
use crate::config::ApplicationTimings;
use crate::errors::{StoreError, ValidationError};
use crate::model::application::{ApplicationForm, JobApplication, ResumeRef};
use crate::validation::validate_application;

/// Append-only log of submitted applications.
pub trait ApplicationStore {
    fn append(&self, application: &JobApplication) -> Result<(), StoreError>;

    fn entries(&self) -> Result<Vec<JobApplication>, StoreError>;
}

impl<S: ApplicationStore + ?Sized> ApplicationStore for Rc<S> {
    fn append(&self, application: &JobApplication) -> Result<(), StoreError> {
        (**self).append(application)
    }

    fn entries(&self) -> Result<Vec<JobApplication>, StoreError> {
        (**self).entries()
    }
}

/// Serialized log after appending `record` to the stored JSON array.
/// A stored value that no longer decodes is discarded and the log starts over.
pub fn appended_log(
    existing: Option<&str>,
    record: &JobApplication,
) -> Result<String, StoreError> {
    let mut entries: Vec<JobApplication> = match existing {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
            log::warn!("stored applications could not be decoded, starting a new log: {err}");
            Vec::new()
        }),
        None => Vec::new(),
    };
    entries.push(record.clone());
    serde_json::to_string(&entries).map_err(|err| StoreError::Write(err.to_string()))
}

/// In-memory log, used when browser storage is not available and in tests.
#[derive(Debug, Default)]
pub struct MemoryApplicationLog {
    entries: RefCell<Vec<JobApplication>>,
}

impl MemoryApplicationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ApplicationStore for MemoryApplicationLog {
    fn append(&self, application: &JobApplication) -> Result<(), StoreError> {
        self.entries.borrow_mut().push(application.clone());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<JobApplication>, StoreError> {
        Ok(self.entries.borrow().clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationOutcome {
    Busy,
    Rejected(ValidationError),
    /// The record was accepted. The success view stays up for `reset_after`.
    Submitted {
        record: JobApplication,
        reset_after: Duration,
    },
}

pub struct ApplicationFlow<St, T> {
    store: St,
    timer: T,
    timings: ApplicationTimings,
    gate: SubmissionGate,
}

impl<St, T> ApplicationFlow<St, T>
where
    St: ApplicationStore,
    T: Timer,
{
    pub fn new(store: St, timer: T) -> Self {
        Self {
            store,
            timer,
            timings: ApplicationTimings::default(),
            gate: SubmissionGate::new(),
        }
    }

    pub fn with_timings(mut self, timings: ApplicationTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn store(&self) -> &St {
        &self.store
    }

    pub fn phase(&self) -> Phase {
        self.gate.phase()
    }

    pub fn is_submitting(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn reset(&self) {
        self.gate.reset();
    }

    pub async fn submit(
        &self,
        form: &ApplicationForm,
        job_title: &str,
        resume: Option<&ResumeRef>,
    ) -> ApplicationOutcome {
        if !self.gate.try_begin() {
            log::debug!("application submit ignored, an attempt is already running");
            return ApplicationOutcome::Busy;
        }

        let record = match validate_application(form, job_title, resume, Utc::now()) {
            Ok(record) => record,
            Err(err) => {
                self.gate.reject(err.clone());
                return ApplicationOutcome::Rejected(err);
            }
        };

        self.gate.start();
        self.timer.sleep(self.timings.simulated_latency).await;

        // The visitor still sees the success view when the log cannot be written.
        match self.store.append(&record) {
            Ok(()) => log::info!(
                "application for {} stored ({})",
                record.job_title,
                record.resume_file_name
            ),
            Err(err) => log::error!("failed to store application: {err}"),
        }

        self.gate.succeed();
        ApplicationOutcome::Submitted {
            record,
            reset_after: self.timings.success_display,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::application::{EducationLevel, ExperienceBand};

    fn record(name: &str) -> JobApplication {
        JobApplication {
            full_name: name.into(),
            email: "priya@example.com".into(),
            phone: "9000011111".into(),
            education: EducationLevel::Diploma,
            experience: ExperienceBand::Fresher,
            current_company: String::new(),
            expected_salary: String::new(),
            notice_period: None,
            linked_in: String::new(),
            portfolio: String::new(),
            cover_letter: String::new(),
            job_title: "Field Support Executive".into(),
            resume_file_name: "cv.pdf".into(),
            applied_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap(),
        }
    }

    fn decode(raw: &str) -> Vec<JobApplication> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn first_application_starts_the_log() {
        let raw = appended_log(None, &record("Priya")).unwrap();
        assert_eq!(decode(&raw), vec![record("Priya")]);
    }

    #[test]
    fn later_applications_are_appended_in_order() {
        let existing = appended_log(None, &record("Priya")).unwrap();
        let raw = appended_log(Some(&existing), &record("Arjun")).unwrap();
        let names: Vec<_> = decode(&raw).into_iter().map(|a| a.full_name).collect();
        assert_eq!(names, ["Priya", "Arjun"]);
    }

    #[test]
    fn undecodable_log_is_replaced_and_the_new_record_kept() {
        for corrupt in ["{not json", "{\"fullName\":\"x\"}", "[1, 2]"] {
            let raw = appended_log(Some(corrupt), &record("Priya")).unwrap();
            assert_eq!(decode(&raw), vec![record("Priya")], "{corrupt}");
        }
    }
}
