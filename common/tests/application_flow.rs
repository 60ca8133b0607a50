use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use futures::executor::block_on;
use nukkad_common::errors::{StoreError, ValidationError};
use nukkad_common::model::application::{
    ApplicationForm, EducationLevel, ExperienceBand, JobApplication, ResumeRef,
};
use nukkad_common::submission::application::{
    ApplicationFlow, ApplicationOutcome, ApplicationStore, MemoryApplicationLog,
};
use nukkad_common::submission::{Phase, Timer};

/// Records requested sleeps and resumes on the second poll.
#[derive(Clone, Default)]
struct RecordingTimer {
    slept: Rc<RefCell<Vec<Duration>>>,
}

#[async_trait(?Send)]
impl Timer for RecordingTimer {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
        let mut yielded = false;
        futures::future::poll_fn(|cx| {
            if yielded {
                std::task::Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                std::task::Poll::Pending
            }
        })
        .await;
    }
}

struct FullStorage {
    attempts: Cell<usize>,
}

impl ApplicationStore for FullStorage {
    fn append(&self, _: &JobApplication) -> Result<(), StoreError> {
        self.attempts.set(self.attempts.get() + 1);
        Err(StoreError::Write("QuotaExceededError".into()))
    }

    fn entries(&self) -> Result<Vec<JobApplication>, StoreError> {
        Ok(Vec::new())
    }
}

fn form() -> ApplicationForm {
    ApplicationForm {
        full_name: "Anil Kumar".into(),
        email: "anil@example.com".into(),
        phone: "+91 9988776655".into(),
        education: "Bachelor's Degree".into(),
        experience: "2-3 Years".into(),
        cover_letter: "I have set up POS counters for three supermarkets.".into(),
        ..ApplicationForm::default()
    }
}

fn resume() -> ResumeRef {
    ResumeRef {
        file_name: "anil_kumar_cv.pdf".into(),
        size: 120_331,
    }
}

#[test]
fn valid_application_appends_exactly_one_record() {
    let log = Rc::new(MemoryApplicationLog::new());
    let timer = RecordingTimer::default();
    let flow = ApplicationFlow::new(log.clone(), timer.clone());

    let outcome = block_on(flow.submit(&form(), "Field Sales Executive", Some(&resume())));
    let ApplicationOutcome::Submitted {
        record,
        reset_after,
    } = outcome
    else {
        panic!("application should be accepted");
    };
    assert_eq!(reset_after, Duration::from_secs(3));
    assert_eq!(timer.slept.borrow().as_slice(), [Duration::from_secs(2)]);
    assert_eq!(record.education, EducationLevel::Bachelors);
    assert_eq!(record.experience, ExperienceBand::TwoToThree);
    assert_eq!(record.notice_period, None);

    let stored = log.entries().unwrap();
    assert_eq!(stored, vec![record]);
    assert_eq!(flow.phase(), Phase::Succeeded);
}

#[test]
fn missing_resume_is_rejected_without_waiting() {
    let log = Rc::new(MemoryApplicationLog::new());
    let timer = RecordingTimer::default();
    let flow = ApplicationFlow::new(log.clone(), timer.clone());

    let outcome = block_on(flow.submit(&form(), "Field Sales Executive", None));
    assert_eq!(
        outcome,
        ApplicationOutcome::Rejected(ValidationError::MissingResume)
    );
    assert!(timer.slept.borrow().is_empty());
    assert!(log.is_empty());
}

#[test]
fn first_missing_field_is_named() {
    let flow = ApplicationFlow::new(MemoryApplicationLog::new(), RecordingTimer::default());
    let mut input = form();
    input.phone = "  ".into();
    input.education.clear();

    let outcome = block_on(flow.submit(&input, "Support Engineer", Some(&resume())));
    let ApplicationOutcome::Rejected(err) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(err.to_string(), "Phone number is required");
}

#[test]
fn storage_failure_is_not_surfaced() {
    let storage = FullStorage {
        attempts: Cell::new(0),
    };
    let flow = ApplicationFlow::new(storage, RecordingTimer::default());

    let outcome = block_on(flow.submit(&form(), "Support Engineer", Some(&resume())));
    assert!(matches!(outcome, ApplicationOutcome::Submitted { .. }));
    assert_eq!(flow.store().attempts.get(), 1);
}

#[test]
fn rapid_double_submit_stores_once() {
    let log = Rc::new(MemoryApplicationLog::new());
    let flow = ApplicationFlow::new(log.clone(), RecordingTimer::default());
    let input = form();
    let resume = resume();

    let (first, second) = block_on(async {
        futures::join!(
            flow.submit(&input, "Support Engineer", Some(&resume)),
            flow.submit(&input, "Support Engineer", Some(&resume))
        )
    });
    assert!(matches!(first, ApplicationOutcome::Submitted { .. }));
    assert_eq!(second, ApplicationOutcome::Busy);
    assert_eq!(log.len(), 1);
}

#[test]
fn repeated_applications_are_all_kept() {
    let log = Rc::new(MemoryApplicationLog::new());
    let flow = ApplicationFlow::new(log.clone(), RecordingTimer::default());

    for _ in 0..2 {
        block_on(flow.submit(&form(), "Support Engineer", Some(&resume())));
        flow.reset();
    }
    assert_eq!(log.len(), 2);
}
