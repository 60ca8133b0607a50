use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use futures::executor::block_on;
use nukkad_common::errors::{SubmissionError, ValidationError};
use nukkad_common::model::lead::{LeadForm, LeadSource};
use nukkad_common::requests::BrochureLeadRequest;
use nukkad_common::submission::lead::{
    BrowserEffects, LeadFlow, LeadGateway, LeadOutcome, UNTRACKED_DOWNLOAD_NOTICE,
};
use nukkad_common::submission::{LocalTask, NoticeKind, Phase, Spawner};

/// Resolves on the second poll, letting another future run in between.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Clone, Default)]
struct FakeGateway {
    tracking_up: Rc<Cell<bool>>,
    asset_up: Rc<Cell<bool>>,
    yield_on_track: Rc<Cell<bool>>,
    leads: Rc<RefCell<Vec<(BrochureLeadRequest, Duration)>>>,
    downloads: Rc<Cell<usize>>,
}

impl FakeGateway {
    fn new(tracking_up: bool, asset_up: bool) -> Self {
        let gateway = Self::default();
        gateway.tracking_up.set(tracking_up);
        gateway.asset_up.set(asset_up);
        gateway
    }
}

#[async_trait(?Send)]
impl LeadGateway for FakeGateway {
    async fn submit_lead(
        &self,
        request: &BrochureLeadRequest,
        timeout: Duration,
    ) -> Result<(), SubmissionError> {
        self.leads.borrow_mut().push((request.clone(), timeout));
        if self.yield_on_track.get() {
            YieldOnce(false).await;
        }
        if self.tracking_up.get() {
            Ok(())
        } else {
            Err(SubmissionError::Network("connection refused".into()))
        }
    }

    async fn fetch_brochure(&self) -> Result<Vec<u8>, SubmissionError> {
        self.downloads.set(self.downloads.get() + 1);
        if self.asset_up.get() {
            Ok(b"%PDF-1.7".to_vec())
        } else {
            Err(SubmissionError::Server {
                status: 503,
                message: None,
            })
        }
    }
}

#[derive(Clone, Default)]
struct FakeBrowser {
    opened: Rc<RefCell<Vec<String>>>,
    saved: Rc<RefCell<Vec<(String, usize, String)>>>,
    block_popups: Rc<Cell<bool>>,
}

impl BrowserEffects for FakeBrowser {
    fn open_external(&self, url: &str) -> Result<(), SubmissionError> {
        if self.block_popups.get() {
            return Err(SubmissionError::DeepLink("window.open threw".into()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn save_file(&self, file_name: &str, bytes: &[u8], mime: &str) -> Result<(), SubmissionError> {
        self.saved
            .borrow_mut()
            .push((file_name.to_string(), bytes.len(), mime.to_string()));
        Ok(())
    }
}

/// Keeps detached tasks so the test decides when, or whether, they run.
#[derive(Clone, Default)]
struct HeldTasks {
    tasks: Rc<RefCell<Vec<LocalTask>>>,
}

impl HeldTasks {
    fn run_all(&self) {
        let tasks: Vec<_> = self.tasks.borrow_mut().drain(..).collect();
        for task in tasks {
            block_on(task);
        }
    }

    fn pending(&self) -> usize {
        self.tasks.borrow().len()
    }
}

impl Spawner for HeldTasks {
    fn spawn(&self, task: LocalTask) {
        self.tasks.borrow_mut().push(task);
    }
}

fn form() -> LeadForm {
    LeadForm {
        name: " Sravani ".into(),
        mobile: "9876543210".into(),
        email: "sravani@shop.in".into(),
        city: "Warangal".into(),
        consent: true,
    }
}

fn flow(
    gateway: &FakeGateway,
    browser: &FakeBrowser,
    spawner: &HeldTasks,
) -> LeadFlow<FakeGateway, FakeBrowser, HeldTasks> {
    LeadFlow::new(gateway.clone(), browser.clone(), spawner.clone())
}

#[test]
fn invalid_mobile_blocks_both_paths_without_side_effects() {
    let gateway = FakeGateway::new(true, true);
    let browser = FakeBrowser::default();
    let spawner = HeldTasks::default();
    let flow = flow(&gateway, &browser, &spawner);

    let mut input = form();
    input.mobile = "12345".into();
    for source in [LeadSource::Whatsapp, LeadSource::Direct] {
        let outcome = block_on(flow.submit(&input, source));
        assert_eq!(
            outcome,
            LeadOutcome::Rejected(ValidationError::InvalidMobile)
        );
    }
    assert_eq!(flow.phase(), Phase::Rejected(ValidationError::InvalidMobile));
    assert!(gateway.leads.borrow().is_empty());
    assert_eq!(spawner.pending(), 0);
    assert!(browser.opened.borrow().is_empty());
}

#[test]
fn missing_consent_is_reported_first() {
    let gateway = FakeGateway::new(true, true);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    let input = LeadForm {
        consent: false,
        mobile: "bad".into(),
        ..form()
    };
    assert_eq!(
        block_on(flow.submit(&input, LeadSource::Direct)),
        LeadOutcome::Rejected(ValidationError::ConsentRequired)
    );
}

#[test]
fn asset_failure_is_fatal_and_keeps_the_form() {
    let gateway = FakeGateway::new(true, false);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    let outcome = block_on(flow.submit(&form(), LeadSource::Direct));
    let LeadOutcome::Failed(err) = outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert!(matches!(err, SubmissionError::AssetUnavailable(_)));
    assert_eq!(
        err.to_string(),
        "Unable to download brochure. Please ensure the server is running or try again later."
    );
    assert_eq!(gateway.leads.borrow().len(), 1);
    assert!(browser.saved.borrow().is_empty());
    assert!(matches!(flow.phase(), Phase::Failed(_)));
}

#[test]
fn untracked_download_still_saves_and_shows_the_notice_for_five_seconds() {
    let gateway = FakeGateway::new(false, true);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    let LeadOutcome::Completed(done) = block_on(flow.submit(&form(), LeadSource::Direct)) else {
        panic!("download should complete");
    };
    let notice = done.notice.expect("untracked download carries a notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, UNTRACKED_DOWNLOAD_NOTICE);
    assert_eq!(notice.duration, Duration::from_secs(5));
    assert_eq!(done.reset_after, Duration::from_secs(5));
    assert_eq!(
        browser.saved.borrow().as_slice(),
        [(
            "Nukkad_Shops_Brochure.pdf".to_string(),
            8,
            "application/pdf".to_string()
        )]
    );
}

#[test]
fn tracked_download_resets_immediately() {
    let gateway = FakeGateway::new(true, true);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    let outcome = block_on(flow.submit(&form(), LeadSource::Direct));
    let LeadOutcome::Completed(done) = outcome else {
        panic!("download should complete");
    };
    assert_eq!(done.notice, None);
    assert_eq!(done.reset_after, Duration::ZERO);

    let leads = gateway.leads.borrow();
    let (request, timeout) = &leads[0];
    assert_eq!(request.name, "Sravani");
    assert_eq!(request.source, LeadSource::Direct);
    assert_eq!(*timeout, Duration::from_secs(10));
    assert_eq!(flow.phase(), Phase::Succeeded);
}

#[test]
fn whatsapp_link_opens_whatever_tracking_does() {
    for tracking_up in [true, false] {
        let gateway = FakeGateway::new(tracking_up, false);
        let browser = FakeBrowser::default();
        let spawner = HeldTasks::default();
        let flow = flow(&gateway, &browser, &spawner);

        let LeadOutcome::Completed(done) = block_on(flow.submit(&form(), LeadSource::Whatsapp))
        else {
            panic!("messaging path should complete");
        };
        assert_eq!(done.reset_after, Duration::from_secs(1));
        let opened = browser.opened.borrow().clone();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://wa.me/917997095678?text="));
        assert_eq!(done.redirect.as_deref(), Some(opened[0].as_str()));

        // Tracking is detached: nothing was sent until the task runs.
        assert!(gateway.leads.borrow().is_empty());
        assert_eq!(spawner.pending(), 1);
        spawner.run_all();
        let leads = gateway.leads.borrow();
        assert_eq!(leads[0].0.source, LeadSource::Whatsapp);
        assert_eq!(leads[0].1, Duration::from_secs(5));
        assert_eq!(gateway.downloads.get(), 0);
    }
}

#[test]
fn blocked_deep_link_is_reported() {
    let gateway = FakeGateway::new(true, true);
    let browser = FakeBrowser::default();
    browser.block_popups.set(true);
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    let outcome = block_on(flow.submit(&form(), LeadSource::Whatsapp));
    let LeadOutcome::Failed(err) = outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert_eq!(err.to_string(), "Unable to open WhatsApp. Please try again.");
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let gateway = FakeGateway::new(true, true);
    gateway.yield_on_track.set(true);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    let input = form();
    let (first, second) = block_on(async {
        futures::join!(
            flow.submit(&input, LeadSource::Direct),
            flow.submit(&input, LeadSource::Direct)
        )
    });
    assert!(matches!(first, LeadOutcome::Completed(_)));
    assert_eq!(second, LeadOutcome::Busy);
    assert_eq!(gateway.leads.borrow().len(), 1);
    assert_eq!(gateway.downloads.get(), 1);
    assert_eq!(browser.saved.borrow().len(), 1);
}

#[test]
fn flow_accepts_a_new_attempt_after_reset() {
    let gateway = FakeGateway::new(true, true);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());

    block_on(flow.submit(&form(), LeadSource::Direct));
    flow.reset();
    assert_eq!(flow.phase(), Phase::Idle);
    block_on(flow.submit(&form(), LeadSource::Direct));
    assert_eq!(browser.saved.borrow().len(), 2);
}

#[test]
fn completed_attempt_stays_pending_until_reset() {
    let gateway = FakeGateway::new(false, true);
    let browser = FakeBrowser::default();
    let flow = flow(&gateway, &browser, &HeldTasks::default());
    assert!(!flow.completion_pending());

    let outcome = block_on(flow.submit(&form(), LeadSource::Direct));
    assert!(matches!(outcome, LeadOutcome::Completed(_)));
    assert!(flow.completion_pending());

    flow.reset();
    assert!(!flow.completion_pending());

    let rejected = LeadForm {
        consent: false,
        ..form()
    };
    block_on(flow.submit(&rejected, LeadSource::Direct));
    assert!(!flow.completion_pending());
}
