use std::time::Duration;

use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::submission::lead::LeadOutcome;

use super::messages::Msg;
use super::state::BrochurePopup;

pub fn update(component: &mut BrochurePopup, ctx: &Context<BrochurePopup>, msg: Msg) -> bool {
    match msg {
        Msg::SetName(value) => component.form.name = value,
        Msg::SetMobile(value) => component.form.mobile = value,
        Msg::SetEmail(value) => component.form.email = value,
        Msg::SetCity(value) => component.form.city = value,
        Msg::SetConsent(checked) => component.form.consent = checked,
        Msg::Submit(source) => {
            if component.submitting.is_some() || component.flow.is_submitting() {
                return false;
            }
            component.error = None;
            component.notice = None;
            component.submitting = Some(source);

            let flow = component.flow.clone();
            let form = component.form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = flow.submit(&form, source).await;
                link.send_message(Msg::Finished(outcome));
            });
        }
        Msg::Finished(LeadOutcome::Busy) => return false,
        Msg::Finished(outcome) => {
            component.submitting = None;
            match outcome {
                LeadOutcome::Busy => {}
                LeadOutcome::Rejected(err) => component.error = Some(err.to_string()),
                LeadOutcome::Failed(err) => component.error = Some(err.to_string()),
                LeadOutcome::Completed(done) => {
                    component.notice = done.notice;
                    schedule_reset(component, ctx, done.reset_after);
                }
            }
        }
        Msg::ResetAndClose => {
            component.clear();
            ctx.props().on_close.emit(());
        }
        Msg::Close => {
            // Closing during the post-completion notice finishes the reset now.
            if component.flow.completion_pending() {
                component.clear();
            } else {
                component.error = None;
            }
            ctx.props().on_close.emit(());
        }
    }
    true
}

fn schedule_reset(component: &mut BrochurePopup, ctx: &Context<BrochurePopup>, after: Duration) {
    if after.is_zero() {
        ctx.link().send_message(Msg::ResetAndClose);
        return;
    }
    let link = ctx.link().clone();
    let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
    component.reset_timer = Some(Timeout::new(millis, move || {
        link.send_message(Msg::ResetAndClose)
    }));
}
