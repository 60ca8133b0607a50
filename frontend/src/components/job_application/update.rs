use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::submission::application::ApplicationOutcome;

use super::messages::Msg;
use super::state::JobApplicationModal;
use crate::components::helpers::share_current_page;

pub fn update(
    component: &mut JobApplicationModal,
    ctx: &Context<JobApplicationModal>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetField(field, value) => component.form.set(field, value),
        Msg::ResumeSelected(resume) => component.resume = resume,
        Msg::Submit => {
            let Some(job) = ctx.props().job else {
                return false;
            };
            if component.submitting || component.submitted {
                return false;
            }
            component.error = None;
            component.submitting = true;

            let flow = component.flow.clone();
            let form = component.form.clone();
            let resume = component.resume.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = flow.submit(&form, job.title, resume.as_ref()).await;
                link.send_message(Msg::Finished(outcome));
            });
        }
        Msg::Finished(ApplicationOutcome::Busy) => return false,
        Msg::Finished(ApplicationOutcome::Rejected(err)) => {
            component.submitting = false;
            component.error = Some(err.to_string());
        }
        Msg::Finished(ApplicationOutcome::Submitted { reset_after, .. }) => {
            component.submitting = false;
            component.submitted = true;
            let link = ctx.link().clone();
            let millis = u32::try_from(reset_after.as_millis()).unwrap_or(u32::MAX);
            component.reset_timer = Some(Timeout::new(millis, move || {
                link.send_message(Msg::ResetAndClose)
            }));
        }
        Msg::ResetAndClose => {
            component.clear();
            ctx.props().on_close.emit(());
        }
        Msg::Close => ctx.props().on_close.emit(()),
        Msg::Share => {
            if let Some(job) = ctx.props().job {
                share_current_page(&job.share_title(), &job.share_text());
            }
            return false;
        }
    }
    true
}
