use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::application::{
    ApplicationField, EducationLevel, ExperienceBand, NoticePeriod, ResumeRef,
};
use common::model::job::Job;

use super::messages::Msg;
use super::state::JobApplicationModal;
use crate::components::modal::Modal;

type Link = Scope<JobApplicationModal>;

pub fn view(component: &JobApplicationModal, ctx: &Context<JobApplicationModal>) -> Html {
    let link = ctx.link();
    let Some(job) = ctx.props().job else {
        return Html::default();
    };

    html! {
        <Modal open={true} on_close={link.callback(|_| Msg::Close)} wide={true}>
            <div class="job-modal">
                { header(job, link) }
                <div class="job-modal-body">
                    <div class="job-details">
                        <section>
                            <h3>{ "About the Role" }</h3>
                            <p>{ job.description }</p>
                        </section>
                        { bullet_section("Key Responsibilities", job.responsibilities) }
                        { bullet_section("Qualifications", job.qualifications) }
                        <section>
                            <h3>{ "Skills Required" }</h3>
                            <div class="chips">
                                { for job.skills.iter().map(|skill| html! { <span class="chip">{ *skill }</span> }) }
                            </div>
                        </section>
                        { bullet_section("Benefits", job.benefits) }
                    </div>
                    <div class="job-apply">
                        if component.submitted {
                            { success_view() }
                        } else {
                            { application_form(component, link) }
                        }
                    </div>
                </div>
            </div>
        </Modal>
    }
}

fn header(job: &Job, link: &Link) -> Html {
    html! {
        <div class="job-modal-header">
            <div class="chips">
                <span class="chip">{ job.department }</span>
                <span class="chip">{ job.employment_type.label() }</span>
            </div>
            <h2>{ job.title }</h2>
            <div class="job-meta">
                <span>{ "📍 " }{ job.location }</span>
                <span>{ "💼 " }{ job.experience }</span>
                <span>{ "🕒 Posted " }{ job.posted }</span>
                if let Some(salary) = job.salary {
                    <span>{ "💰 " }{ salary }</span>
                }
            </div>
            <button class="btn btn-ghost" onclick={link.callback(|_| Msg::Share)}>{ "Share Job" }</button>
        </div>
    }
}

fn bullet_section(title: &'static str, items: &'static [&'static str]) -> Html {
    html! {
        <section>
            <h3>{ title }</h3>
            <ul>
                { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>
        </section>
    }
}

fn success_view() -> Html {
    html! {
        <div class="job-success">
            <div class="job-success-icon">{ "✓" }</div>
            <h3>{ "Application Submitted!" }</h3>
            <p>{ "Thank you for applying. Our team will review your application and get back to you soon." }</p>
        </div>
    }
}

fn application_form(component: &JobApplicationModal, link: &Link) -> Html {
    let form = &component.form;
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="job-form" novalidate=true onsubmit={on_submit}>
            <h3>{ "Apply for this Position" }</h3>
            if let Some(error) = &component.error {
                <div class="banner banner-error">{ error.clone() }</div>
            }
            { input(link, ApplicationField::FullName, "text", "Full Name *", &form.full_name, true) }
            { input(link, ApplicationField::Email, "email", "Email Address *", &form.email, true) }
            { input(link, ApplicationField::Phone, "tel", "Phone Number *", &form.phone, true) }
            { select(
                link,
                ApplicationField::Education,
                "Highest Education *",
                &form.education,
                EducationLevel::ALL.iter().map(|level| (level.value(), level.label())).collect(),
            ) }
            { select(
                link,
                ApplicationField::Experience,
                "Total Experience *",
                &form.experience,
                ExperienceBand::ALL.iter().map(|band| (band.value(), band.label())).collect(),
            ) }
            { input(link, ApplicationField::CurrentCompany, "text", "Current Company", &form.current_company, false) }
            { input(link, ApplicationField::ExpectedSalary, "text", "Expected Salary (LPA)", &form.expected_salary, false) }
            { select(
                link,
                ApplicationField::NoticePeriod,
                "Notice Period",
                &form.notice_period,
                NoticePeriod::ALL.iter().map(|period| (period.value(), period.label())).collect(),
            ) }
            { input(link, ApplicationField::LinkedIn, "url", "LinkedIn Profile", &form.linked_in, false) }
            { input(link, ApplicationField::Portfolio, "url", "Portfolio / Website", &form.portfolio, false) }
            { resume_picker(component.resume.as_ref(), link) }
            <textarea
                rows="4"
                placeholder="Cover Letter"
                value={form.cover_letter.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                    Msg::SetField(ApplicationField::CoverLetter, value)
                })}
            />
            <button type="submit" class="btn btn-primary" disabled={component.submitting}>
                { if component.submitting { "Submitting..." } else { "Submit Application" } }
            </button>
        </form>
    }
}

fn input(
    link: &Link,
    field: ApplicationField,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    required: bool,
) -> Html {
    html! {
        <input
            type={kind}
            {required}
            placeholder={placeholder}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                Msg::SetField(field, e.target_unchecked_into::<HtmlInputElement>().value())
            })}
        />
    }
}

fn select(
    link: &Link,
    field: ApplicationField,
    placeholder: &'static str,
    selected: &str,
    options: Vec<(&'static str, &'static str)>,
) -> Html {
    html! {
        <select
            onchange={link.callback(move |e: Event| {
                Msg::SetField(field, e.target_unchecked_into::<HtmlSelectElement>().value())
            })}
        >
            <option value="" selected={selected.is_empty()}>{ placeholder }</option>
            { for options.into_iter().map(|(value, label)| html! {
                <option value={value} selected={selected == value}>{ label }</option>
            }) }
        </select>
    }
}

fn resume_picker(resume: Option<&ResumeRef>, link: &Link) -> Html {
    let on_change = link.callback(|e: Event| {
        let input = e.target_unchecked_into::<HtmlInputElement>();
        let resume = input
            .files()
            .and_then(|files| files.get(0))
            .map(gloo_file::File::from)
            .map(|file| ResumeRef {
                file_name: file.name(),
                size: file.size(),
            });
        Msg::ResumeSelected(resume)
    });

    html! {
        <label class="resume-picker">
            <input type="file" accept=".pdf,.doc,.docx" onchange={on_change} />
            <span>
                { match resume {
                    Some(resume) => format!("{} ({} KB)", resume.file_name, resume.size / 1024),
                    None => "Upload Resume * (PDF, DOC, DOCX)".to_string(),
                } }
            </span>
        </label>
    }
}
