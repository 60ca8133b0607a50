use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::config::CAREERS_EMAIL;
use common::content::jobs::{positions_label, search};
use common::content::metrics::CAREERS_STATS;
use common::model::job::Job;

use crate::components::footer::Footer;
use crate::components::job_application::JobApplicationModal;
use crate::components::navigation::Navigation;

#[function_component(CareersPage)]
pub fn careers_page() -> Html {
    let query = use_state(String::new);
    let selected = use_state(|| None::<&'static Job>);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            query.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let jobs = search(&query);

    html! {
        <>
            <Navigation />
            <main class="page careers">
                <section class="careers-hero">
                    <h1>{ "Join Our Team" }</h1>
                    <p class="muted">
                        { "We're on a mission to empower retailers across India with innovative POS solutions. Join our team of innovators, builders, and dreamers to make a real impact." }
                    </p>
                    <div class="careers-stats">
                        { for CAREERS_STATS.iter().map(|(value, label)| html! {
                            <div class="careers-stat">
                                <strong>{ *value }</strong>
                                <span>{ *label }</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section openings">
                    <h2>{ "Open Positions" }</h2>
                    <p class="muted">{ "Find your perfect role and start your journey with us today." }</p>
                    <input
                        class="search"
                        type="search"
                        placeholder="Search by title, location or department"
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                    <p class="positions-count">{ positions_label(jobs.len()) }</p>
                    if jobs.is_empty() {
                        <div class="empty-state">
                            <h3>{ "No jobs found matching your search." }</h3>
                            <p class="muted">{ "Try adjusting your search criteria." }</p>
                        </div>
                    } else {
                        <div class="job-list">
                            { for jobs.into_iter().map(|job| job_card(job, &selected)) }
                        </div>
                    }
                </section>

                <section class="section careers-contact">
                    <h3>{ "Don't see a role that fits?" }</h3>
                    <p class="muted">
                        { "Send your resume to " }
                        <a href={format!("mailto:{CAREERS_EMAIL}")}>{ CAREERS_EMAIL }</a>
                    </p>
                </section>
            </main>
            <Footer />
            <JobApplicationModal job={*selected} {on_close} />
        </>
    }
}

fn job_card(job: &'static Job, selected: &UseStateHandle<Option<&'static Job>>) -> Html {
    let open = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(job)))
    };
    html! {
        <article class="job-card">
            <div class="chips">
                <span class="chip">{ job.department }</span>
                <span class="chip">{ job.employment_type.label() }</span>
            </div>
            <h3>{ job.title }</h3>
            <div class="job-meta">
                <span>{ "📍 " }{ job.location }</span>
                <span>{ "💼 " }{ job.experience }</span>
                <span>{ "🕒 " }{ job.posted }</span>
            </div>
            <button class="btn btn-primary" onclick={open}>{ "View Details" }</button>
        </article>
    }
}
