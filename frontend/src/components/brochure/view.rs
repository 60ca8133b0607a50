use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::lead::LeadSource;
use common::submission::NoticeKind;

use super::messages::Msg;
use super::state::BrochurePopup;
use crate::components::modal::Modal;

pub fn view(component: &BrochurePopup, ctx: &Context<BrochurePopup>) -> Html {
    let link = ctx.link();
    let busy = component.submitting.is_some();
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit(LeadSource::Direct)
    });

    html! {
        <Modal open={ctx.props().open} on_close={link.callback(|_| Msg::Close)} wide={true}>
            <div class="brochure">
                <div class="brochure-image">
                    <img src="/assets/brochure.png" alt="Shopkeeper using POS device" />
                </div>
                <div class="brochure-body">
                    <h2>{ "Get the Right POS Solution for Your Store" }</h2>
                    <p class="muted">{ "Fill in the form to download our brochure and explore Nukkad Shops" }</p>

                    { message_banner(component) }

                    <form class="brochure-form" novalidate=true onsubmit={on_submit}>
                        { text_input(link, "text", "Enter Your Name *", &component.form.name, Msg::SetName) }
                        { text_input(link, "tel", "Mobile Number *", &component.form.mobile, Msg::SetMobile) }
                        { text_input(link, "email", "Email Address *", &component.form.email, Msg::SetEmail) }
                        { text_input(link, "text", "City *", &component.form.city, Msg::SetCity) }

                        <label class="consent">
                            <input
                                type="checkbox"
                                checked={component.form.consent}
                                onchange={link.callback(|e: Event| {
                                    Msg::SetConsent(e.target_unchecked_into::<HtmlInputElement>().checked())
                                })}
                            />
                            <span>{ "I'm not a robot" }</span>
                        </label>

                        <div class="brochure-actions">
                            <button
                                type="button"
                                class="btn btn-whatsapp"
                                disabled={busy}
                                onclick={link.callback(|_| Msg::Submit(LeadSource::Whatsapp))}
                            >
                                <img src="/assets/whatsapp.png" alt="" />
                                { button_label(component, LeadSource::Whatsapp, "Get on WhatsApp", "Opening WhatsApp...") }
                            </button>
                            <button type="submit" class="btn btn-primary" disabled={busy}>
                                { button_label(component, LeadSource::Direct, "Download Now", "Downloading...") }
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Modal>
    }
}

fn message_banner(component: &BrochurePopup) -> Html {
    if let Some(notice) = &component.notice {
        let class = match notice.kind {
            NoticeKind::Info => "banner banner-info",
            NoticeKind::Success => "banner banner-success",
            NoticeKind::Error => "banner banner-error",
        };
        return html! { <div class={class}>{ notice.message.clone() }</div> };
    }
    match &component.error {
        Some(error) => html! { <div class="banner banner-error">{ error.clone() }</div> },
        None => Html::default(),
    }
}

fn button_label(
    component: &BrochurePopup,
    source: LeadSource,
    idle: &'static str,
    working: &'static str,
) -> &'static str {
    if component.submitting == Some(source) {
        working
    } else {
        idle
    }
}

fn text_input(
    link: &Scope<BrochurePopup>,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    to_msg: fn(String) -> Msg,
) -> Html {
    html! {
        <input
            type={kind}
            required=true
            placeholder={placeholder}
            value={value.to_string()}
            oninput={link.callback(move |e: InputEvent| {
                to_msg(e.target_unchecked_into::<HtmlInputElement>().value())
            })}
        />
    }
}
