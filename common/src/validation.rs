//! Client-side validation of both forms.
//!
//! Lead rules run in a fixed order and stop at the first failure:
//! consent, required fields, email format, mobile format.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;
use crate::model::application::{
    ApplicationForm, EducationLevel, ExperienceBand, JobApplication, NoticePeriod, ResumeRef,
};
use crate::model::lead::{Lead, LeadForm};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Indian mobile numbers: ten digits, leading 6-9.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whitespace anywhere in the number is ignored.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let compact: String = mobile.chars().filter(|c| !c.is_whitespace()).collect();
    MOBILE_RE.is_match(&compact)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validates the brochure form and returns the trimmed lead.
pub fn validate_lead(form: &LeadForm) -> Result<Lead, ValidationError> {
    if !form.consent {
        return Err(ValidationError::ConsentRequired);
    }
    if is_blank(&form.name) || is_blank(&form.mobile) || is_blank(&form.city) {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_mobile(&form.mobile) {
        return Err(ValidationError::InvalidMobile);
    }

    Ok(Lead {
        name: form.name.trim().to_string(),
        mobile: form.mobile.trim().to_string(),
        email: form.email.trim().to_string(),
        city: form.city.trim().to_string(),
    })
}

/// Checks the application fields in form order, stopping at the first missing
/// one or a malformed email, and builds the log record. `applied_at` is
/// stamped by the caller.
pub fn validate_application(
    form: &ApplicationForm,
    job_title: &str,
    resume: Option<&ResumeRef>,
    applied_at: chrono::DateTime<chrono::Utc>,
) -> Result<JobApplication, ValidationError> {
    if is_blank(&form.full_name) {
        return Err(ValidationError::MissingField("Full name"));
    }
    if is_blank(&form.email) {
        return Err(ValidationError::MissingField("Email"));
    }
    if !is_valid_email(form.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if is_blank(&form.phone) {
        return Err(ValidationError::MissingField("Phone number"));
    }
    let education = EducationLevel::from_value(&form.education)
        .ok_or(ValidationError::MissingField("Education"))?;
    let experience = ExperienceBand::from_value(&form.experience)
        .ok_or(ValidationError::MissingField("Total experience"))?;
    let resume = resume.ok_or(ValidationError::MissingResume)?;

    Ok(JobApplication {
        full_name: form.full_name.clone(),
        email: form.email.clone(),
        phone: form.phone.clone(),
        education,
        experience,
        current_company: form.current_company.clone(),
        expected_salary: form.expected_salary.clone(),
        notice_period: NoticePeriod::from_value(&form.notice_period),
        linked_in: form.linked_in.clone(),
        portfolio: form.portfolio.clone(),
        cover_letter: form.cover_letter.clone(),
        job_title: job_title.to_string(),
        resume_file_name: resume.file_name.clone(),
        applied_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> LeadForm {
        LeadForm {
            name: "Lakshmi".into(),
            mobile: "98765 43210".into(),
            email: "lakshmi@store.in".into(),
            city: "Vijayawada".into(),
            consent: true,
        }
    }

    #[test]
    fn valid_form_produces_a_trimmed_lead() {
        let mut form = valid_form();
        form.name = "  Lakshmi ".into();
        let lead = validate_lead(&form).unwrap();
        assert_eq!(lead.name, "Lakshmi");
        assert_eq!(lead.mobile, "98765 43210");
    }

    #[test]
    fn consent_is_checked_before_anything_else() {
        let form = LeadForm {
            consent: false,
            ..LeadForm::default()
        };
        assert_eq!(validate_lead(&form), Err(ValidationError::ConsentRequired));

        let mut form = valid_form();
        form.consent = false;
        form.mobile = "123".into();
        assert_eq!(validate_lead(&form), Err(ValidationError::ConsentRequired));
    }

    #[test]
    fn missing_fields_come_before_format_errors() {
        let mut form = valid_form();
        form.city = "   ".into();
        form.email = "not-an-email".into();
        assert_eq!(validate_lead(&form), Err(ValidationError::MissingFields));
    }

    #[test]
    fn empty_email_is_a_format_error() {
        let mut form = valid_form();
        form.email.clear();
        assert_eq!(validate_lead(&form), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn every_malformed_mobile_is_rejected_with_the_mobile_error() {
        for mobile in [
            "5876543210",
            "987654321",
            "98765432101",
            "+919876543210",
            "98765-43210",
            "abcdefghij",
            "0987654321",
        ] {
            let mut form = valid_form();
            form.mobile = mobile.into();
            assert_eq!(
                validate_lead(&form),
                Err(ValidationError::InvalidMobile),
                "{mobile}"
            );
        }
    }

    #[test]
    fn whitespace_inside_the_mobile_number_is_ignored() {
        assert!(is_valid_mobile("6 0 0 0 0 0 0 0 0 0"));
        assert!(is_valid_mobile("\t7000000000 "));
    }

    fn application_form() -> ApplicationForm {
        ApplicationForm {
            full_name: "Kiran".into(),
            email: "kiran@example.com".into(),
            phone: "9000000000".into(),
            education: "Diploma".into(),
            experience: "Fresher".into(),
            ..ApplicationForm::default()
        }
    }

    fn resume() -> ResumeRef {
        ResumeRef {
            file_name: "kiran.pdf".into(),
            size: 42_000,
        }
    }

    #[test]
    fn application_requires_each_field_in_order() {
        let now = chrono::Utc::now();
        let mut form = application_form();
        form.full_name.clear();
        form.education.clear();
        assert_eq!(
            validate_application(&form, "Sales Intern", Some(&resume()), now),
            Err(ValidationError::MissingField("Full name"))
        );

        let mut form = application_form();
        form.experience.clear();
        assert_eq!(
            validate_application(&form, "Sales Intern", Some(&resume()), now),
            Err(ValidationError::MissingField("Total experience"))
        );

        assert_eq!(
            validate_application(&application_form(), "Sales Intern", None, now),
            Err(ValidationError::MissingResume)
        );
    }

    #[test]
    fn application_rejects_a_malformed_email() {
        let now = chrono::Utc::now();
        let mut form = application_form();
        form.email = "not-an-email".into();
        assert_eq!(
            validate_application(&form, "Sales Intern", Some(&resume()), now),
            Err(ValidationError::InvalidEmail)
        );

        form.email = " kiran@example.com ".into();
        assert!(validate_application(&form, "Sales Intern", Some(&resume()), now).is_ok());
    }

    #[test]
    fn application_record_keeps_the_file_name_only() {
        let now = chrono::Utc::now();
        let mut form = application_form();
        form.notice_period = "15 Days".into();
        let record = validate_application(&form, "Hardware Analyst", Some(&resume()), now).unwrap();
        assert_eq!(record.resume_file_name, "kiran.pdf");
        assert_eq!(record.job_title, "Hardware Analyst");
        assert_eq!(record.notice_period, Some(NoticePeriod::FifteenDays));
        assert_eq!(record.applied_at, now);
    }
}
