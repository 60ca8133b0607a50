use serde::Serialize;

use crate::model::lead::{Lead, LeadSource};

/// Request payload for the lead tracking endpoint.
/// Carries the trimmed form fields and the path the visitor chose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrochureLeadRequest {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub city: String,
    pub source: LeadSource,
}

impl BrochureLeadRequest {
    pub fn new(lead: &Lead, source: LeadSource) -> Self {
        Self {
            name: lead.name.clone(),
            mobile: lead.mobile.clone(),
            email: lead.email.clone(),
            city: lead.city.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_the_lowercase_source() {
        let lead = Lead {
            name: "Meena".into(),
            mobile: "9123456780".into(),
            email: "meena@example.com".into(),
            city: "Guntur".into(),
        };
        let body = serde_json::to_value(BrochureLeadRequest::new(&lead, LeadSource::Direct)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Meena",
                "mobile": "9123456780",
                "email": "meena@example.com",
                "city": "Guntur",
                "source": "direct",
            })
        );
    }
}
