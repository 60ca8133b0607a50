use serde::{Deserialize, Serialize};

/// Where a lead came from. Serialized in lowercase as the `source` field of
/// the tracking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadSource {
    /// The visitor asked for the brochure over WhatsApp.
    Whatsapp,
    /// The visitor downloaded the brochure directly.
    Direct,
}

impl LeadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadSource::Whatsapp => "whatsapp",
            LeadSource::Direct => "direct",
        }
    }
}

/// Raw contents of the brochure form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub city: String,
    /// The "I'm not a robot" checkbox.
    pub consent: bool,
}

/// A lead that passed validation. Fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub city: String,
}

impl Lead {
    /// Text of the pre-filled WhatsApp message.
    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hi, I would like to get the Nukkad Shops POS brochure.\n\n\
             *My Details:*\n\
             Name: {}\n\
             Mobile: {}\n\
             Email: {}\n\
             City: {}\n\n\
             Please send me the brochure PDF. Thank you!",
            self.name, self.mobile, self.email, self.city
        )
    }

    /// `wa.me` deep link opening a chat with `number` and the message above.
    pub fn whatsapp_link(&self, number: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            number,
            urlencoding::encode(&self.whatsapp_message())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        Lead {
            name: "Ravi Teja".into(),
            mobile: "9876543210".into(),
            email: "ravi@example.com".into(),
            city: "Hyderabad".into(),
        }
    }

    #[test]
    fn message_lists_every_detail() {
        let message = lead().whatsapp_message();
        assert!(message.starts_with("Hi, I would like to get the Nukkad Shops POS brochure.\n\n"));
        assert!(message.contains("Name: Ravi Teja\nMobile: 9876543210\n"));
        assert!(message.contains("Email: ravi@example.com\nCity: Hyderabad\n\n"));
        assert!(message.ends_with("Please send me the brochure PDF. Thank you!"));
    }

    #[test]
    fn link_targets_the_business_number_with_an_encoded_message() {
        let link = lead().whatsapp_link("917997095678");
        assert!(link.starts_with("https://wa.me/917997095678?text=Hi%2C%20I%20would"));
        assert!(!link.contains('\n'));
        assert!(link.contains("ravi%40example.com"));
    }
}
