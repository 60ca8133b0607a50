//! Job application form and the record appended to the application log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Highest completed education level offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "Bachelor's Degree")]
    Bachelors,
    #[serde(rename = "Master's Degree")]
    Masters,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::HighSchool,
        EducationLevel::Diploma,
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    pub fn value(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Bachelors => "Bachelor's Degree",
            EducationLevel::Masters => "Master's Degree",
            EducationLevel::Phd => "PhD",
        }
    }

    pub fn label(self) -> &'static str {
        self.value()
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }
}

/// Total experience band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBand {
    #[serde(rename = "Fresher")]
    Fresher,
    #[serde(rename = "0-1 Years")]
    UpToOne,
    #[serde(rename = "1-2 Years")]
    OneToTwo,
    #[serde(rename = "2-3 Years")]
    TwoToThree,
    #[serde(rename = "3-5 Years")]
    ThreeToFive,
    #[serde(rename = "5+ Years")]
    FivePlus,
}

impl ExperienceBand {
    pub const ALL: [ExperienceBand; 6] = [
        ExperienceBand::Fresher,
        ExperienceBand::UpToOne,
        ExperienceBand::OneToTwo,
        ExperienceBand::TwoToThree,
        ExperienceBand::ThreeToFive,
        ExperienceBand::FivePlus,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ExperienceBand::Fresher => "Fresher",
            ExperienceBand::UpToOne => "0-1 Years",
            ExperienceBand::OneToTwo => "1-2 Years",
            ExperienceBand::TwoToThree => "2-3 Years",
            ExperienceBand::ThreeToFive => "3-5 Years",
            ExperienceBand::FivePlus => "5+ Years",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExperienceBand::Fresher => "Fresher (0 years)",
            other => other.value(),
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticePeriod {
    #[serde(rename = "Immediate")]
    Immediate,
    #[serde(rename = "15 Days")]
    FifteenDays,
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "2 Months")]
    TwoMonths,
    #[serde(rename = "3 Months")]
    ThreeMonths,
}

impl NoticePeriod {
    pub const ALL: [NoticePeriod; 5] = [
        NoticePeriod::Immediate,
        NoticePeriod::FifteenDays,
        NoticePeriod::OneMonth,
        NoticePeriod::TwoMonths,
        NoticePeriod::ThreeMonths,
    ];

    pub fn value(self) -> &'static str {
        match self {
            NoticePeriod::Immediate => "Immediate",
            NoticePeriod::FifteenDays => "15 Days",
            NoticePeriod::OneMonth => "1 Month",
            NoticePeriod::TwoMonths => "2 Months",
            NoticePeriod::ThreeMonths => "3 Months",
        }
    }

    pub fn label(self) -> &'static str {
        self.value()
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|period| period.value() == value)
    }
}

/// Reference to the resume picked in the file input. The content itself is
/// never read or stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeRef {
    pub file_name: String,
    pub size: u64,
}

/// Raw contents of the application form. Select boxes keep the option
/// `value` strings, with the empty string meaning "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: String,
    pub current_company: String,
    pub expected_salary: String,
    pub notice_period: String,
    pub linked_in: String,
    pub portfolio: String,
    pub cover_letter: String,
}

/// Fields of the form addressable from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationField {
    FullName,
    Email,
    Phone,
    Education,
    Experience,
    CurrentCompany,
    ExpectedSalary,
    NoticePeriod,
    LinkedIn,
    Portfolio,
    CoverLetter,
}

impl ApplicationForm {
    pub fn set(&mut self, field: ApplicationField, value: String) {
        let slot = match field {
            ApplicationField::FullName => &mut self.full_name,
            ApplicationField::Email => &mut self.email,
            ApplicationField::Phone => &mut self.phone,
            ApplicationField::Education => &mut self.education,
            ApplicationField::Experience => &mut self.experience,
            ApplicationField::CurrentCompany => &mut self.current_company,
            ApplicationField::ExpectedSalary => &mut self.expected_salary,
            ApplicationField::NoticePeriod => &mut self.notice_period,
            ApplicationField::LinkedIn => &mut self.linked_in,
            ApplicationField::Portfolio => &mut self.portfolio,
            ApplicationField::CoverLetter => &mut self.cover_letter,
        };
        *slot = value;
    }
}

/// One entry of the application log, laid out the way the site has always
/// stored it (camelCase keys, free text kept verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub education: EducationLevel,
    pub experience: ExperienceBand,
    #[serde(default)]
    pub current_company: String,
    #[serde(default)]
    pub expected_salary: String,
    #[serde(default, with = "optional_notice_period")]
    pub notice_period: Option<NoticePeriod>,
    #[serde(default)]
    pub linked_in: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub cover_letter: String,
    pub job_title: String,
    pub resume_file_name: String,
    pub applied_at: DateTime<Utc>,
}

/// The log stores "no notice period" as an empty string rather than `null`.
mod optional_notice_period {
    use super::NoticePeriod;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NoticePeriod>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(NoticePeriod::value).unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NoticePeriod>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(NoticePeriod::from_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_values_round_trip_through_their_select_value() {
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::from_value(level.value()), Some(level));
        }
        assert_eq!(ExperienceBand::from_value(""), None);
        assert_eq!(ExperienceBand::Fresher.label(), "Fresher (0 years)");
        assert_eq!(NoticePeriod::from_value("1 Month"), Some(NoticePeriod::OneMonth));
    }

    #[test]
    fn record_uses_the_stored_layout() {
        let record = JobApplication {
            full_name: "Asha".into(),
            email: "asha@example.com".into(),
            phone: "+91 9876543210".into(),
            education: EducationLevel::Bachelors,
            experience: ExperienceBand::OneToTwo,
            current_company: String::new(),
            expected_salary: String::new(),
            notice_period: None,
            linked_in: String::new(),
            portfolio: String::new(),
            cover_letter: "Hello".into(),
            job_title: "Sales Intern".into(),
            resume_file_name: "asha.pdf".into(),
            applied_at: DateTime::parse_from_rfc3339("2026-01-05T10:00:00Z")
                .map(|at| at.with_timezone(&Utc))
                .unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["fullName"], "Asha");
        assert_eq!(json["education"], "Bachelor's Degree");
        assert_eq!(json["experience"], "1-2 Years");
        assert_eq!(json["noticePeriod"], "");
        assert_eq!(json["resumeFileName"], "asha.pdf");
        assert_eq!(json["appliedAt"], "2026-01-05T10:00:00Z");

        let back: JobApplication = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
