/// Employment type shown as a badge on job cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    Internship,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Internship => "Internship",
        }
    }
}

/// A job opening on the careers page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub title: &'static str,
    pub location: &'static str,
    pub experience: &'static str,
    pub posted: &'static str,
    pub department: &'static str,
    pub employment_type: EmploymentType,
    pub salary: Option<&'static str>,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub qualifications: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

impl Job {
    /// Case-insensitive match against title, location and department.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.title, self.location, self.department]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn share_title(&self) -> String {
        format!("{} at Nukkad Shops", self.title)
    }

    pub fn share_text(&self) -> String {
        format!(
            "Check out this job opportunity: {} in {}",
            self.title, self.location
        )
    }
}
