//! Openings listed on the careers page.

use crate::model::job::{EmploymentType, Job};

pub static JOBS: &[Job] = &[
    Job {
        title: "Trainee Analyst – Engineering",
        location: "Hyderabad",
        experience: "0 – 1 Years",
        posted: "4 weeks ago",
        department: "Engineering",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 2.5 - 3.5 LPA"),
        description: "Join our Engineering team as a Trainee Analyst to assist in the development and maintenance of our POS solutions.",
        responsibilities: &[
            "Assist in the development and testing of POS software.",
            "Collaborate with the engineering team to identify and resolve bugs.",
            "Document and maintain technical documentation.",
        ],
        qualifications: &[
            "Bachelor's degree in Computer Science, Engineering, or a related field.",
            "Basic knowledge of software development and testing.",
        ],
        skills: &[
            "Problem-solving",
            "Attention to detail",
            "Communication",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Customer Success Analyst",
        location: "Hyderabad",
        experience: "1 – 3 Years",
        posted: "9 months ago",
        department: "Customer Success",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 4 - 5 LPA"),
        description: "As a Customer Success Analyst, you will be responsible for ensuring our customers are fully utilizing our POS solutions and achieving their business goals.",
        responsibilities: &[
            "Monitor customer usage and provide support to resolve issues.",
            "Conduct regular check-ins with customers to gather feedback and address concerns.",
            "Develop and maintain customer success plans.",
        ],
        qualifications: &[
            "Bachelor's degree in Business Administration, Computer Science, or a related field.",
            "Experience in customer support or success roles.",
        ],
        skills: &[
            "Customer service",
            "Communication",
            "Problem-solving",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Customer Success – Trainee",
        location: "Hyderabad",
        experience: "0 – 1 Years",
        posted: "9 months ago",
        department: "Customer Success",
        employment_type: EmploymentType::Internship,
        salary: Some("INR 1.5 - 2.5 LPA"),
        description: "Join our Customer Success team as a Trainee to gain hands-on experience in supporting our customers and ensuring their success with our POS solutions.",
        responsibilities: &[
            "Assist in monitoring customer usage and providing support to resolve issues.",
            "Participate in regular check-ins with customers to gather feedback and address concerns.",
            "Learn and contribute to the development of customer success plans.",
        ],
        qualifications: &[
            "Bachelor's degree in Business Administration, Computer Science, or a related field.",
            "Basic knowledge of customer support or success roles.",
        ],
        skills: &[
            "Customer service",
            "Communication",
            "Problem-solving",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Business Analyst",
        location: "Hyderabad GMR Airport",
        experience: "2 – 3 Years",
        posted: "9 months ago",
        department: "Business",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 5 - 6 LPA"),
        description: "As a Business Analyst, you will be responsible for analyzing business processes and identifying opportunities for improvement to enhance the efficiency and effectiveness of our POS solutions.",
        responsibilities: &[
            "Conduct business process analysis and identify areas for improvement.",
            "Develop and implement process improvements to enhance efficiency and effectiveness.",
            "Collaborate with cross-functional teams to ensure successful implementation of improvements.",
        ],
        qualifications: &[
            "Bachelor's degree in Business Administration, Computer Science, or a related field.",
            "Experience in business analysis or process improvement roles.",
        ],
        skills: &[
            "Business analysis",
            "Process improvement",
            "Communication",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Hardware Analyst",
        location: "Hyderabad",
        experience: "0 – 2 Years",
        posted: "9 months ago",
        department: "Engineering",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 3 - 4 LPA"),
        description: "Join our Engineering team as a Hardware Analyst to assist in the development and maintenance of our POS hardware solutions.",
        responsibilities: &[
            "Assist in the development and testing of POS hardware.",
            "Collaborate with the engineering team to identify and resolve hardware issues.",
            "Document and maintain technical documentation.",
        ],
        qualifications: &[
            "Bachelor's degree in Computer Science, Engineering, or a related field.",
            "Basic knowledge of hardware development and testing.",
        ],
        skills: &[
            "Problem-solving",
            "Attention to detail",
            "Communication",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Sales Intern",
        location: "Hyderabad",
        experience: "0 – 1 Years",
        posted: "9 months ago",
        department: "Sales",
        employment_type: EmploymentType::Internship,
        salary: Some("INR 1.5 - 2.5 LPA"),
        description: "Join our Sales team as an Intern to gain hands-on experience in selling our POS solutions to retailers and businesses.",
        responsibilities: &[
            "Assist in the identification and qualification of potential customers.",
            "Support the sales team in the preparation of sales presentations and proposals.",
            "Participate in customer meetings and provide support in closing deals.",
        ],
        qualifications: &[
            "Bachelor's degree in Business Administration, Marketing, or a related field.",
            "Basic knowledge of sales and marketing principles.",
        ],
        skills: &[
            "Sales",
            "Marketing",
            "Communication",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Sales Executive",
        location: "Bangalore",
        experience: "0 – 2 Years",
        posted: "1 year ago",
        department: "Sales",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 4 - 5 LPA"),
        description: "As a Sales Executive, you will be responsible for selling our POS solutions to retailers and businesses, and building long-term relationships with our customers.",
        responsibilities: &[
            "Identify and qualify potential customers.",
            "Prepare and deliver sales presentations and proposals.",
            "Close deals and build long-term relationships with customers.",
        ],
        qualifications: &[
            "Bachelor's degree in Business Administration, Marketing, or a related field.",
            "Experience in sales roles.",
        ],
        skills: &[
            "Sales",
            "Marketing",
            "Communication",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Customer Support Executive",
        location: "Hyderabad",
        experience: "0 – 1 Years",
        posted: "1 year ago",
        department: "Support",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 2.5 - 3.5 LPA"),
        description: "As a Customer Support Executive, you will be responsible for providing technical support to our customers and resolving issues with our POS solutions.",
        responsibilities: &[
            "Monitor customer usage and provide support to resolve issues.",
            "Conduct regular check-ins with customers to gather feedback and address concerns.",
            "Document and maintain customer support records.",
        ],
        qualifications: &[
            "Bachelor's degree in Computer Science, Engineering, or a related field.",
            "Experience in customer support roles.",
        ],
        skills: &[
            "Customer service",
            "Communication",
            "Problem-solving",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Business Analyst Trainee",
        location: "Hyderabad",
        experience: "0 – 1 Years",
        posted: "12 months ago",
        department: "Business",
        employment_type: EmploymentType::Internship,
        salary: Some("INR 1.5 - 2.5 LPA"),
        description: "Join our Business team as a Trainee to gain hands-on experience in analyzing business processes and identifying opportunities for improvement to enhance the efficiency and effectiveness of our POS solutions.",
        responsibilities: &[
            "Assist in conducting business process analysis and identifying areas for improvement.",
            "Learn and contribute to the development of process improvements to enhance efficiency and effectiveness.",
            "Participate in cross-functional team meetings to ensure successful implementation of improvements.",
        ],
        qualifications: &[
            "Bachelor's degree in Business Administration, Computer Science, or a related field.",
            "Basic knowledge of business analysis or process improvement roles.",
        ],
        skills: &[
            "Business analysis",
            "Process improvement",
            "Communication",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
    Job {
        title: "Field Support Executive",
        location: "Hyderabad",
        experience: "0 – 2 Years",
        posted: "12 months ago",
        department: "Support",
        employment_type: EmploymentType::FullTime,
        salary: Some("INR 3 - 4 LPA"),
        description: "As a Field Support Executive, you will be responsible for providing on-site technical support to our customers and resolving issues with our POS solutions.",
        responsibilities: &[
            "Provide on-site technical support to customers.",
            "Conduct regular check-ins with customers to gather feedback and address concerns.",
            "Document and maintain customer support records.",
        ],
        qualifications: &[
            "Bachelor's degree in Computer Science, Engineering, or a related field.",
            "Experience in field support roles.",
        ],
        skills: &[
            "Customer service",
            "Communication",
            "Problem-solving",
        ],
        benefits: &[
            "Competitive salary",
            "Health insurance",
            "Performance bonuses",
        ],
    },
];

/// Openings matching `query`; an empty query matches everything.
pub fn search(query: &str) -> Vec<&'static Job> {
    let query = query.trim();
    JOBS.iter().filter(|job| job.matches(query)).collect()
}

/// Heading above the job list, e.g. "3 positions available".
pub fn positions_label(count: usize) -> String {
    let noun = if count == 1 { "position" } else { "positions" };
    format!("{count} {noun} available")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_lists_every_opening() {
        assert_eq!(search("").len(), JOBS.len());
        assert_eq!(JOBS.len(), 10);
    }

    #[test]
    fn search_is_case_insensitive_across_title_location_and_department() {
        let by_location = search("BANGALORE");
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].title, "Sales Executive");

        assert_eq!(search("gmr airport").len(), 1);
        assert!(search("customer success").len() >= 2);
        assert!(search("sales").iter().all(|job| job.matches("SALES")));
        assert!(search("blockchain").is_empty());
    }

    #[test]
    fn label_is_singular_for_one_opening() {
        assert_eq!(positions_label(1), "1 position available");
        assert_eq!(positions_label(0), "0 positions available");
        assert_eq!(positions_label(10), "10 positions available");
    }
}
