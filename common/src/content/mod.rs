//! Literal content of the site. No computation beyond lookups and search.

pub mod devices;
pub mod faq;
pub mod features;
pub mod industries;
pub mod jobs;
pub mod metrics;
pub mod partners;
pub mod testimonials;
