pub mod brochure;
pub mod counter;
pub mod footer;
pub mod helpers;
pub mod job_application;
pub mod marquee;
pub mod modal;
pub mod navigation;
