pub mod application;
pub mod device;
pub mod job;
pub mod lead;
