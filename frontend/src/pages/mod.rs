pub mod careers;
pub mod device_details;
pub mod home;
pub mod not_found;
