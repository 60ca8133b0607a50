//! Platform-independent core of the Nukkad Shops site.
//!
//! Everything in here compiles for the host as well as for `wasm32`, so the
//! submission flows, validation rules and content tables can be exercised
//! with plain `cargo test`. Browser concerns (HTTP, downloads, deep links,
//! local storage, timers) are reached only through the traits declared in
//! [`submission`].

pub mod carousel;
pub mod config;
pub mod content;
pub mod counters;
pub mod errors;
pub mod model;
pub mod navigation;
pub mod requests;
pub mod submission;
pub mod validation;
