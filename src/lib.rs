//! Black-box smoke suite for the dating backend's REST API.
//!
//! One cookie-bearing HTTP session drives the health, auth, prompt, filter,
//! AI-assistant, and legacy endpoints in a fixed order, records pass/fail
//! results with human-readable details, and reports an aggregate verdict
//! that the binary maps onto the process exit code.

pub mod auth;
pub mod cli;
pub mod history;
pub mod http;
pub mod suite;
pub mod testing;

pub use suite::SmokeSuite;
