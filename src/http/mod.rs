//! HTTP layer: method enum, request/response types, tolerant body access,
//! and the session-owning client.

pub mod body;
pub mod client;
pub mod method;
pub mod request;
pub mod response;
