//! Shrike networking layer
//!
//! HTTP client construction with optional SOCKS5 proxy routing, the profile
//! source collaborator, and the username footprint prober.

pub mod client;
pub mod footprint;
pub mod source;

pub use client::*;
pub use footprint::*;
pub use source::*;
