//! HTTP handlers owned by the composition root
//!
//! Domain handlers live in their domain crates; what's here is the
//! infrastructure surface: static informational payloads and diagnostics.

pub mod diagnostics;
pub mod info;
