//! CLI library components for the laboratory report tool.

pub mod logging;
pub mod session;
pub mod submission;
