//! Reference range resolution and result classification.
//!
//! The two building blocks are pure functions:
//!
//! - [`resolve_reference`]: `(analyte, age, sex)` to `(unit, range)`
//! - [`classify`]: entered text and a range to a [`ResultStatus`]
//!
//! [`evaluate_panel`] applies both to every analyte of a panel.
//!
//! [`ResultStatus`]: labref_model::ResultStatus

pub mod classify;
pub mod error;
pub mod evaluate;
pub mod resolve;

pub use classify::{classify, classify_bounds, parse_entered_value};
pub use error::{ResolveError, Result};
pub use evaluate::{PanelResults, evaluate_panel};
pub use resolve::{resolve_definition, resolve_reference};
