#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod manifest;
pub mod paths;
pub mod registry;

pub use crate::error::StandardsError;
pub use crate::loaders::{
    load_bundled_reference_table, load_default_reference_table, load_reference_table,
    parse_reference_table,
};
pub use crate::paths::STANDARDS_ENV_VAR;
pub use crate::registry::ReferenceTable;
