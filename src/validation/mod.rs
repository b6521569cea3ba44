//! Validation subsystem for flatdb
//!
//! Database and table names map 1:1 onto storage file names, and rows are
//! persisted exactly as accepted, so every create and update passes through
//! this subsystem before the persistence layer is invoked.
//!
//! # Design Principles
//!
//! - Validation before persistence
//! - No I/O and no logging; reporting belongs to the caller
//! - Deterministic: same input, same verdict, on every host
//! - Data types are a closed set, extended only at compile time
//! - Entities are immutable value objects, checked and discarded

mod datatype;
mod errors;
mod registry;
mod types;
mod validator;

pub use datatype::DataType;
pub use errors::{AttributeError, ValidationError, ValidationResult};
pub use registry::DataTypeRegistry;
pub use types::{Attribute, Database, Row, Table, TableScheme};
pub use validator::DatabaseValidator;
