//! flatdb - validation core for a strict, file-backed tabular database
//!
//! Database and table state lives in plain files; everything that reaches
//! those files is validated here first.

pub mod validation;
