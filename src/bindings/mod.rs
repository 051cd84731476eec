//! Boundary adapters. Label conversion rules are plain Rust so they are
//! tested without an interpreter; the pyo3 module itself is opt-in.
pub(crate) mod labels;

#[cfg(feature = "python")]
pub mod python;
