//! Adapters between files and the domain: CSV for payments and outcomes,
//! JSON for invoice state.

pub mod csv;
pub mod json;
