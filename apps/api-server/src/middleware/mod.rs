//! Request-level middleware and error adaptation.

pub mod error;
