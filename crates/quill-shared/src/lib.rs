//! # Quill Shared
//!
//! Wire types shared between server and clients: request/response DTOs and
//! the standard error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
