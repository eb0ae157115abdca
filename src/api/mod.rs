//! HTTP-agnostic API layer
//!
//! Typed request/response structures and handlers that any HTTP server or
//! client (the CLI included) can call directly.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{SUBMIT_MESSAGE, attendance_detail, attendance_history, submit_attendance};
pub use types::{ApiResponse, AttendanceView, HistoryData, SubmitData, SubmitRequest};
