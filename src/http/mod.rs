//! HTTP client module: a reusable client bound to the API base URL, with
//! failure classification.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{ApiError, check_failure};
