//! Command handlers for the CLI.
//!
//! Each handler is generic over [`NoteHubApi`](crate::api::NoteHubApi) so it
//! can be tested against a mock without a running backend.

mod search;
mod stats;
mod users;

pub use search::search;
pub use stats::{bump, stats};
pub use users::{delete_user, show_user, update_user};
