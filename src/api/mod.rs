//! Typed surface of the NoteHub REST API.

mod client;
mod types;

pub use client::{NoteHub, NoteHubApi};
pub use types::{Note, NoteStats, SearchResponse, StatField, User, UserUpdate};

#[cfg(test)]
pub use client::MockNoteHubApi;
