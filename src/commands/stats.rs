use anyhow::Result;
use log::debug;

use crate::api::{NoteHubApi, NoteStats, StatField};

/// Show the counter totals for a note.
#[tracing::instrument(skip(api))]
pub async fn stats<A: NoteHubApi>(api: &A, note_id: u64) -> Result<()> {
    let stats = api.note_stats(note_id).await?;
    print_stats(&stats);
    Ok(())
}

/// Add `delta` to one counter of a note and print the new totals.
#[tracing::instrument(skip(api))]
pub async fn bump<A: NoteHubApi>(api: &A, note_id: u64, field: &str, delta: i64) -> Result<()> {
    let field = field.parse::<StatField>()?;
    debug!("Bumping {} of note {} by {}", field, note_id, delta);

    let stats = api.bump_stat(note_id, field, delta).await?;
    print_stats(&stats);
    Ok(())
}

fn print_stats(stats: &NoteStats) {
    println!("Note {}", stats.note_id);
    println!("  views:     {}", stats.views);
    println!("  likes:     {}", stats.likes);
    println!("  favorites: {}", stats.favorites);
    println!("  comments:  {}", stats.comments);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockNoteHubApi;
    use crate::test_utils::sample_stats;

    #[tokio::test]
    async fn test_stats_prints_counters() {
        let mut api = MockNoteHubApi::new();
        api.expect_note_stats()
            .withf(|&note_id| note_id == 42)
            .returning(|note_id| Ok(sample_stats(note_id)));

        stats(&api, 42).await.unwrap();
    }

    #[tokio::test]
    async fn test_bump_parses_field() {
        let mut api = MockNoteHubApi::new();
        api.expect_bump_stat()
            .withf(|&note_id, &field, &delta| {
                note_id == 42 && field == StatField::Likes && delta == 1
            })
            .returning(|note_id, _, _| Ok(sample_stats(note_id)));

        bump(&api, 42, "likes", 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_bump_rejects_unknown_field() {
        // No API call should happen for an unknown counter name
        let api = MockNoteHubApi::new();

        let result = bump(&api, 42, "downloads", 1).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("downloads"));
    }
}
