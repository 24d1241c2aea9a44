use anyhow::Result;
use log::debug;

use crate::api::NoteHubApi;

/// Search notes by keyword and print the results.
#[tracing::instrument(skip(api))]
pub async fn search<A: NoteHubApi>(api: &A, keyword: &str) -> Result<()> {
    debug!("Searching {} for {:?}", api.base_url(), keyword);
    let response = api.search_notes(keyword).await?;

    println!("{}", response.message);
    if !response.success && !response.notes.is_empty() {
        println!("\nYou might like:");
    }
    for note in &response.notes {
        println!("  [{}] {} (uploader {})", note.id, note.title, note.uploader_id);
    }

    Ok(())
}
