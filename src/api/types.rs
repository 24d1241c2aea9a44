use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A note in the shared space.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub uploader_id: u64,
}

/// Response to a keyword search.
///
/// When nothing matches, `success` is false and `notes` carries the
/// backend's random recommendations instead of search hits.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub message: String,
    pub notes: Vec<Note>,
}

/// Counter totals for a single note.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoteStats {
    pub note_id: u64,
    pub views: u64,
    pub likes: u64,
    pub favorites: u64,
    pub comments: u64,
}

/// The counter fields tracked per note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Views,
    Likes,
    Favorites,
    Comments,
}

impl StatField {
    /// The field name as it appears in API routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatField::Views => "views",
            StatField::Likes => "likes",
            StatField::Favorites => "favorites",
            StatField::Comments => "comments",
        }
    }
}

impl std::fmt::Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "views" => Ok(StatField::Views),
            "likes" => Ok(StatField::Likes),
            "favorites" => Ok(StatField::Favorites),
            "comments" => Ok(StatField::Comments),
            other => Err(anyhow::anyhow!(
                "Unknown counter '{}'. Expected one of: views, likes, favorites, comments.",
                other
            )),
        }
    }
}

/// A registered user.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub student_number: String,
    pub email: String,
}

/// Partial update of a user's profile; unset fields are left unchanged.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserUpdate {
    /// True if no field is set.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.student_number.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_field_round_trip() {
        for field in [
            StatField::Views,
            StatField::Likes,
            StatField::Favorites,
            StatField::Comments,
        ] {
            assert_eq!(field.as_str().parse::<StatField>().unwrap(), field);
        }
    }

    #[test]
    fn test_stat_field_unknown_fails() {
        let result = "downloads".parse::<StatField>();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("downloads"));
    }

    #[test]
    fn test_note_stats_deserializes_camel_case() {
        let stats: NoteStats = serde_json::from_str(
            r#"{"noteId": 42, "views": 10, "likes": 3, "favorites": 1, "comments": 0}"#,
        )
        .unwrap();
        assert_eq!(stats.note_id, 42);
        assert_eq!(stats.views, 10);
    }

    #[test]
    fn test_user_update_skips_unset_fields() {
        let update = UserUpdate {
            email: Some("alice@example.com".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"email": "alice@example.com"}));
    }

    #[test]
    fn test_user_update_is_empty() {
        assert!(UserUpdate::default().is_empty());
        assert!(
            !UserUpdate {
                username: Some("bob".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
