//! # Domain Model
//!
//! Core types for the note resource: the `Note` document itself, its
//! closed `Tag` label set, and the sortable-field/direction enums used
//! by listing queries.
//!
//! Tag and sort-field membership is enforced at the HTTP boundary by
//! parsing into these enums, so the query layers never perform runtime
//! membership checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A note document as stored and served.
///
/// `id` is assigned by the store at insert and never reassigned.
/// `created_at` is set once; `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tag: Tag,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fixed set of note category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tag {
    Work,
    Personal,
    Meeting,
    Shopping,
    Ideas,
    Travel,
    Finance,
    Health,
    Important,
    #[default]
    Todo,
}

impl Tag {
    /// All labels, in their canonical order (used for validation messages).
    pub const ALL: [Tag; 10] = [
        Tag::Work,
        Tag::Personal,
        Tag::Meeting,
        Tag::Shopping,
        Tag::Ideas,
        Tag::Travel,
        Tag::Finance,
        Tag::Health,
        Tag::Important,
        Tag::Todo,
    ];

    /// Get the label string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Work => "Work",
            Tag::Personal => "Personal",
            Tag::Meeting => "Meeting",
            Tag::Shopping => "Shopping",
            Tag::Ideas => "Ideas",
            Tag::Travel => "Travel",
            Tag::Finance => "Finance",
            Tag::Health => "Health",
            Tag::Important => "Important",
            Tag::Todo => "Todo",
        }
    }

    /// Parse a label, `None` if it is not a member of the set.
    pub fn parse(value: &str) -> Option<Tag> {
        Tag::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

/// Fields a listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Id,
    Title,
    Tag,
    CreatedAt,
    #[default]
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Id,
        SortField::Title,
        SortField::Tag,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Tag => "tag",
            SortField::CreatedAt => "createdAt",
            SortField::UpdatedAt => "updatedAt",
        }
    }

    pub fn parse(value: &str) -> Option<SortField> {
        SortField::ALL.iter().copied().find(|f| f.as_str() == value)
    }
}

/// Sort direction for the requested field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<SortDirection> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Validated input for creating a note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tag: Tag,
}

impl NoteDraft {
    /// Create a draft with default content (empty) and tag (`Todo`).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            tag: Tag::default(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = tag;
        self
    }
}

/// Partial update: only the provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<Tag>,
}

impl NotePatch {
    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}
