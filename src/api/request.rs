//! # Request Validation
//!
//! The validation collaborator in front of the core: parses raw query
//! parameters and JSON bodies into validated domain values, so invalid
//! pages, page sizes, tags, sort fields, and titles never reach the
//! planner or the store. Unknown parameters and fields are rejected.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::listing::{ListingRequest, MAX_PER_PAGE, MIN_PER_PAGE};
use crate::model::{NoteDraft, NotePatch, SortDirection, SortField, Tag};

use super::errors::{ApiError, ApiResult};

/// Parse the `GET /notes` query string into a validated request.
pub fn parse_listing(params: &HashMap<String, String>) -> ApiResult<ListingRequest> {
    let mut request = ListingRequest::default();

    for (key, value) in params {
        match key.as_str() {
            "page" => request.page = parse_page(value)?,
            "perPage" => request.per_page = parse_per_page(value)?,
            "tag" => request.tag = Some(parse_tag(value)?),
            "search" => request.search = Some(value.clone()),
            "sortBy" => request.sort_by = parse_sort_by(value)?,
            "sortOrder" => request.sort_order = parse_sort_order(value)?,
            other => {
                return Err(ApiError::Validation(format!("{other} is not allowed")));
            }
        }
    }

    Ok(request)
}

/// Parse a path `noteId` segment.
pub fn parse_note_id(value: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| {
        ApiError::Validation("Invalid id format. Must be a valid note id".to_string())
    })
}

fn parse_page(value: &str) -> ApiResult<usize> {
    let page: usize = value
        .parse()
        .map_err(|_| ApiError::Validation("page must be a number".to_string()))?;
    if page < 1 {
        return Err(ApiError::Validation("page must be at least 1".to_string()));
    }
    Ok(page)
}

fn parse_per_page(value: &str) -> ApiResult<usize> {
    let per_page: usize = value
        .parse()
        .map_err(|_| ApiError::Validation("perPage must be a number".to_string()))?;
    if per_page < MIN_PER_PAGE {
        return Err(ApiError::Validation(format!(
            "perPage must be at least {MIN_PER_PAGE}"
        )));
    }
    if per_page > MAX_PER_PAGE {
        return Err(ApiError::Validation(format!(
            "perPage must be at most {MAX_PER_PAGE}"
        )));
    }
    Ok(per_page)
}

fn parse_tag(value: &str) -> ApiResult<Tag> {
    Tag::parse(value).ok_or_else(|| {
        let labels: Vec<_> = Tag::ALL.iter().map(|t| t.as_str()).collect();
        ApiError::Validation(format!("tag must be one of: {}", labels.join(", ")))
    })
}

fn parse_sort_by(value: &str) -> ApiResult<SortField> {
    SortField::parse(value).ok_or_else(|| {
        let fields: Vec<_> = SortField::ALL.iter().map(|f| f.as_str()).collect();
        ApiError::Validation(format!("sortBy must be one of: {}", fields.join(", ")))
    })
}

fn parse_sort_order(value: &str) -> ApiResult<SortDirection> {
    SortDirection::parse(value)
        .ok_or_else(|| ApiError::Validation("sortOrder must be one of: asc, desc".to_string()))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreateNoteBody {
    title: String,
    content: Option<String>,
    tag: Option<String>,
}

/// Parse and validate a `POST /notes` body.
///
/// `title` is required and non-empty after trim; `content` defaults to
/// empty; `tag` defaults to the designated default label.
pub fn parse_create(body: Value) -> ApiResult<NoteDraft> {
    let body: CreateNoteBody =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;

    let title = body.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::Validation(
            "title should have at least 1 character".to_string(),
        ));
    }

    let mut draft = NoteDraft::new(title);
    if let Some(content) = body.content {
        draft = draft.with_content(content.trim());
    }
    if let Some(tag) = body.tag {
        draft = draft.with_tag(parse_tag(&tag)?);
    }

    Ok(draft)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UpdateNoteBody {
    title: Option<String>,
    content: Option<String>,
    tag: Option<String>,
}

/// Parse and validate a `PATCH /notes/:noteId` body.
///
/// Every field is optional, but at least one must be provided, and a
/// provided `title` must still be non-empty after trim.
pub fn parse_update(body: Value) -> ApiResult<NotePatch> {
    let body: UpdateNoteBody =
        serde_json::from_value(body).map_err(|e| ApiError::Validation(e.to_string()))?;

    let title = match body.title {
        Some(title) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ApiError::Validation(
                    "title should have at least 1 character".to_string(),
                ));
            }
            Some(title)
        }
        None => None,
    };

    let patch = NotePatch {
        title,
        content: body.content.map(|c| c.trim().to_string()),
        tag: body.tag.as_deref().map(parse_tag).transpose()?,
    };

    if patch.is_empty() {
        return Err(ApiError::Validation(
            "At least one field (title, content, or tag) must be provided".to_string(),
        ));
    }

    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_listing_defaults() {
        let request = parse_listing(&HashMap::new()).unwrap();
        assert_eq!(request, ListingRequest::default());
    }

    #[test]
    fn test_listing_full_query() {
        let params = query(&[
            ("page", "2"),
            ("perPage", "5"),
            ("tag", "Work"),
            ("search", "budget"),
            ("sortBy", "title"),
            ("sortOrder", "asc"),
        ]);

        let request = parse_listing(&params).unwrap();
        assert_eq!(request.page, 2);
        assert_eq!(request.per_page, 5);
        assert_eq!(request.tag, Some(Tag::Work));
        assert_eq!(request.search.as_deref(), Some("budget"));
        assert_eq!(request.sort_by, SortField::Title);
        assert_eq!(request.sort_order, SortDirection::Asc);
    }

    #[test]
    fn test_listing_rejects_out_of_range() {
        assert!(parse_listing(&query(&[("page", "0")])).is_err());
        assert!(parse_listing(&query(&[("page", "abc")])).is_err());
        assert!(parse_listing(&query(&[("perPage", "4")])).is_err());
        assert!(parse_listing(&query(&[("perPage", "21")])).is_err());
    }

    #[test]
    fn test_listing_accepts_per_page_bounds() {
        assert_eq!(
            parse_listing(&query(&[("perPage", "5")])).unwrap().per_page,
            5
        );
        assert_eq!(
            parse_listing(&query(&[("perPage", "20")])).unwrap().per_page,
            20
        );
    }

    #[test]
    fn test_listing_rejects_unknown_enum_values() {
        assert!(parse_listing(&query(&[("tag", "Chores")])).is_err());
        assert!(parse_listing(&query(&[("sortBy", "score")])).is_err());
        assert!(parse_listing(&query(&[("sortOrder", "up")])).is_err());
    }

    #[test]
    fn test_listing_rejects_unknown_parameter() {
        let err = parse_listing(&query(&[("color", "red")])).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_note_id_parsing() {
        assert!(parse_note_id("b3c1e2d4-0000-4000-8000-000000000000").is_ok());
        assert!(parse_note_id("not-an-id").is_err());
    }

    #[test]
    fn test_create_defaults_content_and_tag() {
        let draft = parse_create(json!({"title": "Errands"})).unwrap();
        assert_eq!(draft.title, "Errands");
        assert_eq!(draft.content, "");
        assert_eq!(draft.tag, Tag::Todo);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        assert!(parse_create(json!({"title": "   "})).is_err());
        assert!(parse_create(json!({"content": "no title"})).is_err());
    }

    #[test]
    fn test_create_rejects_unknown_tag_and_fields() {
        assert!(parse_create(json!({"title": "x", "tag": "Chores"})).is_err());
        assert!(parse_create(json!({"title": "x", "color": "red"})).is_err());
    }

    #[test]
    fn test_update_requires_at_least_one_field() {
        let err = parse_update(json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one field (title, content, or tag) must be provided"
        );
    }

    #[test]
    fn test_update_partial_fields() {
        let patch = parse_update(json!({"tag": "Health"})).unwrap();
        assert_eq!(patch.tag, Some(Tag::Health));
        assert_eq!(patch.title, None);
        assert_eq!(patch.content, None);
    }

    #[test]
    fn test_update_allows_clearing_content() {
        let patch = parse_update(json!({"content": ""})).unwrap();
        assert_eq!(patch.content.as_deref(), Some(""));
    }

    #[test]
    fn test_update_rejects_blank_title() {
        assert!(parse_update(json!({"title": ""})).is_err());
    }
}
