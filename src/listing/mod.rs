//! # Listing Query Planner
//!
//! Translates a listing request's raw parameters into the two store
//! queries that serve `GET /notes`: one shared filter, one shared sort
//! specification, and a pagination window. The count and the windowed
//! fetch are built from the same plan so the result envelope is
//! consistent by construction.
//!
//! The planner assumes the HTTP boundary has already enforced range and
//! enum constraints (page >= 1, perPage in [5, 20], tag/sortBy/sortOrder
//! membership); the one defensive check it keeps is treating a blank
//! search string as "no text search".

use serde::Serialize;

use crate::model::{Note, SortDirection, SortField, Tag};
use crate::store::{NoteFilter, SortSpec};

/// Bounds on the page size, enforced at the HTTP boundary.
pub const MIN_PER_PAGE: usize = 5;
pub const MAX_PER_PAGE: usize = 20;

/// Default page size when the request omits `perPage`.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Validated parameters of one listing call.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    /// 1-based page number, >= 1.
    pub page: usize,
    /// Page size, in [MIN_PER_PAGE, MAX_PER_PAGE].
    pub per_page: usize,
    /// Optional tag equality constraint.
    pub tag: Option<Tag>,
    /// Optional free-text search; blank is treated as absent.
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortDirection,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            tag: None,
            search: None,
            sort_by: SortField::default(),
            sort_order: SortDirection::default(),
        }
    }
}

/// The two-query plan for one listing call.
///
/// `filter` feeds both the count and the windowed fetch; `sort` and the
/// window feed only the fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPlan {
    pub filter: NoteFilter,
    pub sort: SortSpec,
    pub skip: usize,
    pub limit: usize,
}

impl ListingPlan {
    /// Build the plan for a request.
    pub fn build(request: &ListingRequest) -> Self {
        let search = request
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let filter = NoteFilter {
            tag: request.tag,
            search,
        };

        let sort = if filter.has_search() {
            SortSpec::RelevanceThen {
                field: request.sort_by,
                direction: request.sort_order,
            }
        } else {
            SortSpec::FieldOnly {
                field: request.sort_by,
                direction: request.sort_order,
            }
        };

        Self {
            filter,
            sort,
            // Saturating: the boundary only guarantees page >= 1, so an
            // absurdly large page must clamp to a far-past-the-end window
            // rather than overflow.
            skip: request.page.saturating_sub(1).saturating_mul(request.per_page),
            limit: request.per_page,
        }
    }
}

/// Result envelope for one listing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub page: usize,
    pub per_page: usize,
    pub total_notes: usize,
    pub total_pages: usize,
    pub notes: Vec<Note>,
}

impl ListingPage {
    /// Assemble the envelope from the two completed store queries.
    ///
    /// `total_pages` is never below 1, even for an empty result set; a
    /// page past the end simply carries an empty `notes` sequence.
    pub fn assemble(request: &ListingRequest, total_notes: usize, notes: Vec<Note>) -> Self {
        Self {
            page: request.page,
            per_page: request.per_page,
            total_notes,
            total_pages: total_pages(total_notes, request.per_page),
            notes,
        }
    }
}

/// `max(1, ceil(total_notes / per_page))`
fn total_pages(total_notes: usize, per_page: usize) -> usize {
    std::cmp::max(1, total_notes.div_ceil(per_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = ListingRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 10);
        assert_eq!(request.sort_by, SortField::UpdatedAt);
        assert_eq!(request.sort_order, SortDirection::Desc);
    }

    #[test]
    fn test_plan_without_search_sorts_by_field_only() {
        let request = ListingRequest {
            sort_by: SortField::Title,
            sort_order: SortDirection::Asc,
            ..Default::default()
        };

        let plan = ListingPlan::build(&request);
        assert_eq!(plan.filter, NoteFilter::default());
        assert_eq!(
            plan.sort,
            SortSpec::FieldOnly {
                field: SortField::Title,
                direction: SortDirection::Asc,
            }
        );
    }

    #[test]
    fn test_plan_with_search_sorts_by_relevance_first() {
        let request = ListingRequest {
            search: Some("  budget  ".to_string()),
            ..Default::default()
        };

        let plan = ListingPlan::build(&request);
        assert_eq!(plan.filter.search.as_deref(), Some("budget"));
        assert_eq!(
            plan.sort,
            SortSpec::RelevanceThen {
                field: SortField::UpdatedAt,
                direction: SortDirection::Desc,
            }
        );
    }

    #[test]
    fn test_blank_search_is_treated_as_absent() {
        let request = ListingRequest {
            search: Some("   ".to_string()),
            ..Default::default()
        };

        let plan = ListingPlan::build(&request);
        assert_eq!(plan.filter.search, None);
        assert!(matches!(plan.sort, SortSpec::FieldOnly { .. }));
    }

    #[test]
    fn test_plan_combines_tag_and_search() {
        let request = ListingRequest {
            tag: Some(Tag::Work),
            search: Some("budget".to_string()),
            ..Default::default()
        };

        let plan = ListingPlan::build(&request);
        assert_eq!(plan.filter.tag, Some(Tag::Work));
        assert_eq!(plan.filter.search.as_deref(), Some("budget"));
    }

    #[test]
    fn test_window_offsets() {
        let request = ListingRequest {
            page: 3,
            per_page: 5,
            ..Default::default()
        };

        let plan = ListingPlan::build(&request);
        assert_eq!(plan.skip, 10);
        assert_eq!(plan.limit, 5);
    }

    #[test]
    fn test_window_saturates_on_huge_page() {
        let request = ListingRequest {
            page: usize::MAX,
            per_page: MAX_PER_PAGE,
            ..Default::default()
        };

        let plan = ListingPlan::build(&request);
        assert_eq!(plan.skip, usize::MAX);
        assert_eq!(plan.limit, MAX_PER_PAGE);
    }

    #[test]
    fn test_total_pages_never_below_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn test_total_pages_formula_across_page_sizes() {
        for per_page in MIN_PER_PAGE..=MAX_PER_PAGE {
            for total in 0..100 {
                let expected = std::cmp::max(1, (total + per_page - 1) / per_page);
                assert_eq!(total_pages(total, per_page), expected);
            }
        }
    }

    #[test]
    fn test_envelope_serialization_is_camel_case() {
        let page = ListingPage::assemble(&ListingRequest::default(), 0, Vec::new());
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["page"], 1);
        assert_eq!(json["perPage"], 10);
        assert_eq!(json["totalNotes"], 0);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["notes"], serde_json::json!([]));
    }
}
