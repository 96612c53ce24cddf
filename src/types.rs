//! Listing records returned by the catalog API.
//!
//! The explore controller treats items as opaque apart from their `id`; the
//! fields below exist for presentation only. Unknown fields in the server
//! payload are ignored so catalog-side additions do not break older clients.

use serde::{Deserialize, Serialize};

/// A course as it appears in an explore listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    /// Display name of the teacher or institution offering the course.
    #[serde(default)]
    pub teacher: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    /// Price in the marketplace's display currency; `None` means free.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub enrolled_count: Option<u32>,
}

/// A live event (webinar, workshop, ...) as it appears in a listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    /// Scheduled start, RFC 3339 on the wire.
    #[serde(default)]
    pub starts_at: Option<jiff::Timestamp>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub seats_left: Option<u32>,
    /// `None` means free admission.
    #[serde(default)]
    pub price: Option<f64>,
}

/// One listing record, tagged by the domain it was fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Listing {
    Course(CourseSummary),
    Event(EventSummary),
}

impl Listing {
    /// Stable identity, the only field the controller dereferences.
    pub fn id(&self) -> &str {
        match self {
            Listing::Course(c) => &c.id,
            Listing::Event(e) => &e.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Listing::Course(c) => &c.title,
            Listing::Event(e) => &e.title,
        }
    }
}

/// One page of results, normalized from the wire envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub items: Vec<Listing>,
    /// Server-reported total page count for the exact query that produced
    /// this page; at least 1 even when there are no items.
    pub total_pages: u32,
    pub total_items: u64,
}

/// Wire envelope: `{ "items": [...], "pagination": {...} }`.
#[derive(Debug, Deserialize)]
pub struct ExploreEnvelope<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total_pages: u32,
    pub total_items: u64,
}

/// Best-effort shape of a non-2xx response body.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_envelope_decodes_camel_case() {
        let body = r#"{
            "items": [
                {"id": "c-101", "title": "Clinical Anatomy", "teacher": "Dr. Osei",
                 "price": 49.0, "rating": 4.7, "enrolledCount": 1280}
            ],
            "pagination": {"totalPages": 7, "totalItems": 84}
        }"#;
        let env: ExploreEnvelope<CourseSummary> = serde_json::from_str(body).unwrap();
        assert_eq!(env.items.len(), 1);
        assert_eq!(env.items[0].id, "c-101");
        assert_eq!(env.items[0].enrolled_count, Some(1280));
        assert_eq!(env.pagination.total_pages, 7);
        assert_eq!(env.pagination.total_items, 84);
    }

    #[test]
    fn test_event_envelope_tolerates_missing_fields() {
        let body = r#"{
            "items": [{"id": "e-9", "title": "Suture Workshop", "unknownField": 3}],
            "pagination": {"totalPages": 1, "totalItems": 1}
        }"#;
        let env: ExploreEnvelope<EventSummary> = serde_json::from_str(body).unwrap();
        assert_eq!(env.items[0].id, "e-9");
        assert!(env.items[0].starts_at.is_none());
        assert!(env.items[0].price.is_none());
    }

    #[test]
    fn test_listing_id_dereference() {
        let course = Listing::Course(CourseSummary {
            id: "c-1".into(),
            title: "Intro".into(),
            teacher: None,
            category: None,
            level: None,
            price: None,
            rating: None,
            enrolled_count: None,
        });
        assert_eq!(course.id(), "c-1");
        assert_eq!(course.title(), "Intro");
    }
}
