//! Core data types for the Songkick integration
//!
//! Every field scraped from a page is an `Option`: absent elements become
//! `None`, never an empty or half-built string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input for tracking or untracking a location / artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRequest {
    pub authenticity_token: String,
    pub relationship_type: String,
    pub subject_id: String,
    pub subject_type: String,
    pub success_url: String,
    #[serde(default)]
    pub untrack: bool,
}

/// Hidden fields of the "track metro area" form embedded in a search row
///
/// Either the whole form is present on the row or none of it is, so these
/// live together behind a single `Option` on [`LocationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackForm {
    /// Absolute form action URL
    pub track_url: String,
    pub authenticity_token: String,
    pub relationship_type: String,
    pub subject_type: String,
    pub success_url: String,
}

impl TrackForm {
    /// Build the request that submits this form for `subject_id`
    pub fn to_request(&self, subject_id: &str, untrack: bool) -> TrackRequest {
        TrackRequest {
            authenticity_token: self.authenticity_token.clone(),
            relationship_type: self.relationship_type.clone(),
            subject_id: subject_id.to_string(),
            subject_type: self.subject_type.clone(),
            success_url: self.success_url.clone(),
            untrack,
        }
    }
}

/// A metro area returned by location search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
    /// Display name (e.g., "London, UK")
    pub name: String,

    /// Metro area id used as `subject_id` when tracking
    pub subject_id: String,

    /// Absolute URL of the metro area page
    pub url: String,

    /// Tracking form, when the row offers one
    pub tracking: Option<TrackForm>,
}

/// One row of the tracked-artists calendar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Machine-readable datetime from the row's `<time>` element
    pub date_time: Option<String>,
    pub artist: Option<String>,
    pub venue: Option<String>,
    /// City / state line
    pub location: Option<String>,
    pub street_address: Option<String>,
    pub event_url: Option<String>,
    pub image_url: Option<String>,
    pub ticket_url: Option<String>,
}

/// Sentinel vendor name for ticket links without a vendor label
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// A place to buy tickets for an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOption {
    pub vendor: String,
    /// Absolute purchase link
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInformation {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDetails {
    pub price: Option<String>,
    pub doors_open: Option<String>,
}

/// Full detail of a single event page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event_date_time: Option<String>,
    pub name: Option<String>,
    /// "Venue, City", only when both parts are on the page
    pub location: Option<String>,
    /// Absolute URL of the large profile image
    pub image_url: Option<String>,
    pub ticketing_information: Vec<TicketOption>,
    pub venue_information: VenueInformation,
    pub additional_details: AdditionalDetails,
}

/// Outcome of a track / untrack submission
///
/// The mutation is best-effort: failures are reported as [`TrackOutcome::Failed`]
/// instead of an error.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackOutcome {
    Ok,
    Failed,
    /// JSON acknowledgement returned by the site, passed through untouched
    UpstreamBody(Value),
}

impl TrackOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, TrackOutcome::Failed)
    }

    /// JSON shape handed back to callers: `{"status": "ok"}`,
    /// `{"status": "failed"}` or the upstream body
    pub fn to_json(&self) -> Value {
        match self {
            TrackOutcome::Ok => serde_json::json!({ "status": "ok" }),
            TrackOutcome::Failed => serde_json::json!({ "status": "failed" }),
            TrackOutcome::UpstreamBody(body) => body.clone(),
        }
    }
}

impl Serialize for TrackOutcome {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

/// `{"locations": [...]}` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationResult>,
}

/// `{"events": [...]}` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventSummary>,
}

/// `{"event_details": {...}}` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetailsResponse {
    pub event_details: EventDetails,
}
