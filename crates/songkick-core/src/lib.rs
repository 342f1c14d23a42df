//! Songkick Integration Core Library
//!
//! Async, cookie-authenticated access to songkick.com for a logged-in account.
//!
//! # Overview
//!
//! This crate provides:
//! - A pluggable [`Transport`] (default: `reqwest`) carrying the session cookie
//!   and user agent on every request
//! - A response classifier mapping JSON endpoint failures to typed errors
//! - HTML extractors for location search, the tracked-artists calendar and
//!   single event pages
//! - [`SongkickIntegration`], the facade exposing the public operations
//!
//! # Example
//!
//! ```no_run
//! use songkick_core::{Result, SongkickIntegration};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let songkick = SongkickIntegration::new("_skweb_session=...")?;
//!
//!     // Find a metro area and track it
//!     let locations = songkick.search_location("london").await?;
//!     if let Some(form) = locations.first().and_then(|l| l.tracking.as_ref()) {
//!         let request = form.to_request(&locations[0].subject_id, false);
//!         println!("{:?}", songkick.track_untrack_location(&request).await);
//!     }
//!
//!     // Upcoming concerts from tracked artists
//!     for event in songkick.get_events().await? {
//!         if let Some(url) = &event.event_url {
//!             let details = songkick.get_event_details(url).await?;
//!             println!("{:?}: {:?}", details.name, details.ticketing_information);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Tracking is best-effort
//!
//! [`SongkickIntegration::track_untrack_location`] never returns an error;
//! failures come back as [`TrackOutcome::Failed`].

mod classify;
mod client;
mod error;
mod integration;
pub mod parser;
mod types;
pub mod url;

// Re-export client types
pub use client::{
    HttpMethod, HttpRequest, RawResponse, ReqwestTransport, SessionConfig, Transport,
    random_user_agent,
};

// Re-export classifier
pub use classify::classify_response;

// Re-export error types
pub use error::{Result, SongkickError};

// Re-export parser functions
pub use parser::{parse_event_details, parse_location_results, parse_tracked_events};

// Re-export main integration API
pub use integration::{INTEGRATION_NAME, SongkickIntegration};

// Re-export data types
pub use types::{
    AdditionalDetails, EventDetails, EventDetailsResponse, EventSummary, EventsResponse,
    LocationResult, LocationsResponse, TicketOption, TrackForm, TrackOutcome, TrackRequest,
    UNKNOWN_VENDOR, VenueInformation,
};

// Re-export URL helper functions for convenience
pub use url::{SITE_ORIGIN, absolute_url, build_search_url, build_trackings_url};
