//! HTML extractors for songkick.com pages
//!
//! Each extractor is a pure function over a complete page body. Missing
//! page elements become `None`; only the explicit page-level signals
//! (no-results banner, failed calendar fetch) produce errors.

pub mod event_details;
pub mod events;
pub mod location;
mod text;

pub use event_details::parse_event_details;
pub use events::parse_tracked_events;
pub use location::parse_location_results;
