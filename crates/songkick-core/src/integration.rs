//! Main integration API for songkick.com
//!
//! Combines the session configuration, a [`Transport`] and the HTML
//! extractors behind the four public operations.

use std::sync::Arc;

use serde_json::Value;

use crate::classify::classify_response;
use crate::client::{HttpMethod, HttpRequest, ReqwestTransport, SessionConfig, Transport};
use crate::error::{Result, SongkickError};
use crate::parser::{parse_event_details, parse_location_results, parse_tracked_events};
use crate::types::{EventDetails, EventSummary, LocationResult, TrackOutcome, TrackRequest};
use crate::url::{build_calendar_url, build_search_url, build_trackings_url};

/// Name reported in classified errors
pub const INTEGRATION_NAME: &str = "songkick";

/// Marker the trackings endpoint puts in a JSON acknowledgement
const STATUS_OK_MARKER: &str = r#""status":"ok""#;

/// Cookie-authenticated client for songkick.com
///
/// Holds one immutable [`SessionConfig`] for its lifetime. Calls share no
/// mutable state, so `&self` methods can run concurrently.
pub struct SongkickIntegration {
    config: SessionConfig,
    transport: Arc<dyn Transport>,
}

impl SongkickIntegration {
    /// Create an integration using the default `reqwest` transport
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(cookies: impl Into<String>) -> Result<Self> {
        Self::with_config(SessionConfig::new(cookies))
    }

    /// Create an integration from an explicit session configuration
    pub fn with_config(config: SessionConfig) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create an integration that sends every request through `transport`
    pub fn with_transport(config: SessionConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// `Cookie` and `User-Agent` headers sent with every request
    pub fn build_headers(&self) -> Vec<(String, String)> {
        vec![
            ("User-Agent".to_string(), self.config.user_agent.clone()),
            ("Cookie".to_string(), self.config.cookies.clone()),
        ]
    }

    /// Issue a request against a JSON endpoint and classify the response
    ///
    /// # Errors
    /// - `Auth` when the site answers 401
    /// - `Api` for any other non-success status (500 reported as 501)
    /// - `HttpError` if the request could not be sent
    pub async fn generic_make_request(&self, method: HttpMethod, url: &str) -> Result<Value> {
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: self.build_headers(),
            form: None,
        };

        let response = self.transport.execute(request).await?;
        classify_response(INTEGRATION_NAME, response.status, &response.body)
    }

    /// Search for metro areas by name
    ///
    /// # Returns
    /// Every metro area on the results page
    ///
    /// # Errors
    /// - `InvalidInput` if the query is empty or whitespace only
    /// - `NotFound` if the site reports no results
    /// - `HttpStatus` if the search page is not served successfully
    /// - `HttpError` if the request could not be sent
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> songkick_core::Result<()> {
    /// use songkick_core::SongkickIntegration;
    /// let songkick = SongkickIntegration::new("_skweb_session=...")?;
    /// for location in songkick.search_location("london").await? {
    ///     println!("{} ({})", location.name, location.subject_id);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_location(&self, location_name: &str) -> Result<Vec<LocationResult>> {
        let trimmed = location_name.trim();
        if trimmed.is_empty() {
            return Err(SongkickError::InvalidInput(
                "Location name cannot be empty".to_string(),
            ));
        }

        let url = build_search_url(&self.config.base_url, trimmed);
        tracing::debug!(%url, "visiting locations url");

        let response = self
            .transport
            .execute(HttpRequest::get(&url, self.build_headers()))
            .await?;

        if !response.is_success() {
            return Err(SongkickError::HttpStatus {
                status: response.status,
                url,
            });
        }

        parse_location_results(&response.body, trimmed)
    }

    /// Track or untrack a location / artist
    ///
    /// Never fails: send errors and unexpected responses resolve to
    /// [`TrackOutcome::Failed`].
    pub async fn track_untrack_location(&self, request: &TrackRequest) -> TrackOutcome {
        let url = build_trackings_url(&self.config.base_url, request.untrack);
        tracing::debug!(
            subject_id = %request.subject_id,
            untrack = request.untrack,
            "attempting to track/untrack location"
        );

        let form = vec![
            ("utf8".to_string(), "\u{2713}".to_string()),
            (
                "authenticity_token".to_string(),
                request.authenticity_token.clone(),
            ),
            (
                "relationship_type".to_string(),
                request.relationship_type.clone(),
            ),
            ("subject_id".to_string(), request.subject_id.clone()),
            ("subject_type".to_string(), request.subject_type.clone()),
            ("success_url".to_string(), request.success_url.clone()),
        ];

        let response = match self
            .transport
            .execute(HttpRequest::post_form(url, self.build_headers(), form))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    subject_id = %request.subject_id,
                    error = %e,
                    "track/untrack request failed"
                );
                return TrackOutcome::Failed;
            }
        };

        if response.status != 200 {
            tracing::debug!(status = response.status, "track/untrack rejected");
            return TrackOutcome::Failed;
        }

        if !response.body.contains(STATUS_OK_MARKER) {
            return TrackOutcome::Ok;
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => TrackOutcome::UpstreamBody(body),
            Err(e) => {
                tracing::warn!(
                    subject_id = %request.subject_id,
                    error = %e,
                    "track/untrack acknowledgement is not valid JSON"
                );
                TrackOutcome::Failed
            }
        }
    }

    /// List upcoming events from the artists the account tracks
    ///
    /// # Errors
    /// - `Api` if the calendar could not be fetched
    /// - `HttpError` if the request could not be sent
    pub async fn get_events(&self) -> Result<Vec<EventSummary>> {
        tracing::debug!("fetching all events for user");
        let url = build_calendar_url(&self.config.base_url);

        let response = self
            .transport
            .execute(HttpRequest::get(url, self.build_headers()))
            .await?;

        parse_tracked_events(response.status, &response.body)
    }

    /// Fetch full details for one event page
    ///
    /// # Arguments
    /// * `event_url` - Absolute event URL, e.g. an [`EventSummary::event_url`]
    ///
    /// # Errors
    /// - `InvalidInput` if the URL is empty
    /// - `HttpStatus` if the page is not served successfully
    /// - `HttpError` if the request could not be sent
    pub async fn get_event_details(&self, event_url: &str) -> Result<EventDetails> {
        let event_url = event_url.trim();
        if event_url.is_empty() {
            return Err(SongkickError::InvalidInput(
                "Event URL cannot be empty".to_string(),
            ));
        }

        tracing::debug!(%event_url, "fetching event details");
        let response = self
            .transport
            .execute(HttpRequest::get(event_url, self.build_headers()))
            .await?;

        if !response.is_success() {
            return Err(SongkickError::HttpStatus {
                status: response.status,
                url: event_url.to_string(),
            });
        }

        let details = parse_event_details(&response.body)?;
        tracing::debug!("event details fetched successfully");
        Ok(details)
    }
}
