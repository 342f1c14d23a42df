//! Location search results parser
//!
//! Parses the `/search?type=locations` page into metro areas, including the
//! embedded "track metro area" form when the row has one.

use scraper::{ElementRef, Html, Selector};

use super::text::{first_attr, first_text, selector};
use crate::error::{Result, SongkickError};
use crate::types::{LocationResult, TrackForm};
use crate::url::absolute_url;

/// Banner shown by the site when a search matched nothing
pub const NO_RESULTS_MARKER: &str = "Sorry, we found no results for";

struct LocationSelectors {
    row: Selector,
    link: Selector,
    summary_link: Selector,
    track_form: Selector,
    authenticity_token: Selector,
    relationship_type: Selector,
    subject_type: Selector,
    success_url: Selector,
}

impl LocationSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: selector("li.small-city")?,
            link: selector("a.search-link")?,
            summary_link: selector("p.summary a.search-link")?,
            track_form: selector(r#"form[data-analytics-category="track_metro_area_button"]"#)?,
            authenticity_token: selector(r#"input[name="authenticity_token"]"#)?,
            relationship_type: selector(r#"input[name="relationship_type"]"#)?,
            subject_type: selector(r#"input[name="subject_type"]"#)?,
            success_url: selector(r#"input[name="success_url"]"#)?,
        })
    }
}

/// Parses a location search results page
///
/// Every `li.small-city` row becomes one [`LocationResult`]. Rows missing
/// their name, id or link are skipped.
///
/// # Arguments
/// * `html` - Raw HTML of the search results page
/// * `query` - The query that was searched, used in the not-found message
///
/// # Errors
/// Returns `NotFound` when the page carries the "no results" banner
pub fn parse_location_results(html: &str, query: &str) -> Result<Vec<LocationResult>> {
    if html.contains(NO_RESULTS_MARKER) {
        tracing::debug!(query, "no location results");
        return Err(SongkickError::NotFound(format!(
            "No results found for {}",
            query
        )));
    }

    let selectors = LocationSelectors::new()?;
    let document = Html::parse_document(html);

    tracing::debug!("parsing locations html body started");
    let locations: Vec<LocationResult> = document
        .select(&selectors.row)
        .filter_map(|row| parse_location_row(&row, &selectors))
        .collect();
    tracing::debug!(count = locations.len(), "parsing locations html body completed");

    Ok(locations)
}

fn parse_location_row(row: &ElementRef, selectors: &LocationSelectors) -> Option<LocationResult> {
    let name = first_text(row, &selectors.summary_link)?;
    let subject_id = first_attr(row, &selectors.link, "data-id")?;
    let url = first_attr(row, &selectors.link, "href").and_then(|href| absolute_url(&href))?;

    Some(LocationResult {
        name,
        subject_id,
        url,
        tracking: parse_track_form(row, selectors),
    })
}

/// All five fields or nothing
fn parse_track_form(row: &ElementRef, selectors: &LocationSelectors) -> Option<TrackForm> {
    let form = row.select(&selectors.track_form).next()?;

    let track_url = form.value().attr("action").and_then(absolute_url)?;
    let authenticity_token = first_attr(&form, &selectors.authenticity_token, "value")?;
    let relationship_type = first_attr(&form, &selectors.relationship_type, "value")?;
    let subject_type = first_attr(&form, &selectors.subject_type, "value")?;
    let success_url = first_attr(&form, &selectors.success_url, "value")?;

    Some(TrackForm {
        track_url,
        authenticity_token,
        relationship_type,
        subject_type,
        success_url,
    })
}
