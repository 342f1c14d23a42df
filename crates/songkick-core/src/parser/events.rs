//! Tracked-artists calendar parser
//!
//! Parses `/calendar?filter=tracked_artist`. Each `<li title="...">` is one
//! upcoming event.

use scraper::{ElementRef, Html, Selector};

use super::text::{element_text, first_attr, first_text, selector};
use crate::error::{Result, SongkickError};
use crate::integration::INTEGRATION_NAME;
use crate::types::EventSummary;
use crate::url::absolute_url;

/// Heading of a successfully rendered calendar page
///
/// The full text is "All upcoming concerts from the artists you’re
/// tracking."; only the part before the apostrophe is matched so either
/// apostrophe encoding passes.
pub const CALENDAR_BANNER: &str = "All upcoming concerts from the artists you";

struct EventSelectors {
    row: Selector,
    time: Selector,
    artist: Selector,
    location: Selector,
    venue_name: Selector,
    span: Selector,
    street_address: Selector,
    link: Selector,
    image: Selector,
    buy_tickets: Selector,
}

impl EventSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: selector("li[title]")?,
            time: selector("time")?,
            artist: selector("p.artists.summary strong")?,
            location: selector("p.location")?,
            venue_name: selector("span.venue-name")?,
            span: selector("span")?,
            street_address: selector("span.street-address")?,
            link: selector("a")?,
            image: selector("img")?,
            buy_tickets: selector("a.button.buy-tickets")?,
        })
    }
}

/// Parses the tracked-artists calendar into event summaries
///
/// A non-200 page is still parsed when it carries the calendar banner.
///
/// # Arguments
/// * `status` - HTTP status the page was served with
/// * `html` - Raw HTML of the calendar page
///
/// # Errors
/// Returns `Api` with the original status when the status is not 200 and
/// the banner is missing
pub fn parse_tracked_events(status: u16, html: &str) -> Result<Vec<EventSummary>> {
    if status != 200 && !html.contains(CALENDAR_BANNER) {
        tracing::debug!(status, "failed to fetch concert events");
        return Err(SongkickError::Api {
            integration: INTEGRATION_NAME.to_string(),
            message: "Failed to fetch concert events".to_string(),
            status,
            code: status.to_string(),
        });
    }

    let selectors = EventSelectors::new()?;
    let document = Html::parse_document(html);

    tracing::debug!("parsing html body for event information started");
    let events: Vec<EventSummary> = document
        .select(&selectors.row)
        .map(|row| parse_event_row(&row, &selectors))
        .collect();
    tracing::debug!(count = events.len(), "parsing html body for event information completed");

    Ok(events)
}

fn parse_event_row(row: &ElementRef, selectors: &EventSelectors) -> EventSummary {
    let location = row.select(&selectors.location).next();

    EventSummary {
        date_time: first_attr(row, &selectors.time, "datetime"),
        artist: first_text(row, &selectors.artist),
        venue: location.and_then(|p| first_text(&p, &selectors.venue_name)),
        location: location.and_then(|p| p.select(&selectors.span).nth(1).and_then(element_text)),
        street_address: location.and_then(|p| first_text(&p, &selectors.street_address)),
        event_url: first_attr(row, &selectors.link, "href").and_then(|href| absolute_url(&href)),
        image_url: first_attr(row, &selectors.image, "src").and_then(|src| absolute_url(&src)),
        ticket_url: first_attr(row, &selectors.buy_tickets, "href")
            .and_then(|href| absolute_url(&href)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALENDAR: &str = r#"
    <html><body>
    <h2>All upcoming concerts from the artists you’re tracking.</h2>
    <ul class="event-listings">
        <li title="Saturday 14 March 2026">
            <a href="/concerts/123">
                <time datetime="2026-03-14T19:30:00-0500"></time>
                <img src="//img.example/x.jpg">
            </a>
            <p class="artists summary"><strong>Phoebe Bridgers</strong></p>
            <p class="location">
                <span class="venue-name"> First Avenue </span>
                <span>Minneapolis, MN, US</span>
                <span class="street-address">701 N 1st Ave</span>
            </p>
            <a class="button buy-tickets" href="/tickets/123">Buy tickets</a>
        </li>
        <li title="Friday 20 March 2026">
            <a href="/festivals/456-big-fest">
                <time datetime="2026-03-20"></time>
            </a>
            <p class="artists summary"><strong>Big Thief</strong></p>
        </li>
    </ul>
    </body></html>
    "#;

    #[test]
    fn test_parse_full_event_row() {
        let events = parse_tracked_events(200, CALENDAR).unwrap();
        assert_eq!(events.len(), 2);

        let event = &events[0];
        assert_eq!(event.date_time.as_deref(), Some("2026-03-14T19:30:00-0500"));
        assert_eq!(event.artist.as_deref(), Some("Phoebe Bridgers"));
        assert_eq!(event.venue.as_deref(), Some("First Avenue"));
        assert_eq!(event.location.as_deref(), Some("Minneapolis, MN, US"));
        assert_eq!(event.street_address.as_deref(), Some("701 N 1st Ave"));
        assert_eq!(
            event.event_url.as_deref(),
            Some("https://www.songkick.com/concerts/123")
        );
        assert_eq!(event.image_url.as_deref(), Some("https://img.example/x.jpg"));
        assert_eq!(
            event.ticket_url.as_deref(),
            Some("https://www.songkick.com/tickets/123")
        );
    }

    #[test]
    fn test_row_without_optional_elements() {
        let events = parse_tracked_events(200, CALENDAR).unwrap();

        let event = &events[1];
        assert_eq!(event.artist.as_deref(), Some("Big Thief"));
        assert_eq!(
            event.event_url.as_deref(),
            Some("https://www.songkick.com/festivals/456-big-fest")
        );
        assert_eq!(event.venue, None);
        assert_eq!(event.location, None);
        assert_eq!(event.street_address, None);
        assert_eq!(event.image_url, None);
        assert_eq!(event.ticket_url, None);
    }

    #[test]
    fn test_location_without_street_address() {
        let html = r#"<ul><li title="x">
            <p class="location"><span class="venue-name">The Echo</span><span>Los Angeles, CA, US</span></p>
        </li></ul>"#;

        let events = parse_tracked_events(200, html).unwrap();
        assert_eq!(events[0].venue.as_deref(), Some("The Echo"));
        assert_eq!(events[0].location.as_deref(), Some("Los Angeles, CA, US"));
        assert_eq!(events[0].street_address, None);
        assert_eq!(events[0].date_time, None);
        assert_eq!(events[0].event_url, None);
    }

    #[test]
    fn test_empty_calendar() {
        let html = "<html><body><h2>All upcoming concerts from the artists you're tracking.</h2></body></html>";
        let events = parse_tracked_events(200, html).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_non_200_without_banner_fails() {
        match parse_tracked_events(503, "<html><body>Service Unavailable</body></html>") {
            Err(SongkickError::Api { message, status, integration, .. }) => {
                assert_eq!(message, "Failed to fetch concert events");
                assert_eq!(status, 503);
                assert_eq!(integration, INTEGRATION_NAME);
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_200_with_banner_is_still_parsed() {
        let events = parse_tracked_events(404, CALENDAR).unwrap();
        assert_eq!(events.len(), 2);
    }
}
