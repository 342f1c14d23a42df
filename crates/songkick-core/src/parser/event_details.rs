//! Single event page parser
//!
//! Extracts date, name, venue, artwork, ticket vendors and the free-text
//! "additional details" block from a concert / festival page.

use regex::Regex;
use scraper::{ElementRef, Html};

use super::text::{clean_text, first_attr, first_text, joined_text_nodes, selector};
use crate::error::Result;
use crate::types::{
    AdditionalDetails, EventDetails, TicketOption, UNKNOWN_VENDOR, VenueInformation,
};
use crate::url::{absolute_url, upsize_avatar};

/// Parses an event page
///
/// # Arguments
/// * `html` - Raw HTML string of the event page
///
/// # Returns
/// [`EventDetails`] with `None` for everything the page does not show
///
/// # Errors
/// Only `ParseError` for an invalid selector; missing elements are not errors
pub fn parse_event_details(html: &str) -> Result<EventDetails> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let event_date_time = first_text(&root, &selector(".date-and-name p")?);
    let name = first_text(&root, &selector(".summary a")?);

    let venue = first_text(&root, &selector(".location .name a")?);
    let city = first_text(&root, &selector(".location span a")?);
    let location = match (venue, city) {
        (Some(venue), Some(city)) => Some(format!("{}, {}", venue, city)),
        _ => None,
    };

    let image_url = first_attr(&root, &selector(".profile-picture-wrapper img")?, "src")
        .and_then(|src| absolute_url(&upsize_avatar(&src)));

    let ticketing_information = parse_tickets(&root)?;

    let venue_information = VenueInformation {
        name: first_text(&root, &selector(".venue-info-details a")?),
        address: first_text(&root, &selector(".venue-hcard span")?),
    };

    let additional_details = root
        .select(&selector(".additional-details-container")?)
        .next()
        .map(|container| parse_additional_details(&joined_text_nodes(container)))
        .unwrap_or_default();

    Ok(EventDetails {
        event_date_time,
        name,
        location,
        image_url,
        ticketing_information,
        venue_information,
        additional_details,
    })
}

/// Ticket links without an `href` are skipped; a missing vendor label
/// falls back to [`UNKNOWN_VENDOR`]
fn parse_tickets(root: &ElementRef) -> Result<Vec<TicketOption>> {
    let ticket_selector = selector(".buy-ticket-link")?;
    let vendor_selector = selector(".vendor")?;

    let tickets = root
        .select(&ticket_selector)
        .filter_map(|ticket| {
            let link = ticket.value().attr("href").and_then(absolute_url)?;
            let vendor = first_text(&ticket, &vendor_selector)
                .unwrap_or_else(|| UNKNOWN_VENDOR.to_string());
            Some(TicketOption { vendor, link })
        })
        .collect();

    Ok(tickets)
}

/// Pulls price and door time out of the details text
///
/// Price is the single token after `Price:`. Doors open runs to the end of
/// the text or the next `Price:` label. Line breaks inside a value are
/// folded into single spaces before matching.
fn parse_additional_details(text: &str) -> AdditionalDetails {
    let mut details = AdditionalDetails::default();
    let text = clean_text(text);
    let text = text.as_str();

    if let Ok(re) = Regex::new(r"Price:\s*(\S+)")
        && let Some(caps) = re.captures(text)
        && let Some(m) = caps.get(1)
    {
        details.price = Some(m.as_str().to_string());
    }

    if let Ok(re) = Regex::new(r"Doors open:\s*(.*?)\s*(?:Price:|$)")
        && let Some(caps) = re.captures(text)
        && let Some(m) = caps.get(1)
        && !m.as_str().is_empty()
    {
        details.doors_open = Some(m.as_str().to_string());
    }

    details
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENT_PAGE: &str = r#"
    <html><body>
    <div class="date-and-name">
        <p> Saturday 14 March 2026 </p>
        <h1 class="summary"><a href="/artists/1-phoebe-bridgers">Phoebe Bridgers</a></h1>
    </div>
    <div class="location">
        <p class="name"><a href="/venues/10-first-avenue">First Avenue</a></p>
        <span><a href="/metro-areas/35130-us-minneapolis">Minneapolis, MN, US</a></span>
    </div>
    <div class="profile-picture-wrapper">
        <img src="//example.com/medium_avatar/x.jpg">
    </div>
    <div class="tickets">
        <a class="buy-ticket-link" href="/tickets/1">
            <span class="vendor">Ticketmaster</span>
        </a>
        <a class="buy-ticket-link" href="/tickets/2">Buy</a>
        <a class="buy-ticket-link">No link</a>
    </div>
    <div class="venue-info-details"><a href="/venues/10">First Avenue</a></div>
    <div class="venue-hcard"><span>701 N 1st Ave, Minneapolis, MN 55403</span></div>
    <div class="additional-details-container">
        <p>Price: $35.00 plus fees</p>
        <p>Doors open: 7:00 PM</p>
    </div>
    </body></html>
    "#;

    #[test]
    fn test_parse_full_event_page() {
        let details = parse_event_details(EVENT_PAGE).unwrap();

        assert_eq!(details.event_date_time.as_deref(), Some("Saturday 14 March 2026"));
        assert_eq!(details.name.as_deref(), Some("Phoebe Bridgers"));
        assert_eq!(
            details.location.as_deref(),
            Some("First Avenue, Minneapolis, MN, US")
        );
        assert_eq!(
            details.venue_information.name.as_deref(),
            Some("First Avenue")
        );
        assert_eq!(
            details.venue_information.address.as_deref(),
            Some("701 N 1st Ave, Minneapolis, MN 55403")
        );
        assert_eq!(details.additional_details.price.as_deref(), Some("$35.00"));
        assert_eq!(details.additional_details.doors_open.as_deref(), Some("7:00 PM"));
    }

    #[test]
    fn test_image_url_is_upsized_and_absolute() {
        let details = parse_event_details(EVENT_PAGE).unwrap();
        assert_eq!(
            details.image_url.as_deref(),
            Some("https://example.com/huge_avatar/x.jpg")
        );
    }

    #[test]
    fn test_ticket_without_vendor_defaults_to_unknown() {
        let details = parse_event_details(EVENT_PAGE).unwrap();

        assert_eq!(
            details.ticketing_information,
            vec![
                TicketOption {
                    vendor: "Ticketmaster".to_string(),
                    link: "https://www.songkick.com/tickets/1".to_string(),
                },
                TicketOption {
                    vendor: "Unknown Vendor".to_string(),
                    link: "https://www.songkick.com/tickets/2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_page_is_all_absent() {
        let details = parse_event_details("<html><body></body></html>").unwrap();
        assert_eq!(details, EventDetails::default());
    }

    #[test]
    fn test_location_requires_both_parts() {
        let html = r#"<div class="location"><p class="name"><a>The Echo</a></p></div>"#;
        let details = parse_event_details(html).unwrap();
        assert_eq!(details.location, None);
    }

    #[test]
    fn test_additional_details_labels_missing() {
        let html = r#"<div class="additional-details-container"><p>All ages welcome</p></div>"#;
        let details = parse_event_details(html).unwrap();
        assert_eq!(details.additional_details, AdditionalDetails::default());
    }

    #[test]
    fn test_doors_open_before_price() {
        let details = parse_additional_details("Doors open: 8pm Price: £20");
        assert_eq!(details.doors_open.as_deref(), Some("8pm"));
        assert_eq!(details.price.as_deref(), Some("£20"));
    }

    #[test]
    fn test_price_only() {
        let details = parse_additional_details("Price: Free");
        assert_eq!(details.price.as_deref(), Some("Free"));
        assert_eq!(details.doors_open, None);
    }

    #[test]
    fn test_empty_doors_open_value() {
        let details = parse_additional_details("Doors open:");
        assert_eq!(details.doors_open, None);
    }

    #[test]
    fn test_doors_open_value_wrapping_lines() {
        let html = "<div class=\"additional-details-container\"><p>Doors open: 7:00 PM,\n      show starts 8:00 PM</p></div>";
        let details = parse_event_details(html).unwrap();
        assert_eq!(
            details.additional_details.doors_open.as_deref(),
            Some("7:00 PM, show starts 8:00 PM")
        );
    }

    #[test]
    fn test_price_and_wrapped_doors_open() {
        let html = "<div class=\"additional-details-container\"><p>Price: $20</p><p>Doors open: 7pm\n (21+)</p></div>";
        let details = parse_event_details(html).unwrap();
        assert_eq!(details.additional_details.price.as_deref(), Some("$20"));
        assert_eq!(details.additional_details.doors_open.as_deref(), Some("7pm (21+)"));
    }
}
