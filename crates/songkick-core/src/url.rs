//! URL helper functions for songkick.com
//!
//! Builders for the endpoints the integration calls, plus normalisation of
//! the relative and protocol-relative links found in scraped pages.

/// Public site origin; scraped links are always made absolute against it
pub const SITE_ORIGIN: &str = "https://www.songkick.com";

/// Builds the location search URL for a given query
///
/// The query is percent-encoded with spaces sent as `+`, the way the site's
/// own search form submits it.
///
/// # Example
/// ```
/// use songkick_core::url::build_search_url;
/// let url = build_search_url("https://www.songkick.com", "new york");
/// assert_eq!(
///     url,
///     "https://www.songkick.com/search?utf8=%E2%9C%93&type=locations&query=new+york&commit=Search"
/// );
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    let encoded = urlencoding::encode(query).replace("%20", "+");
    format!(
        "{}/search?utf8=%E2%9C%93&type=locations&query={}&commit=Search",
        base_url, encoded
    )
}

/// Builds the tracked-artists calendar URL
pub fn build_calendar_url(base_url: &str) -> String {
    format!("{}/calendar?filter=tracked_artist", base_url)
}

/// Builds the trackings endpoint, switching to `/untrack` when requested
///
/// # Example
/// ```
/// use songkick_core::url::build_trackings_url;
/// assert_eq!(build_trackings_url("https://www.songkick.com", false), "https://www.songkick.com/trackings");
/// assert_eq!(build_trackings_url("https://www.songkick.com", true), "https://www.songkick.com/trackings/untrack");
/// ```
pub fn build_trackings_url(base_url: &str, untrack: bool) -> String {
    if untrack {
        format!("{}/trackings/untrack", base_url)
    } else {
        format!("{}/trackings", base_url)
    }
}

/// Normalises a scraped `href`/`src` into an absolute URL
///
/// - `//host/path` gets an `https:` scheme (the site serves images this way)
/// - `/path` is joined onto [`SITE_ORIGIN`]
/// - already absolute URLs are kept
///
/// Returns `None` for blank input.
pub fn absolute_url(href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    if href.starts_with("https://") || href.starts_with("http://") {
        return Some(href.to_string());
    }

    if href.starts_with("//") {
        return Some(format!("https:{}", href));
    }

    if href.starts_with('/') {
        Some(format!("{}{}", SITE_ORIGIN, href))
    } else {
        Some(format!("{}/{}", SITE_ORIGIN, href))
    }
}

/// Swaps the medium avatar variant for the huge one in an image URL
pub fn upsize_avatar(src: &str) -> String {
    src.replace("medium_avatar", "huge_avatar")
}
