//! Token scan over the results-page HTML

/// Marker that ends the page preamble. The preamble contains `src="`
/// attributes that are not thumbnails, so everything before the first
/// occurrence of this marker is skipped.
const OFFSET_TOKEN: &str = "/url?q=";

/// Opens the attribute holding a thumbnail link.
const START_TOKEN: &str = "src=\"";

/// Terminates a thumbnail link inside the attribute value.
const END_TOKEN: &str = "&amp;s";

/// Extracts thumbnail links from the raw results-page HTML
///
/// The scan walks the text once:
/// 1. Skip everything before the first offset marker. No marker means no
///    results section, and the scan returns an empty sequence.
/// 2. Find the next start token; stop when there is none left.
/// 3. Find the next end token after it; the link is the substring strictly
///    between the two tokens. A start token with no end token after it is
///    discarded rather than emitted as a truncated entry.
/// 4. Resume scanning just past the first character of the matched end
///    token.
///
/// Links come back in document order. There is no deduplication and no
/// check that an extracted substring is a well-formed URL.
///
/// # Example
///
/// ```
/// use thumbgrab::extract::extract_image_links;
///
/// let html = r#"<head></head>/url?q=x<img src="https://a.example/one&amp;s">"#;
/// assert_eq!(extract_image_links(html), vec!["https://a.example/one"]);
/// ```
pub fn extract_image_links(html: &str) -> Vec<String> {
    let offset = match html.find(OFFSET_TOKEN) {
        Some(index) => index,
        None => return Vec::new(),
    };

    let mut remaining = &html[offset..];
    let mut links = Vec::new();

    loop {
        let start = match remaining.find(START_TOKEN) {
            Some(index) => index + START_TOKEN.len(),
            None => break,
        };

        let end = match remaining[start..].find(END_TOKEN) {
            Some(index) => start + index,
            None => break,
        };

        links.push(remaining[start..end].to_string());

        // One past the end token's first character, so back-to-back
        // matches are not skipped over.
        remaining = &remaining[end + 1..];
    }

    links
}
