/// Builds the image-search results page URL for a search term
///
/// The `tbm=isch` parameter selects the image-search results mode. The
/// query is interpolated verbatim: characters that need URL-encoding are
/// the caller's responsibility.
///
/// # Example
///
/// ```
/// use thumbgrab::search::results_page_url;
///
/// let url = results_page_url("cat");
/// assert_eq!(url, "https://www.google.com/search?q=cat&tbm=isch");
/// ```
pub fn results_page_url(query: &str) -> String {
    format!("https://www.google.com/search?q={}&tbm=isch", query)
}
