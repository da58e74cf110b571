//! File name and extension derivation for downloaded thumbnails

/// Extension used when the response carries no usable Content-Type.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Derives a file extension from a Content-Type header value
///
/// Takes the subtype portion of the media type (`image/png` becomes `png`),
/// dropping any parameters. An absent or malformed header falls back to
/// [`DEFAULT_EXTENSION`].
///
/// # Example
///
/// ```
/// use thumbgrab::download::extension_from_content_type;
///
/// assert_eq!(extension_from_content_type(Some("image/png")), "png");
/// assert_eq!(extension_from_content_type(None), "jpg");
/// ```
pub fn extension_from_content_type(content_type: Option<&str>) -> String {
    let subtype = content_type
        .and_then(|value| value.split('/').nth(1))
        .map(|subtype| subtype.split(';').next().unwrap_or("").trim())
        .filter(|subtype| !subtype.is_empty());

    match subtype {
        Some(subtype) => subtype.to_string(),
        None => DEFAULT_EXTENSION.to_string(),
    }
}

/// Composes the file name for the thumbnail at `index` within a batch
///
/// The name is `{query}_{index}.{extension}` with path separators replaced,
/// so a query containing `/` or `\` cannot escape into a subdirectory.
/// Embedding the index keeps names unique within one invocation.
pub fn image_file_name(query: &str, index: usize, extension: &str) -> String {
    format!("{}_{}.{}", query, index, extension)
        .replace('/', "_")
        .replace('\\', "_")
}
