//! Link extraction from raw results-page markup
//!
//! This module scans the fetched HTML for thumbnail links. It deliberately
//! does not use an HTML parser or regular expressions: the links sit in a
//! known token-delimited position, and a raw substring scan reproduces the
//! matched output exactly. The trade-off is fragility to markup changes,
//! which is a documented limitation of this approach.

mod scanner;

pub use scanner::extract_image_links;
