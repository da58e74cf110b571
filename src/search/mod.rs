//! Search module for reaching the image-search results page
//!
//! This module contains:
//! - Building the results-page URL for a query
//! - Building HTTP clients with the fixed browser user agents
//! - Fetching the results page body as text

mod fetcher;
mod query;

pub use fetcher::{build_image_client, build_search_client, fetch_results_page};
pub use query::results_page_url;
