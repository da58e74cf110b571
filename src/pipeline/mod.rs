//! Pipeline orchestration
//!
//! Composes the four stages — URL building, page fetching, link extraction,
//! batch downloading — behind the two public entry points. Failures in the
//! first three stages abort the whole call; only per-item failures inside
//! the batch stage are isolated.

use crate::config::{DownloadConfig, UserAgentConfig};
use crate::download::{download_images, DownloadedImage};
use crate::extract::extract_image_links;
use crate::search::{build_image_client, build_search_client, fetch_results_page, results_page_url};
use crate::{FetchError, Result};
use reqwest::Client;

/// Runs the search-and-download pipeline
///
/// Holds the two HTTP clients so repeated calls reuse connections. Every
/// call is otherwise stateless: requests are issued strictly one at a time,
/// and the only side effect is the files written to the target directory.
/// Two concurrent calls with the same (query, dir) pair would overwrite
/// each other's files; callers wanting that must serialize.
///
/// # Example
///
/// ```no_run
/// use thumbgrab::{DownloadConfig, Downloader};
///
/// # async fn run() -> thumbgrab::Result<()> {
/// let downloader = Downloader::new()?;
/// let images = downloader.download("cat", &DownloadConfig::default()).await?;
/// for image in &images {
///     println!("{}", image.path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct Downloader {
    search_client: Client,
    image_client: Client,
}

impl Downloader {
    /// Creates a downloader with the default browser user agents
    pub fn new() -> Result<Self> {
        Self::with_user_agents(&UserAgentConfig::default())
    }

    /// Creates a downloader presenting the given user agent strings
    pub fn with_user_agents(agents: &UserAgentConfig) -> Result<Self> {
        Ok(Downloader {
            search_client: build_search_client(&agents.search)?,
            image_client: build_image_client(&agents.image)?,
        })
    }

    /// Downloads thumbnails for `query` according to `options`
    ///
    /// Fetches the results page, extracts the thumbnail links, and downloads
    /// the first `options.num` of them (all of them when `num <= 0`) into
    /// `options.dir`. An unreachable results page or a failed directory
    /// creation aborts the call; a single bad thumbnail link does not.
    ///
    /// # Returns
    ///
    /// The successfully written images in attempt order, possibly empty.
    pub async fn download(
        &self,
        query: &str,
        options: &DownloadConfig,
    ) -> Result<Vec<DownloadedImage>> {
        self.download_from(&results_page_url(query), query, options)
            .await
    }

    /// Runs the pipeline against an explicit results-page URL
    ///
    /// [`download`](Self::download) derives the URL from the query; this
    /// variant takes it directly, for callers that already hold one (or
    /// point at a stub server).
    pub async fn download_from(
        &self,
        results_url: &str,
        query: &str,
        options: &DownloadConfig,
    ) -> Result<Vec<DownloadedImage>> {
        tracing::info!("Fetching results page for query: {}", query);

        let html = fetch_results_page(&self.search_client, results_url).await?;

        let links = extract_image_links(&html);
        tracing::info!("Extracted {} candidate links", links.len());

        download_images(&self.image_client, query, &links, options).await
    }

    /// Downloads a single thumbnail for `query` into the default directory
    ///
    /// Shorthand for [`download`](Self::download) with a count of one. If
    /// nothing could be downloaded — no links on the page, or the one
    /// attempted link failed — this returns [`FetchError::NoResults`]
    /// rather than an empty list.
    pub async fn download_one(&self, query: &str) -> Result<DownloadedImage> {
        self.download_one_from(&results_page_url(query), query).await
    }

    /// [`download_one`](Self::download_one) against an explicit results-page URL
    pub async fn download_one_from(
        &self,
        results_url: &str,
        query: &str,
    ) -> Result<DownloadedImage> {
        let options = DownloadConfig {
            num: 1,
            ..DownloadConfig::default()
        };

        let mut images = self.download_from(results_url, query, &options).await?;
        if images.is_empty() {
            return Err(FetchError::NoResults {
                query: query.to_string(),
            });
        }
        Ok(images.remove(0))
    }
}
