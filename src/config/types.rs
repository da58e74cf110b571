use serde::Deserialize;

/// Desktop-browser User-Agent sent when fetching the results page. The
/// search service serves different markup (or denies the request) to
/// unrecognized clients.
pub const DEFAULT_SEARCH_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

/// Distinct User-Agent sent when fetching individual thumbnails.
pub const DEFAULT_IMAGE_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux i686) AppleWebKit/537.17 (KHTML, like Gecko) Chrome/24.0.1312.27 Safari/537.17";

/// Main configuration structure for thumbgrab
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub download: DownloadConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Download behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadConfig {
    /// Number of thumbnails to download; zero or negative means all the
    /// results page offers (practically capped near 20 by the page itself)
    #[serde(default = "default_num")]
    pub num: i64,

    /// Directory the image files are written into
    #[serde(default = "default_dir")]
    pub dir: String,
}

/// User agent strings for the two outbound request kinds
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Sent with the results-page request
    #[serde(default = "default_search_agent")]
    pub search: String,

    /// Sent with each thumbnail request
    #[serde(default = "default_image_agent")]
    pub image: String,
}

fn default_num() -> i64 {
    -1
}

fn default_dir() -> String {
    "images".to_string()
}

fn default_search_agent() -> String {
    DEFAULT_SEARCH_USER_AGENT.to_string()
}

fn default_image_agent() -> String {
    DEFAULT_IMAGE_USER_AGENT.to_string()
}

impl Default for DownloadConfig {
    fn default() -> Self {
        DownloadConfig {
            num: default_num(),
            dir: default_dir(),
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        UserAgentConfig {
            search: default_search_agent(),
            image: default_image_agent(),
        }
    }
}
