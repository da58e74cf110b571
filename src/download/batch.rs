//! Batch fetcher with per-item failure isolation

use crate::config::DownloadConfig;
use crate::download::filename::{extension_from_content_type, image_file_name, DEFAULT_EXTENSION};
use crate::FetchError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// A thumbnail that made it to disk
///
/// Created only on a successful fetch and never mutated afterwards. The
/// crate does not track the file once the caller has the record.
#[derive(Debug, Clone)]
pub struct DownloadedImage {
    /// The link the bytes came from
    pub link: String,

    /// Where the file was written
    pub path: PathBuf,

    /// Extension derived from the response Content-Type
    pub extension: String,
}

/// Downloads the first `options.num` links to `options.dir`
///
/// A non-positive `num` means every link is attempted. The target directory
/// is created (with parents) before the first attempt; that creation is
/// idempotent, and its failure aborts the call since no item can succeed
/// without it.
///
/// Each link is then attempted independently: the response body is streamed
/// to `{dir}/{query}_{index}.{ext}`, overwriting any existing file of that
/// name. A failing item is logged with its file name and skipped; the batch
/// carries on with the next link.
///
/// # Returns
///
/// The successfully written images, in attempt order. The length is at most
/// the number of links attempted.
pub async fn download_images(
    client: &Client,
    query: &str,
    links: &[String],
    options: &DownloadConfig,
) -> Result<Vec<DownloadedImage>, FetchError> {
    let attempted = truncate_to_requested(links, options.num);
    let dir = Path::new(&options.dir);

    fs::create_dir_all(dir).await?;

    let mut images = Vec::new();
    for (index, link) in attempted.iter().enumerate() {
        match fetch_image(client, query, index, link, dir).await {
            Ok(image) => {
                tracing::info!("Saved {}", image.path.display());
                images.push(image);
            }
            Err(error) => {
                tracing::warn!(
                    "Failed at image {}: {}",
                    image_file_name(query, index, DEFAULT_EXTENSION),
                    error
                );
            }
        }
    }

    Ok(images)
}

/// Applies the requested-count limit to the link sequence
fn truncate_to_requested(links: &[String], num: i64) -> &[String] {
    if num > 0 {
        &links[..links.len().min(num as usize)]
    } else {
        links
    }
}

/// Fetches a single thumbnail and streams it to disk
///
/// The extension comes from the response Content-Type, so the file name is
/// only known once headers have arrived. Any error here is caught by the
/// batch loop above.
async fn fetch_image(
    client: &Client,
    query: &str,
    index: usize,
    link: &str,
    dir: &Path,
) -> Result<DownloadedImage, FetchError> {
    let mut response = client
        .get(link)
        .send()
        .await
        .map_err(|source| FetchError::Http {
            url: link.to_string(),
            source,
        })?;

    let extension = extension_from_content_type(
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
    );

    let path = dir.join(image_file_name(query, index, &extension));

    let mut file = fs::File::create(&path).await?;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|source| FetchError::Http {
            url: link.to_string(),
            source,
        })?
    {
        file.write_all(&chunk).await?;
    }
    file.flush().await?;

    Ok(DownloadedImage {
        link: link.to_string(),
        path,
        extension,
    })
}
