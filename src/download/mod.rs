//! Batch image downloading
//!
//! This module takes the extracted link sequence and turns it into files on
//! disk. Each link is attempted independently: one bad link is logged and
//! skipped, never aborting the rest of the batch.

mod batch;
mod filename;

pub use batch::{download_images, DownloadedImage};
pub use filename::{extension_from_content_type, image_file_name, DEFAULT_EXTENSION};
