//! Integration tests for the download pipeline
//!
//! These tests use wiremock to stand in for both the search results page
//! and the thumbnail hosts, and exercise the pipeline end-to-end.

use tempfile::TempDir;
use thumbgrab::config::DownloadConfig;
use thumbgrab::{Downloader, FetchError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds results-page HTML: a preamble, the offset marker, then one
/// token-delimited entry per link
fn results_page(links: &[String]) -> String {
    let mut html = String::from("<html><head>preamble</head><body>/url?q=first-hit");
    for link in links {
        html.push_str(&format!(r#"<img class="t" src="{}&amp;s" alt="">"#, link));
    }
    html.push_str("</body></html>");
    html
}

/// Mounts the results page at /search and returns its full URL
async fn mount_results_page(server: &MockServer, links: &[String]) -> String {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(links)))
        .mount(server)
        .await;
    format!("{}/search", server.uri())
}

/// Mounts a PNG thumbnail at /img/{index}
async fn mount_png(server: &MockServer, index: usize, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(format!("/img/{}", index)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body.to_vec())
                .insert_header("content-type", "image/png"),
        )
        .mount(server)
        .await;
}

fn image_links(server: &MockServer, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}/img/{}", server.uri(), i))
        .collect()
}

fn options(num: i64, dir: &TempDir) -> DownloadConfig {
    DownloadConfig {
        num,
        dir: dir.path().to_string_lossy().into_owned(),
    }
}

#[tokio::test]
async fn test_end_to_end_download() {
    let server = MockServer::start().await;
    let links = image_links(&server, 3);
    let search_url = mount_results_page(&server, &links).await;

    for i in 0..3 {
        mount_png(&server, i, format!("png-bytes-{}", i).as_bytes()).await;
    }

    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();
    let images = downloader
        .download_from(&search_url, "cat", &options(-1, &dir))
        .await
        .expect("download failed");

    assert_eq!(images.len(), 3);
    for (i, image) in images.iter().enumerate() {
        assert_eq!(image.extension, "png");
        assert_eq!(image.link, links[i]);
        assert_eq!(image.path, dir.path().join(format!("cat_{}.png", i)));

        let bytes = std::fs::read(&image.path).expect("image file missing");
        assert_eq!(bytes, format!("png-bytes-{}", i).as_bytes());
    }
}

#[tokio::test]
async fn test_positive_num_limits_attempts() {
    let server = MockServer::start().await;
    let links = image_links(&server, 5);
    let search_url = mount_results_page(&server, &links).await;

    mount_png(&server, 0, b"a").await;
    mount_png(&server, 1, b"b").await;

    // Links past the requested count must never be fetched
    for i in 2..5 {
        Mock::given(method("GET"))
            .and(path(format!("/img/{}", i)))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();
    let images = downloader
        .download_from(&search_url, "cat", &options(2, &dir))
        .await
        .unwrap();

    assert_eq!(images.len(), 2);
}

#[tokio::test]
async fn test_non_positive_num_attempts_every_link() {
    let server = MockServer::start().await;
    let links = image_links(&server, 4);
    let search_url = mount_results_page(&server, &links).await;

    for i in 0..4 {
        Mock::given(method("GET"))
            .and(path(format!("/img/{}", i)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"x".to_vec())
                    .insert_header("content-type", "image/png"),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();
    let images = downloader
        .download_from(&search_url, "cat", &options(-1, &dir))
        .await
        .unwrap();

    assert_eq!(images.len(), 4);
    // Wiremock verifies the expect(1) counts when the server drops
}

#[tokio::test]
async fn test_failed_link_is_skipped() {
    let server = MockServer::start().await;

    // Middle link points nowhere; the other two are fine
    let links = vec![
        format!("{}/img/0", server.uri()),
        "http://127.0.0.1:1/unreachable".to_string(),
        format!("{}/img/2", server.uri()),
    ];
    let search_url = mount_results_page(&server, &links).await;

    mount_png(&server, 0, b"first").await;
    mount_png(&server, 2, b"third").await;

    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();
    let images = downloader
        .download_from(&search_url, "cat", &options(-1, &dir))
        .await
        .unwrap();

    // The failing item is absent and did not stop the one after it
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].path, dir.path().join("cat_0.png"));
    assert_eq!(images[1].path, dir.path().join("cat_2.png"));
    assert!(!dir.path().join("cat_1.png").exists());
    assert!(!dir.path().join("cat_1.jpg").exists());
}

#[tokio::test]
async fn test_repeated_calls_overwrite() {
    let server = MockServer::start().await;
    let links = image_links(&server, 2);
    let search_url = mount_results_page(&server, &links).await;

    mount_png(&server, 0, b"a").await;
    mount_png(&server, 1, b"b").await;

    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();
    let opts = options(-1, &dir);

    downloader
        .download_from(&search_url, "cat", &opts)
        .await
        .unwrap();
    downloader
        .download_from(&search_url, "cat", &opts)
        .await
        .unwrap();

    // Identical calls overwrite; the directory does not accumulate files
    let file_count = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(file_count, 2);
}

#[tokio::test]
async fn test_missing_content_type_defaults_to_jpg() {
    let server = MockServer::start().await;
    let links = image_links(&server, 1);
    let search_url = mount_results_page(&server, &links).await;

    // No content-type header on the response
    Mock::given(method("GET"))
        .and(path("/img/0"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"headerless".to_vec()))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();
    let images = downloader
        .download_from(&search_url, "cat", &options(-1, &dir))
        .await
        .unwrap();

    assert_eq!(images.len(), 1);
    assert_eq!(images[0].extension, "jpg");
    assert_eq!(images[0].path, dir.path().join("cat_0.jpg"));
}

#[tokio::test]
async fn test_download_one_returns_single_record() {
    let server = MockServer::start().await;
    let links = image_links(&server, 1);
    let search_url = mount_results_page(&server, &links).await;
    mount_png(&server, 0, b"dog-bytes").await;

    let downloader = Downloader::new().unwrap();
    let image = downloader
        .download_one_from(&search_url, "dog")
        .await
        .expect("download_one failed");

    // A single record, written to the default directory
    assert_eq!(image.path, std::path::Path::new("images").join("dog_0.png"));
    assert!(image.path.exists());

    let _ = std::fs::remove_file(&image.path);
}

#[tokio::test]
async fn test_download_one_with_no_results_is_typed_error() {
    let server = MockServer::start().await;

    // A page with no offset marker yields zero links
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nothing here</html>"))
        .mount(&server)
        .await;
    let search_url = format!("{}/search", server.uri());

    let downloader = Downloader::new().unwrap();
    let result = downloader.download_one_from(&search_url, "dog").await;

    match result {
        Err(FetchError::NoResults { query }) => assert_eq!(query, "dog"),
        other => panic!("expected NoResults, got {:?}", other.map(|i| i.path)),
    }
}

#[tokio::test]
async fn test_unreachable_results_page_aborts() {
    let dir = TempDir::new().unwrap();
    let downloader = Downloader::new().unwrap();

    let result = downloader
        .download_from("http://127.0.0.1:1/search", "cat", &options(-1, &dir))
        .await;

    assert!(matches!(result, Err(FetchError::Http { .. })));
    // Nothing was written
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
