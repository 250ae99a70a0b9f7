use super::*;

use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

const ACTIVE_MARK: &str = "aria-current=\"page\"";

/// Fresh assets directory holding one downloadable file.
fn assets_fixture() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "housing-showcase-assets-{}-{}",
        std::process::id(),
        DIR_SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(dir.join("data")).expect("create fixture dir");
    std::fs::write(dir.join("data/Housing.csv"), "price,area\n13300000,7420\n").expect("write fixture csv");
    dir
}

fn site_config() -> SiteConfig {
    SiteConfig { host: IpAddr::V4(Ipv4Addr::LOCALHOST), port: 0, assets_dir: assets_fixture() }
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test router");
    });
    format!("http://{addr}")
}

async fn spawn_site() -> String {
    spawn(app(&site_config()).expect("build site router")).await
}

/// The `<a ...>` tag carrying the active marker, if any.
fn active_link_tag(body: &str) -> Option<&str> {
    let mark = body.find(ACTIVE_MARK)?;
    let open = body[..mark].rfind("<a")?;
    let close = mark + body[mark..].find('>')?;
    Some(&body[open..=close])
}

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_site().await;
    let resp = reqwest::get(format!("{base}/healthz")).await.expect("healthz request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn serves_download_from_assets_dir() {
    let base = spawn_site().await;
    let resp = reqwest::get(format!("{base}/data/Housing.csv")).await.expect("asset request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.expect("asset body");
    assert!(body.starts_with("price,area"));
}

#[tokio::test]
async fn page_renders_with_its_nav_entry_active() {
    let base = spawn_site().await;
    let resp = reqwest::get(format!("{base}/about")).await.expect("page request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body = resp.text().await.expect("page body");
    assert!(body.contains("class=\"nav\""), "navigation bar missing");
    assert_eq!(body.matches(ACTIVE_MARK).count(), 1);
    let tag = active_link_tag(&body).expect("active link");
    assert!(tag.contains("href=\"/about\""), "wrong active link: {tag}");
}

#[tokio::test]
async fn unknown_path_renders_not_found_page_in_site_chrome() {
    let base = spawn_site().await;
    let resp = reqwest::get(format!("{base}/unknown")).await.expect("unknown path request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

    let body = resp.text().await.expect("not-found body");
    assert!(body.contains("class=\"nav\""), "navigation bar missing");
    assert!(body.contains("Page not found"));
    assert!(!body.contains(ACTIVE_MARK), "no nav entry should be active");
}

#[tokio::test]
async fn missing_asset_renders_not_found_page() {
    let base = spawn_site().await;
    let resp = reqwest::get(format!("{base}/code/missing.py")).await.expect("missing asset request");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body = resp.text().await.expect("not-found body");
    assert!(body.contains("Page not found"));
}
