//! Integration tests for `kbump bump` and `kbump check`
//!
//! Runs the compiled binary against a wiremock feed server and a temporary
//! kustomization file.

use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KUSTOMIZATION: &str = r#"apiVersion: kustomize.config.k8s.io/v1beta1
kind: Kustomization
images:
- name: nginx
  newTag: 1.25-alpine
- name: redis
"#;

const NGINX_FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>library/nginx:1.27-alpine</title><published>2024-06-02T10:00:00Z</published></entry>
  <entry><title>library/nginx:1.27-perl</title><published>2024-06-02T10:00:00Z</published></entry>
  <entry><title>library/nginx:mainline</title><published>2024-06-02T10:00:00Z</published></entry>
</feed>"#;

const REDIS_FEED: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom">
  <entry><title>library/redis:latest</title><published>2024-06-03T10:00:00Z</published></entry>
</feed>"#;

async fn start_feed_server() -> MockServer {
    let server = MockServer::start().await;
    for (repository, body) in [("library/nginx", NGINX_FEED), ("library/redis", REDIS_FEED)] {
        Mock::given(method("GET"))
            .and(path(format!("/{}.atom", repository)))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }
    server
}

fn write_manifest(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("kustomization.yaml");
    std::fs::write(&path, KUSTOMIZATION).unwrap();
    path
}

async fn kbump(args: &[&str], manifest: &Path, feed_url: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kbump"))
        .args(args)
        .arg("--file")
        .arg(manifest)
        .arg("--feed-url")
        .arg(feed_url)
        .env_remove("KBUMP_CONFIG")
        .env_remove("KBUMP_FILEPATH")
        .env_remove("KBUMP_FORBIDDEN_WORDS")
        .env_remove("KBUMP_NODIGITS")
        .env_remove("KBUMP_FEED_URL")
        .env("NO_COLOR", "1")
        .output()
        .await
        .expect("failed to run kbump")
}

#[tokio::test]
async fn test_bump_rewrites_manifest() {
    let server = start_feed_server().await;
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = kbump(&["bump"], &manifest, &server.uri()).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Bumped nginx from 1.25-alpine to 1.27-alpine"), "{}", stdout);
    assert!(stdout.contains("No new image found for redis"), "{}", stdout);

    let written = std::fs::read_to_string(&manifest).unwrap();
    assert!(written.contains("newTag: 1.27-alpine"), "{}", written);
    assert!(written.contains("newTag: latest"), "{}", written);
    assert!(written.contains("kind: Kustomization"));
}

#[tokio::test]
async fn test_dry_run_leaves_manifest_alone() {
    let server = start_feed_server().await;
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = kbump(&["bump", "--dry-run"], &manifest, &server.uri()).await;

    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&manifest).unwrap(), KUSTOMIZATION);
}

#[tokio::test]
async fn test_check_fails_when_bumps_are_pending() {
    let server = start_feed_server().await;
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = kbump(&["check"], &manifest, &server.uri()).await;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("can be bumped"));

    let output = kbump(&["bump"], &manifest, &server.uri()).await;
    assert!(output.status.success());

    let output = kbump(&["check"], &manifest, &server.uri()).await;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[tokio::test]
async fn test_feed_error_exits_non_zero() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(&dir);

    let output = kbump(&["bump"], &manifest, &server.uri()).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("library/nginx"));
    assert_eq!(std::fs::read_to_string(&manifest).unwrap(), KUSTOMIZATION);
}

#[tokio::test]
async fn test_missing_manifest_exits_non_zero() {
    let server = start_feed_server().await;
    let dir = TempDir::new().unwrap();

    let output = kbump(&["bump"], &dir.path().join("nope.yaml"), &server.uri()).await;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read manifest"));
}
