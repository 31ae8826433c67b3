//! Tests for GET /extensions

use axum::http::StatusCode;
use serde_json::{json, Value};
use vsix_server::ExtensionRecord;

use crate::common::{body_bytes, create_test_app, get, VsixDir};

#[tokio::test]
async fn test_listing_filters_by_suffix_case_insensitively() {
    let fixture = VsixDir::with_files(&[
        ("a.vsix", b"a"),
        ("b.VSIX", b"b"),
        ("c.txt", b"c"),
    ]);
    let app = create_test_app(fixture.path());

    let response = get(app, "/extensions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let records: Vec<ExtensionRecord> =
        serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.contains(&ExtensionRecord {
        name: "a.vsix".to_string(),
        url: "/a.vsix".to_string(),
    }));
    assert!(records.contains(&ExtensionRecord {
        name: "b.VSIX".to_string(),
        url: "/b.VSIX".to_string(),
    }));
    assert!(!records.iter().any(|r| r.name == "c.txt"));
}

#[tokio::test]
async fn test_listing_json_shape() {
    let fixture = VsixDir::with_files(&[("my-plugin-1.0.0.vsix", b"x")]);
    let app = create_test_app(fixture.path());

    let response = get(app, "/extensions").await;
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(
        body,
        json!([{ "name": "my-plugin-1.0.0.vsix", "url": "/my-plugin-1.0.0.vsix" }])
    );
}

#[tokio::test]
async fn test_listing_is_sorted_by_name() {
    let fixture = VsixDir::with_files(&[
        ("zeta.vsix", b"z"),
        ("Alpha.vsix", b"A"),
        ("beta.vsix", b"b"),
    ]);
    let app = create_test_app(fixture.path());

    let records: Vec<ExtensionRecord> =
        serde_json::from_slice(&body_bytes(get(app, "/extensions").await).await).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha.vsix", "beta.vsix", "zeta.vsix"]);
}

#[tokio::test]
async fn test_listing_empty_directory() {
    let fixture = VsixDir::empty();
    let app = create_test_app(fixture.path());

    let response = get(app, "/extensions").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_listing_ignores_subdirectories() {
    let fixture = VsixDir::with_files(&[("top.vsix", b"t")]);
    std::fs::create_dir(fixture.path().join("nested.vsix")).unwrap();
    std::fs::create_dir(fixture.path().join("sub")).unwrap();
    std::fs::write(fixture.path().join("sub").join("deep.vsix"), b"d").unwrap();
    let app = create_test_app(fixture.path());

    let records: Vec<ExtensionRecord> =
        serde_json::from_slice(&body_bytes(get(app, "/extensions").await).await).unwrap();
    assert_eq!(records, vec![ExtensionRecord::new("top.vsix")]);
}

#[tokio::test]
async fn test_listing_missing_directory_returns_500() {
    let fixture = VsixDir::missing();
    let app = create_test_app(fixture.path());

    let response = get(app, "/extensions").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, json!({ "error": "VSIX directory not found" }));
}

#[tokio::test]
async fn test_listing_sees_files_added_later() {
    let fixture = VsixDir::empty();
    let app = create_test_app(fixture.path());

    let first: Vec<ExtensionRecord> =
        serde_json::from_slice(&body_bytes(get(app.clone(), "/extensions").await).await)
            .unwrap();
    assert!(first.is_empty());

    fixture.add_file("late.vsix", b"late");

    let second: Vec<ExtensionRecord> =
        serde_json::from_slice(&body_bytes(get(app, "/extensions").await).await).unwrap();
    assert_eq!(second, vec![ExtensionRecord::new("late.vsix")]);
}
