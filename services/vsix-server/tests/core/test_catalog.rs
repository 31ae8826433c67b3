//! Catalog integration tests against real directories

use vsix_server::core::catalog::ExtensionCatalog;
use vsix_server::ExtensionRecord;

use crate::common::VsixDir;

#[tokio::test]
async fn test_catalog_list_matches_spec_example() {
    let fixture = VsixDir::with_files(&[
        ("a.vsix", b"a"),
        ("b.VSIX", b"b"),
        ("c.txt", b"c"),
    ]);
    let catalog = ExtensionCatalog::new(fixture.path());

    let records = catalog.list().await.unwrap();
    assert_eq!(
        records,
        vec![ExtensionRecord::new("a.vsix"), ExtensionRecord::new("b.VSIX")]
    );
    assert_eq!(records[1].url, "/b.VSIX");
}

#[tokio::test]
async fn test_catalog_list_missing_directory() {
    let fixture = VsixDir::missing();
    let catalog = ExtensionCatalog::new(fixture.path());

    let err = catalog.list().await.unwrap_err();
    assert!(err.is_directory_missing());
    assert_eq!(err.to_string(), "VSIX directory not found");
}

#[tokio::test]
async fn test_catalog_list_when_path_is_a_file() {
    let fixture = VsixDir::empty();
    let file = fixture.add_outside_file("not_a_dir", b"x");
    let catalog = ExtensionCatalog::new(file);

    assert!(catalog.list().await.unwrap_err().is_directory_missing());
}

#[tokio::test]
async fn test_catalog_read_rejects_traversal() {
    let fixture = VsixDir::empty();
    fixture.add_outside_file("outside.vsix", b"secret");
    let catalog = ExtensionCatalog::new(fixture.path());

    assert!(catalog.read("../outside.vsix").await.unwrap_err().is_not_found());
    assert!(catalog
        .read("./../outside.vsix")
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn test_catalog_read_allows_dot_prefixed_path_inside() {
    let fixture = VsixDir::with_files(&[("inside.vsix", b"ok")]);
    let catalog = ExtensionCatalog::new(fixture.path());

    // Normalizes back into the directory itself
    assert_eq!(catalog.read("./inside.vsix").await.unwrap(), b"ok");
}

#[tokio::test]
async fn test_catalog_relative_directory_path() {
    let fixture = VsixDir::with_files(&[("rel.vsix", b"rel")]);
    let catalog = ExtensionCatalog::new(fixture.path().join("."));

    assert_eq!(catalog.read("rel.vsix").await.unwrap(), b"rel");
    assert_eq!(catalog.list().await.unwrap().len(), 1);
}
