//! End-to-end integration tests for artifact resolution
//!
//! These tests exercise the complete flow across crates: a client build laid
//! out on disk -> configuration load -> artifact lookups -> live edits.

use mint_fs::{FsDocumentStore, MemoryDocumentStore};
use mint_sdk::{ConfigurationStore, Error, SdkOptions};
use mint_test_utils::TestBuild;
use pretty_assertions::assert_eq;
use serde_json::json;

/// Set up a multi-project client build with loose artifact files
fn setup_unbundled_build() -> TestBuild {
    let build = TestBuild::new();
    let mut config = TestBuild::unbundled_config("/src/");
    config["multiProject"] = json!(true);
    config["settings"] = json!({ "chain": "localhost" });
    build.write_config("/src/", &config);

    build.write_json("/src/projects/alpha.json", &json!({ "name": "alpha" }));
    build.write_json("/src/projects/alpha/token.json", &json!({ "address": "0x01" }));
    build.write_json("/src/projects/beta/token.json", &json!({ "address": "0x02" }));
    build.write_json("/src/static/alpha.json", &json!({ "background": "#000" }));
    build
}

#[test]
fn test_unbundled_build_end_to_end() {
    let build = setup_unbundled_build();
    let mut store = ConfigurationStore::new(build.store()).with_default_root("/src/");

    let config = store.load_with(&SdkOptions::default()).unwrap();
    assert!(config.multi_project);
    assert_eq!(config.setting("chain"), Some(&json!("localhost")));

    assert_eq!(store.project("alpha").unwrap(), json!({ "name": "alpha" }));
    assert_eq!(store.static_manifest("alpha").unwrap(), json!({ "background": "#000" }));
    assert_eq!(store.deployment("token", "alpha").unwrap(), json!({ "address": "0x01" }));
    assert_eq!(store.deployment("token", "beta").unwrap(), json!({ "address": "0x02" }));

    let err = store.deployment("token", "gamma").unwrap_err();
    assert!(matches!(err, Error::ArtifactRead { .. }), "got {err:?}");
    assert!(err.to_string().contains("token"));
}

#[test]
fn test_switching_build_from_unbundled_to_bundled_during_development() {
    let build = setup_unbundled_build();
    let mut store = ConfigurationStore::new(build.store());
    store.load("/src/").unwrap();
    assert_eq!(store.project("alpha").unwrap(), json!({ "name": "alpha" }));

    // The pipeline republishes the build as a bundle.
    let mut config = TestBuild::bundled_config("/src/");
    config["projectsManifestFilename"] = json!("projects");
    config["deploymentsManifestFilename"] = json!("deployments");
    build.write_config("/src/", &config);
    build.write_json(
        "/src/projects/projects.json",
        &json!({ "projects": { "alpha": { "name": "alpha", "bundled": true } } }),
    );
    build.write_json(
        "/src/projects/deployments.json",
        &json!({
            "deployments": { "alpha": { "token": { "address": "0x11" } } },
            "created": 1, "updated": 2
        }),
    );

    // Cached configuration still says unbundled until reloaded.
    assert_eq!(store.project("alpha").unwrap(), json!({ "name": "alpha" }));

    let reloaded = store.get(None, true).unwrap();
    assert!(reloaded.bundled);
    assert_eq!(
        store.project("alpha").unwrap(),
        json!({ "name": "alpha", "bundled": true })
    );
    assert_eq!(store.deployment("token", "alpha").unwrap(), json!({ "address": "0x11" }));
    assert_eq!(store.deployment_manifest().unwrap().updated, Some(2));

    let err = store.static_manifest("alpha").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }), "got {err:?}");
}

#[test]
fn test_separate_roots_are_cached_independently() {
    let build = TestBuild::new();
    build.write_config("/a/", &TestBuild::unbundled_config("/a/"));
    build.write_json("/a/projects/shared.json", &json!({ "from": "a" }));
    build.write_json("/b/projects/shared.json", &json!({ "from": "b" }));

    let mut store = ConfigurationStore::new(build.store());
    let a = store.load("/a/").unwrap();
    // No config under /b/: folder conventions apply.
    let b = store.get(Some("/b/"), false).unwrap();

    assert_eq!(a.static_manifest_folder, "/a/static/");
    assert_eq!(b.static_manifest_folder, "/b/projects/");

    // Lookups follow the most recently used root.
    assert_eq!(store.project("shared").unwrap(), json!({ "from": "b" }));
    store.get(Some("/a/"), false).unwrap();
    assert_eq!(store.project("shared").unwrap(), json!({ "from": "a" }));
}

#[test]
fn test_in_memory_bundle_serves_the_same_lookups() {
    let mut documents = MemoryDocumentStore::new();
    documents
        .insert_json("/infinitymint.build.json", &TestBuild::bundled_config("/"))
        .unwrap();
    documents
        .insert_json(
            "/projects/manifest.json",
            &json!({
                "projects": { "alpha": { "name": "alpha" } },
                "staticManifests": { "alpha": { "background": "#fff" } },
                "deployments": { "alpha": { "token": { "address": "0x21" } } }
            }),
        )
        .unwrap();

    let mut store = ConfigurationStore::new(documents);
    store.load("/").unwrap();

    assert_eq!(store.project("alpha").unwrap(), json!({ "name": "alpha" }));
    assert_eq!(store.static_manifest("alpha").unwrap(), json!({ "background": "#fff" }));
    assert_eq!(store.deployment("token", "alpha").unwrap(), json!({ "address": "0x21" }));
    assert_eq!(store.documents().read_count("/projects/manifest.json"), 3);
}

#[test]
fn test_store_over_boxed_document_store() {
    let build = setup_unbundled_build();
    let documents: Box<FsDocumentStore> = Box::new(build.store());
    let mut store = ConfigurationStore::new(documents);
    store.load("/src/").unwrap();

    assert_eq!(store.project("alpha").unwrap(), json!({ "name": "alpha" }));
    assert!(store.documents().is_cached(&"/src/projects/alpha.json".into()));
}
