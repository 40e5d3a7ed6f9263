//! Behaviour of the document stores against real and in-memory backends

use mint_fs::{DocumentStore, Error, FsDocumentStore, MemoryDocumentStore, NormalizedPath};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct Project {
    name: String,
}

#[rstest]
#[case("/p/", "foo.json", "/p/foo.json")]
#[case("/p", "foo.json", "/p/foo.json")]
#[case("/p//", "/foo.json", "/p/foo.json")]
#[case("src\\projects", "foo.json", "src/projects/foo.json")]
#[case("/", "foo.json", "/foo.json")]
fn join_never_doubles_separators(#[case] base: &str, #[case] segment: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(base).join(segment).as_str(), expected);
}

#[test]
fn fs_store_reads_typed_json() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("p")).unwrap();
    fs::write(temp.path().join("p/foo.json"), r#"{"name": "Foo"}"#).unwrap();

    let mut store = FsDocumentStore::new(temp.path());
    let project: Project = store.read_json(&NormalizedPath::new("/p/foo.json")).unwrap();

    assert_eq!(project, Project { name: "Foo".into() });
}

#[test]
fn fs_store_reports_malformed_json_with_path() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.json"), "{").unwrap();

    let mut store = FsDocumentStore::new(temp.path());
    let err = store
        .read_json::<Project>(&NormalizedPath::new("/broken.json"))
        .unwrap_err();

    match err {
        Error::Parse { path, .. } => assert_eq!(path, "/broken.json"),
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn fs_store_directory_read_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("dir.json")).unwrap();

    let mut store = FsDocumentStore::new(temp.path());
    let err = store.read(&NormalizedPath::new("/dir.json")).unwrap_err();

    assert!(!err.is_not_found());
}

#[test]
fn fs_store_clear_drops_every_entry() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.json"), "1").unwrap();
    fs::write(temp.path().join("b.json"), "2").unwrap();

    let mut store = FsDocumentStore::new(temp.path());
    let a = NormalizedPath::new("/a.json");
    let b = NormalizedPath::new("/b.json");
    store.read(&a).unwrap();
    store.read(&b).unwrap();

    store.clear();

    assert!(!store.is_cached(&a));
    assert!(!store.is_cached(&b));
}

#[test]
fn boxed_store_forwards_reads_and_invalidation() {
    let mut memory = MemoryDocumentStore::new();
    memory.insert("/a.json", r#"{"name": "A"}"#);

    let mut store: Box<dyn DocumentStore> = Box::new(memory);
    let path = NormalizedPath::new("/a.json");

    assert_eq!(&*store.read(&path).unwrap(), br#"{"name": "A"}"#);
    assert!(!store.invalidate(&path));
}

#[test]
fn memory_store_remove_makes_document_missing() {
    let mut store = MemoryDocumentStore::new();
    store.insert("/a.json", "{}");
    let path = NormalizedPath::new("/a.json");

    assert!(store.remove(&path));
    assert!(store.read(&path).unwrap_err().is_not_found());
    assert_eq!(store.read_count("/a.json"), 1);

    store.clear_log();
    assert!(store.reads().is_empty());
}
