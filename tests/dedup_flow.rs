//! End-to-end session flows against a file-backed store.

use std::io::Cursor;

use dedup::session;
use dedup::store::Store;
use tempfile::TempDir;

fn run_session(store: &Store, script: &str) -> String {
    let mut output = Vec::new();
    session::run(store, Cursor::new(script), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_flow_insert_duplicate_invalid_show() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(&dir.path().join("entries.db")).unwrap();
    store.initialize(false).unwrap();

    let out = run_session(
        &store,
        "Hello World\n  hello   world  \n   \nshow\nexit\n",
    );

    // The three outcome categories are distinguishable in the output
    assert!(out.contains("✅ Inserted: Hello World"));
    assert!(out.contains("❌ Duplicate ignored:"));
    assert!(out.contains("⚠️ Ignored invalid input"));

    let entries = store.list_all().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].value, "Hello World");
    assert_eq!(entries[0].normalized, "hello world");
}

#[test]
fn test_entries_accumulate_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("entries.db");

    {
        let store = Store::open(&path).unwrap();
        store.initialize(false).unwrap();
        run_session(&store, "alpha\nexit\n");
    }

    let store = Store::open(&path).unwrap();
    store.initialize(false).unwrap();
    let out = run_session(&store, "beta\nALPHA\nshow\nexit\n");

    assert!(out.contains("✅ Inserted: beta"));
    // Case variant of the first session's entry is still a duplicate
    assert!(out.contains("❌ Duplicate ignored: ALPHA"));
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn test_reset_command_clears_regardless_of_prior_contents() {
    let dir = TempDir::new().unwrap();
    let store = Store::open(&dir.path().join("entries.db")).unwrap();
    store.initialize(false).unwrap();

    let out = run_session(&store, "one\ntwo\nthree\nreset\nshow\nexit\n");

    assert!(out.contains("🔄 Table dropped and recreated."));
    assert!(out.contains("📂 Store is empty."));
    assert_eq!(store.count().unwrap(), 0);

    // The store remains usable after the reset
    let out = run_session(&store, "one\nexit\n");
    assert!(out.contains("✅ Inserted: one"));
    assert_eq!(store.list_all().unwrap()[0].id, 1);
}
