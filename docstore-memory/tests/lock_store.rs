use std::collections::HashSet;

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreError,
    map::CreateOutcome,
};
use docstore_memory::DocumentStore;
use futures::future::join_all;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::test]
async fn fresh_store_is_empty() {
    init_logging();
    let store = DocumentStore::builder()
        .with_capacity(16)
        .build()
        .await
        .unwrap();

    assert!(!store.exists("nope").await.unwrap());
    assert_eq!(store.read("nope").await.unwrap(), None);
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_read_update_delete() {
    init_logging();
    let store = DocumentStore::new();

    assert!(store.create(Document::new("a", "x")).await.unwrap());
    assert_eq!(store.read("a").await.unwrap(), Some(Document::new("a", "x")));

    assert!(store.update(Document::new("a", "y")).await.unwrap());
    assert_eq!(store.read("a").await.unwrap(), Some(Document::new("a", "y")));

    assert!(store.delete("a").await.unwrap());
    assert!(!store.exists("a").await.unwrap());
    assert!(store.delete("a").await.unwrap());
}

#[tokio::test]
async fn second_create_overwrites() {
    let store = DocumentStore::new();
    store.create(Document::new("a", "x")).await.unwrap();
    store.create(Document::new("a", "y")).await.unwrap();

    assert_eq!(store.read("a").await.unwrap().unwrap().data, "y");
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn update_on_missing_id_leaves_store_unchanged() {
    let store = DocumentStore::new();
    store.create(Document::new("b", "x")).await.unwrap();
    let before = store.list().await.unwrap();

    assert!(!store.update(Document::new("a", "y")).await.unwrap());
    assert_eq!(store.list().await.unwrap(), before);
}

#[tokio::test]
async fn delete_of_absent_id_is_a_no_op() {
    let store = DocumentStore::new();
    store.create(Document::new("b", "x")).await.unwrap();

    assert!(store.delete("a").await.unwrap());
    assert_eq!(store.list().await.unwrap(), vec![Document::new("b", "x")]);
}

#[tokio::test]
async fn list_returns_every_created_document() {
    let store = DocumentStore::new();
    for i in 0..25 {
        store.create(Document::new(format!("doc-{i}"), "x")).await.unwrap();
    }

    let ids: HashSet<String> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|doc| doc.id)
        .collect();
    assert_eq!(ids.len(), 25);
    assert!(ids.contains("doc-0") && ids.contains("doc-24"));
}

#[tokio::test]
async fn empty_id_is_rejected() {
    let store = DocumentStore::new();

    let err = store.create(Document::new("", "x")).await.unwrap_err();
    assert!(matches!(err, DocumentStoreError::InvalidDocument(_)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn empty_id_lookups_find_nothing() {
    init_logging();
    let store = DocumentStore::new();
    store.create(Document::new("a", "x")).await.unwrap();

    assert!(!store.exists("").await.unwrap());
    assert_eq!(store.read("").await.unwrap(), None);
    assert!(store.delete("").await.unwrap());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn create_if_absent_reports_the_existing_document() {
    let store = DocumentStore::new();

    let first = store.create_if_absent(Document::new("a", "x")).await.unwrap();
    let second = store.create_if_absent(Document::new("a", "y")).await.unwrap();

    assert_eq!(first, CreateOutcome::Inserted);
    assert_eq!(second, CreateOutcome::Existing(Document::new("a", "x")));
    assert_eq!(store.read("a").await.unwrap().unwrap().data, "x");
}

#[tokio::test]
async fn clones_share_the_same_map() {
    let store = DocumentStore::new();
    let other = store.clone();
    store.create(Document::new("a", "x")).await.unwrap();

    assert!(other.exists("a").await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_updates_never_tear() {
    init_logging();
    let store = DocumentStore::new();
    store.create(Document::new("a", "initial")).await.unwrap();

    let payloads: Vec<String> = (0..64).map(|i| format!("payload-{i:03}-{}", "z".repeat(i))).collect();
    let tasks = payloads.iter().cloned().map(|payload| {
        let store = store.clone();
        tokio::spawn(async move { store.update(Document::new("a", payload)).await })
    });

    for result in join_all(tasks).await {
        assert!(result.unwrap().unwrap());
    }

    let stored = store.read("a").await.unwrap().unwrap();
    assert!(payloads.contains(&stored.data), "torn write: {}", stored.data);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_create_if_absent_inserts_once() {
    let store = DocumentStore::new();

    let tasks = (0..32).map(|i| {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .create_if_absent(Document::new("contended", format!("writer-{i}")))
                .await
        })
    });

    let inserted = join_all(tasks)
        .await
        .into_iter()
        .map(|result| result.unwrap().unwrap())
        .filter(CreateOutcome::is_inserted)
        .count();
    assert_eq!(inserted, 1);
    assert_eq!(store.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_distinct_ids_are_all_kept() {
    let store = DocumentStore::new();

    let tasks = (0..100).map(|i| {
        let store = store.clone();
        tokio::spawn(async move { store.create(Document::new(format!("doc-{i}"), "x")).await })
    });
    for result in join_all(tasks).await {
        assert!(result.unwrap().unwrap());
    }

    assert_eq!(store.list().await.unwrap().len(), 100);
}
