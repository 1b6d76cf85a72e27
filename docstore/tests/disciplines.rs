use std::sync::Arc;

use docstore::{
    actor::StoreActor,
    backend::DynStoreBackend,
    memory::DocumentStore,
    prelude::*,
};

async fn end_to_end<B: StoreBackend>(store: &B) {
    assert!(store.create(Document::new("a", "x")).await.unwrap());
    assert_eq!(store.read("a").await.unwrap(), Some(Document::new("a", "x")));

    assert!(store.update(Document::new("a", "y")).await.unwrap());
    assert_eq!(store.read("a").await.unwrap(), Some(Document::new("a", "y")));

    assert!(store.delete("a").await.unwrap());
    assert!(!store.exists("a").await.unwrap());
    assert!(store.delete("a").await.unwrap());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn lock_based_store_end_to_end() {
    let store = DocumentStore::builder().build().await.unwrap();
    end_to_end(&store).await;
}

#[tokio::test]
async fn actor_store_end_to_end() {
    let store = StoreActor::builder().build().await.unwrap();
    end_to_end(&store).await;
    store.shutdown().await.unwrap();
}

#[tokio::test]
async fn shared_backends_behave_alike() {
    let lock = Arc::new(DocumentStore::new());
    let actor = Arc::new(StoreActor::builder().build().await.unwrap());

    end_to_end(&lock).await;
    end_to_end(&actor).await;
}

#[tokio::test]
async fn concrete_backend_is_recoverable() {
    let backend: Box<dyn DynStoreBackend> = Box::new(DocumentStore::new());
    backend.create(Document::new("a", "x")).await.unwrap();

    let store = backend.as_any().downcast_ref::<DocumentStore>().unwrap();
    assert_eq!(store.len().await, 1);
    assert!(backend.as_any().downcast_ref::<docstore::actor::StoreHandle>().is_none());
}

#[tokio::test]
async fn runtime_selected_backend() {
    let backends: Vec<Box<dyn DynStoreBackend>> = vec![
        Box::new(DocumentStore::new()),
        Box::new(StoreActor::builder().build().await.unwrap()),
    ];

    for backend in backends {
        assert!(backend.create(Document::new("a", "x")).await.unwrap());
        assert_eq!(
            backend.create_if_absent(Document::new("a", "y")).await.unwrap(),
            CreateOutcome::Existing(Document::new("a", "x"))
        );
        assert_eq!(backend.list().await.unwrap().len(), 1);
        backend.shutdown_boxed().await.unwrap();
    }
}
