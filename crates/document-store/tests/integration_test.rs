use async_trait::async_trait;
use document_store::{AccessRule, Collection, Credentials, Document, StoreError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// --- Test Document ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    title: String,
    locked: bool,
}

#[derive(Debug, thiserror::Error)]
#[error("ticket is locked")]
struct TicketLocked;

#[async_trait]
impl Document for Ticket {
    type Context = ();
    type Error = TicketLocked;

    async fn on_delete(&self, _id: &str, _ctx: &()) -> Result<(), TicketLocked> {
        if self.locked {
            Err(TicketLocked)
        } else {
            Ok(())
        }
    }
}

fn ticket(title: &str, locked: bool) -> Ticket {
    Ticket {
        title: title.into(),
        locked,
    }
}

fn counting_ids() -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("ticket_{}", counter.fetch_add(1, Ordering::SeqCst))
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (collection, client) = Collection::<Ticket>::new("tickets", 10);
    tokio::spawn(collection.with_id_generator(counting_ids()).run(()));
    let alice = Credentials::user("uid_alice", Some("alice@example.com".into()));

    // 1. Add
    let id = client.add(&alice, ticket("first", false)).await.unwrap();
    assert_eq!(id, "ticket_1");

    // 2. Get
    let snapshot = client.get(&alice, &id).await.unwrap().unwrap();
    assert_eq!(snapshot.data.title, "first");

    // 3. GetAll
    client.add(&alice, ticket("second", false)).await.unwrap();
    let all = client.get_all(&alice).await.unwrap();
    assert_eq!(all.len(), 2);

    // 4. Delete
    client.delete(&alice, &id).await.unwrap();
    assert!(client.get(&alice, &id).await.unwrap().is_none());
    let remaining = client.get_all(&alice).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "ticket_2");
}

#[tokio::test]
async fn test_delete_of_missing_id_reports_not_found() {
    let (collection, client) = Collection::<Ticket>::new("tickets", 10);
    tokio::spawn(collection.with_access_rule(AccessRule::Public).run(()));

    let result = client.delete(&Credentials::anonymous(), "missing").await;
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "missing"));
}

#[tokio::test]
async fn test_on_delete_hook_can_veto() {
    let (collection, client) = Collection::<Ticket>::new("tickets", 10);
    tokio::spawn(collection.with_access_rule(AccessRule::Public).run(()));
    let caller = Credentials::anonymous();

    let id = client.add(&caller, ticket("pinned", true)).await.unwrap();
    let result = client.delete(&caller, &id).await;
    assert!(matches!(result, Err(StoreError::Rejected(_))));
    assert!(client.get(&caller, &id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_stopped_collection_is_unavailable() {
    let (collection, client) = Collection::<Ticket>::new("tickets", 10);
    let handle = tokio::spawn(collection.run(()));
    handle.abort();
    let _ = handle.await;

    let caller = Credentials::user("uid_alice", None);
    let result = client.get_all(&caller).await;
    assert!(matches!(result, Err(StoreError::Unavailable)));
}

#[tokio::test]
async fn test_collection_shuts_down_when_clients_drop() {
    let (collection, client) = Collection::<Ticket>::new("tickets", 10);
    let handle = tokio::spawn(collection.run(()));
    drop(client);
    handle.await.expect("collection task should exit cleanly");
}
