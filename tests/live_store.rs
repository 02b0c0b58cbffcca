//! End-to-end checks against a running MongoDB instance.
//!
//! Ignored by default: run with `cargo test -- --ignored` once a server is
//! reachable via `MONGODB_URI` (or on localhost). Each test works in its own
//! scratch database and drops it afterward.

use std::env;

use mongodb::bson::{doc, Document};
use mongodb::Client;

use idbench::adapters::live::mongo::{MongoStore, DEFAULT_MONGODB_URI, MONGODB_URI_VAR};
use idbench::bench::{self, ULID_COLLECTION, UUID_COLLECTION};
use idbench::config::LoadConfig;
use idbench::context::BenchContext;
use idbench::ports::{DocumentStore, IdRecord};

fn uri() -> String {
    env::var(MONGODB_URI_VAR).unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string())
}

async fn raw_client() -> Client {
    Client::with_uri_str(uri()).await.expect("parse MongoDB URI")
}

#[tokio::test]
#[ignore = "requires a reachable MongoDB instance"]
async fn full_run_loads_and_indexes_both_collections() {
    let database = format!("idbenchFlow{}", std::process::id());
    let store = MongoStore::connect(&database).await.unwrap();
    let ctx = BenchContext::with_store(Box::new(store));
    let config = LoadConfig { total_count: 1000, batch_size: 100 };

    bench::run_comparison(&ctx, &config).await.unwrap();

    let client = raw_client().await;
    let db = client.database(&database);
    for collection in [UUID_COLLECTION, ULID_COLLECTION] {
        let coll = db.collection::<Document>(collection);
        assert_eq!(coll.count_documents(doc! {}).await.unwrap(), 1000);

        let names = coll.list_index_names().await.unwrap();
        assert!(names.contains(&format!("{collection}_id")));
    }
    db.drop().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a reachable MongoDB instance"]
async fn index_creation_is_idempotent_and_enforces_uniqueness() {
    let database = format!("idbenchIndex{}", std::process::id());
    let store = MongoStore::connect(&database).await.unwrap();

    store.ensure_unique_index(UUID_COLLECTION, bench::ID_FIELD).await.unwrap();
    store.ensure_unique_index(UUID_COLLECTION, bench::ID_FIELD).await.unwrap();

    store
        .insert_batch(UUID_COLLECTION, vec![IdRecord::new("a"), IdRecord::new("b")])
        .await
        .unwrap();
    let err = store.insert_batch(UUID_COLLECTION, vec![IdRecord::new("a")]).await.unwrap_err();
    assert!(err.to_string().contains("bulk insert"));

    let client = raw_client().await;
    let db = client.database(&database);
    let names = db.collection::<Document>(UUID_COLLECTION).list_index_names().await.unwrap();
    let ours: Vec<&String> = names.iter().filter(|n| *n == "uuids_id").collect();
    assert_eq!(ours.len(), 1);

    db.drop().await.unwrap();
}
