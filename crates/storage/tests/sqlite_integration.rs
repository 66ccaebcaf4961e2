use serde_json::json;
use storage::repository::{KeyValueExt, KeyValueRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_round_trips_json_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("market_test.best").await.unwrap(), None);

    repo.set("market_test.best", &json!(70)).await.unwrap();
    repo.set(
        "market_test.leaderboard",
        &json!([{ "score": 70, "date": "2023-11-14T22:13:20Z", "difficultyAverage": "Medium" }]),
    )
    .await
    .unwrap();

    assert_eq!(repo.get("market_test.best").await.unwrap(), Some(json!(70)));
    let board = repo.get("market_test.leaderboard").await.unwrap().unwrap();
    assert_eq!(board[0]["difficultyAverage"], "Medium");
}

#[tokio::test]
async fn sqlite_upserts_and_removes() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_upsert?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.set("k", &json!("first")).await.unwrap();
    repo.set("k", &json!("second")).await.unwrap();
    assert_eq!(repo.get("k").await.unwrap(), Some(json!("second")));

    repo.remove("k").await.unwrap();
    assert_eq!(repo.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("kept", &json!(true)).await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("kept").await.unwrap(), Some(json!(true)));
}

#[tokio::test]
async fn storage_sqlite_exposes_typed_helpers() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage.kv.set_as("best", &85_u32).await.unwrap();
    let best: Option<u32> = storage.kv.get_as("best").await.unwrap();
    assert_eq!(best, Some(85));

    storage.kv.set("best", &json!({ "nope": 1 })).await.unwrap();
    let err = storage.kv.get_as::<u32>("best").await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
