use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use studentportal::storage::{
    ADMIN_SESSION_KEY, FileStore, KeyValueStore, MemoryStore, STUDENT_SESSION_KEY, SessionStorage,
    StorageError,
};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct StudentSession {
    id: i64,
    mssv: String,
}

#[tokio::test]
async fn test_set_get_clear() {
    let store = MemoryStore::new();
    let session = SessionStorage::student(store.clone());
    let record = StudentSession {
        id: 1,
        mssv: "SV001".to_string(),
    };

    assert!(!session.is_logged_in().await.unwrap());

    session.set(&record).await.unwrap();
    assert!(session.is_logged_in().await.unwrap());
    assert_eq!(session.get::<StudentSession>().await.unwrap(), Some(record));
    assert_eq!(
        store.raw(STUDENT_SESSION_KEY).as_deref(),
        Some(r#"{"id":1,"mssv":"SV001"}"#)
    );

    session.clear().await.unwrap();
    assert!(!session.is_logged_in().await.unwrap());
    assert_eq!(session.get::<Value>().await.unwrap(), None);
}

#[tokio::test]
async fn test_set_overwrites() {
    let session = SessionStorage::admin(MemoryStore::new());

    session.set(&json!({"username": "first"})).await.unwrap();
    session.set(&json!({"username": "second"})).await.unwrap();

    assert_eq!(
        session.get::<Value>().await.unwrap(),
        Some(json!({"username": "second"}))
    );
}

#[tokio::test]
async fn test_clear_without_session() {
    let session = SessionStorage::admin(MemoryStore::new());

    session.clear().await.unwrap();
    session.clear().await.unwrap();
    assert!(!session.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_roles_do_not_share_slots() {
    let store = MemoryStore::new();
    let admin = SessionStorage::admin(store.clone());
    let student = SessionStorage::student(store.clone());

    admin.set(&json!({"username": "root"})).await.unwrap();

    assert!(admin.is_logged_in().await.unwrap());
    assert!(!student.is_logged_in().await.unwrap());
    assert_eq!(admin.key(), ADMIN_SESSION_KEY);
    assert_eq!(store.len(), 1);

    student.clear().await.unwrap();
    assert!(admin.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_corrupt_value_is_an_error() {
    let store = MemoryStore::new();
    store.insert_raw(ADMIN_SESSION_KEY, "{not json");
    let session = SessionStorage::admin(store);

    assert!(matches!(
        session.get::<Value>().await,
        Err(StorageError::SerdeError(_))
    ));
    assert!(session.is_logged_in().await.is_err());
}

#[tokio::test]
async fn test_stored_null_is_logged_out() {
    let store = MemoryStore::new();
    store.insert_raw(STUDENT_SESSION_KEY, "null");
    let session = SessionStorage::student(store);

    assert_eq!(session.get::<Value>().await.unwrap(), None);
    assert!(!session.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_empty_value_is_logged_out() {
    let store = MemoryStore::new();
    store.insert_raw(STUDENT_SESSION_KEY, "");
    store.insert_raw(ADMIN_SESSION_KEY, "  \n");
    let student = SessionStorage::student(store.clone());
    let admin = SessionStorage::admin(store.clone());

    assert_eq!(student.get::<Value>().await.unwrap(), None);
    assert!(!student.is_logged_in().await.unwrap());
    assert_eq!(admin.get::<StudentSession>().await.unwrap(), None);
    assert!(!admin.is_logged_in().await.unwrap());

    student.clear().await.unwrap();
    admin.clear().await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_wrong_shape_is_an_error() {
    let store = MemoryStore::new();
    store.insert_raw(STUDENT_SESSION_KEY, r#"{"username":"root"}"#);
    let session = SessionStorage::student(store);

    assert!(session.get::<StudentSession>().await.is_err());
    assert!(session.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "studentportal-session-{}-{}",
        std::process::id(),
        nanos
    ));
    let store = FileStore::new(&dir);

    assert_eq!(store.get_item("admin").await.unwrap(), None);
    store.remove_item("admin").await.unwrap();

    let session = SessionStorage::admin(store.clone());
    session.set(&json!({"id": 9})).await.unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.join("admin.json")).unwrap(),
        r#"{"id":9}"#
    );
    assert_eq!(session.get::<Value>().await.unwrap(), Some(json!({"id": 9})));

    session.clear().await.unwrap();
    assert!(!dir.join("admin.json").exists());
    assert!(!session.is_logged_in().await.unwrap());

    std::fs::remove_dir_all(&dir).unwrap();
}
