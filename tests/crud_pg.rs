//! End-to-end CRUD tests against a real PostgreSQL database.
//!
//! Ignored by default; run with a reachable database:
//! `DATABASE_URL=postgres://localhost/users_test cargo test -- --ignored`
//!
//! Emails carry a per-call unique suffix so a run that dies before its
//! cleanup cannot wedge later runs on the unique constraint.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::{SystemTime, UNIX_EPOCH};
use user_service::{ensure_users_table, AppError, UserInput, UserService};

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/users_test".into());
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("database reachable");
    ensure_users_table(&pool).await.expect("users table");
    pool
}

fn unique_email(local: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    format!("{}+{}-{}@crud.test", local, std::process::id(), nanos)
}

fn input(name: &str, email: &str) -> UserInput {
    UserInput {
        name: name.into(),
        email: email.into(),
    }
}

#[tokio::test]
#[ignore]
async fn create_then_get_returns_equal_record() {
    let pool = test_pool().await;
    let created = UserService::create(&pool, &input("Ann", &unique_email("ann-roundtrip")))
        .await
        .unwrap();
    let fetched = UserService::get_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row present");
    assert_eq!(fetched, created);
    UserService::delete(&pool, created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn duplicate_email_is_a_conflict() {
    let pool = test_pool().await;
    let email = unique_email("ann-conflict");
    let first = UserService::create(&pool, &input("Ann", &email))
        .await
        .unwrap();
    let err = UserService::create(&pool, &input("Other", &email))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    UserService::delete(&pool, first.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn update_is_idempotent_and_keeps_id() {
    let pool = test_pool().await;
    let created = UserService::create(&pool, &input("Ann", &unique_email("ann-update")))
        .await
        .unwrap();
    let new_input = input("Ann B", &unique_email("annb-update"));
    let once = UserService::update(&pool, created.id, &new_input)
        .await
        .unwrap()
        .expect("row present");
    let twice = UserService::update(&pool, created.id, &new_input)
        .await
        .unwrap()
        .expect("row present");
    assert_eq!(once, twice);
    assert_eq!(once.id, created.id);
    assert_eq!(once.name, "Ann B");
    UserService::delete(&pool, created.id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn delete_then_get_is_absent() {
    let pool = test_pool().await;
    let created = UserService::create(&pool, &input("Ann", &unique_email("ann-delete")))
        .await
        .unwrap();
    assert!(UserService::delete(&pool, created.id).await.unwrap());
    assert!(UserService::get_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    // A second delete finds nothing.
    assert!(!UserService::delete(&pool, created.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn list_contains_each_created_user() {
    let pool = test_pool().await;
    let a = UserService::create(&pool, &input("Ann", &unique_email("ann-list")))
        .await
        .unwrap();
    let b = UserService::create(&pool, &input("Ben", &unique_email("ben-list")))
        .await
        .unwrap();
    let users = UserService::list(&pool).await.unwrap();
    assert!(users.contains(&a));
    assert!(users.contains(&b));
    UserService::delete(&pool, a.id).await.unwrap();
    UserService::delete(&pool, b.id).await.unwrap();
}
