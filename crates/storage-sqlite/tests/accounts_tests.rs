//! Account registration and profile tests against a real SQLite database.

use std::sync::Arc;

use tempfile::TempDir;

use goldbit_core::accounts::{
    AccountService, AccountServiceTrait, AccountUpdate, NewAccount,
};
use goldbit_core::errors::{DatabaseError, Error};
use goldbit_storage_sqlite::accounts::AccountRepository;
use goldbit_storage_sqlite::{create_pool, init, run_migrations, spawn_writer};

fn setup() -> (TempDir, AccountService) {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = init(data_dir.path().to_str().unwrap()).expect("Failed to init db");
    let pool = create_pool(&db_path).expect("Failed to create pool");
    run_migrations(&pool).expect("Failed to run migrations");
    let writer = spawn_writer(pool.clone());

    let repository = Arc::new(AccountRepository::new(pool, writer));
    (data_dir, AccountService::new(repository))
}

fn new_account(name: &str, email: &str, is_admin: bool) -> NewAccount {
    NewAccount {
        id: None,
        name: name.to_string(),
        email: Some(email.to_string()),
        is_admin,
    }
}

#[tokio::test]
async fn test_create_and_get_account() {
    let (_guard, service) = setup();

    let created = service
        .create_account(new_account("alice", "alice@goldbit.io", false))
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let fetched = service.get_account(&created.id).unwrap();
    assert_eq!(fetched.name, "alice");
    assert_eq!(fetched.email.as_deref(), Some("alice@goldbit.io"));
    assert!(!fetched.is_admin);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let (_guard, service) = setup();

    service
        .create_account(new_account("alice", "alice@goldbit.io", false))
        .await
        .unwrap();
    let err = service
        .create_account(new_account("alice2", "alice@goldbit.io", false))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn test_update_touches_profile_fields_only() {
    let (_guard, service) = setup();

    let created = service
        .create_account(new_account("alice", "alice@goldbit.io", true))
        .await
        .unwrap();

    let updated = service
        .update_account(AccountUpdate {
            id: Some(created.id.clone()),
            name: "Alice Lidell".to_string(),
            email: Some("alice@wonderland.io".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Alice Lidell");
    assert_eq!(updated.email.as_deref(), Some("alice@wonderland.io"));
    // The admin flag and creation time are fixed at registration.
    assert!(updated.is_admin);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_clears_email() {
    let (_guard, service) = setup();

    let created = service
        .create_account(new_account("alice", "alice@goldbit.io", false))
        .await
        .unwrap();

    service
        .update_account(AccountUpdate {
            id: Some(created.id.clone()),
            name: "alice".to_string(),
            email: None,
        })
        .await
        .unwrap();

    // The cleared email must be gone from the stored row, not just the
    // returned account.
    let fetched = service.get_account(&created.id).unwrap();
    assert_eq!(fetched.email, None);
}

#[tokio::test]
async fn test_admin_listing() {
    let (_guard, service) = setup();

    service
        .create_account(new_account("alice", "alice@goldbit.io", true))
        .await
        .unwrap();
    service
        .create_account(new_account("bob", "bob@goldbit.io", false))
        .await
        .unwrap();

    assert_eq!(service.get_all_accounts().unwrap().len(), 2);
    let admins = service.get_admin_accounts().unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].name, "alice");
}
