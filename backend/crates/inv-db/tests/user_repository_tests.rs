mod common;

use common::create_test_pool;

use inv_core::{Credential, StoreError, UserAttributes, UserStore};
use inv_db::{DbError, UserRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_empty_database_when_finding_unknown_username_then_returns_none() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);

    // When
    let result = repo.find_by_username("nobody").await.unwrap();

    // Then
    assert_that!(result, none());
}

#[tokio::test]
async fn given_declared_attributes_when_created_then_can_be_found_with_those_values() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let attributes = UserAttributes {
        email: Some("alice@example.org".to_string()),
        first_name: Some("Alice".to_string()),
        is_superuser: Some(true),
        is_active: Some(false),
        ..Default::default()
    };

    // When
    let created = repo
        .create_user("alice", &attributes, Some(&Credential::new("s3cret")))
        .await
        .unwrap();

    // Then
    let found = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_that!(found, eq(&created));
    assert_that!(found.email.as_str(), eq("alice@example.org"));
    assert_that!(found.first_name.as_str(), eq("Alice"));
    assert_that!(found.is_superuser, eq(true));
    assert_that!(found.is_active, eq(false));
    assert_that!(found.password.as_str(), starts_with("argon2$argon2id$"));
    assert_that!(repo.hasher().verify("s3cret", &found.password), eq(true));
}

#[tokio::test]
async fn given_no_declared_attributes_when_created_then_schema_defaults_apply() {
    let repo = UserRepository::new(create_test_pool().await);

    let created = repo
        .create_user("bob", &UserAttributes::default(), None)
        .await
        .unwrap();

    assert_that!(created.email.as_str(), eq(""));
    assert_that!(created.is_superuser, eq(false));
    assert_that!(created.is_staff, eq(false));
    assert_that!(created.is_active, eq(true));
    assert_that!(created.password.as_str(), eq("!"));
    assert_that!(created.last_login, none());
}

#[tokio::test]
async fn given_existing_user_when_updated_with_partial_changes_then_other_columns_are_kept() {
    // Given
    let repo = UserRepository::new(create_test_pool().await);
    let created = repo
        .create_user(
            "carol",
            &UserAttributes {
                email: Some("carol@example.org".to_string()),
                is_staff: Some(true),
                ..Default::default()
            },
            Some(&Credential::new("old")),
        )
        .await
        .unwrap();

    // When
    repo.update_user(
        created.id,
        &UserAttributes {
            is_superuser: Some(true),
            ..Default::default()
        },
        None,
    )
    .await
    .unwrap();

    // Then
    let found = repo.find_by_username("carol").await.unwrap().unwrap();
    assert_that!(found.is_superuser, eq(true));
    assert_that!(found.is_staff, eq(true));
    assert_that!(found.email.as_str(), eq("carol@example.org"));
    assert_that!(found.password, eq(&created.password));
    assert_that!(found.date_joined, eq(created.date_joined));
}

#[tokio::test]
async fn given_existing_user_when_credential_rewritten_then_new_password_verifies() {
    let repo = UserRepository::new(create_test_pool().await);
    let created = repo
        .create_user("dave", &UserAttributes::default(), Some(&Credential::new("old")))
        .await
        .unwrap();

    repo.update_user(
        created.id,
        &UserAttributes::default(),
        Some(&Credential::new("new")),
    )
    .await
    .unwrap();

    let found = repo.find_by_username("dave").await.unwrap().unwrap();
    assert_that!(repo.hasher().verify("new", &found.password), eq(true));
    assert_that!(repo.hasher().verify("old", &found.password), eq(false));
}

#[tokio::test]
async fn given_unknown_id_when_updated_then_user_not_found() {
    let repo = UserRepository::new(create_test_pool().await);

    let result = repo.update(42, &UserAttributes::default(), None).await;

    assert!(matches!(result, Err(DbError::UserNotFound { id: 42, .. })));
}

#[tokio::test]
async fn given_existing_username_when_created_again_then_constraint_error() {
    let repo = UserRepository::new(create_test_pool().await);
    repo.create_user("erin", &UserAttributes::default(), None)
        .await
        .unwrap();

    let result = repo
        .create_user("erin", &UserAttributes::default(), None)
        .await;

    assert!(matches!(result, Err(StoreError::Constraint { .. })));
}

#[tokio::test]
async fn given_closed_pool_when_finding_then_store_unavailable() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool.clone());
    pool.close().await;

    let result = repo.find_by_identifier("alice").await;

    assert!(matches!(result, Err(StoreError::Unavailable { .. })));
}
