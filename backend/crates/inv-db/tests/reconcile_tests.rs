mod common;

use common::{create_test_pool, write_secret};

use inv_core::{DesiredState, Reconciler, RecordOutcome};
use inv_db::UserRepository;

use googletest::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn given_empty_store_when_alice_declared_superuser_then_created_and_report_succeeds() {
    // Given
    let secrets = TempDir::new().unwrap();
    let alice_secret = write_secret(secrets.path(), "alice", "wonderland");
    let json = format!(
        r#"{{ "alice": {{ "superuser": true, "credentialRef": "{}" }} }}"#,
        alice_secret.display()
    );
    let desired = DesiredState::from_json_str(&json).unwrap();
    let repo = UserRepository::new(create_test_pool().await);

    // When
    let report = Reconciler::new(&repo).reconcile(&desired).await.unwrap();

    // Then
    assert_that!(report.is_success(), eq(true));
    assert_that!(report.to_string(), contains_substring("alice: created"));
    let alice = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_that!(alice.is_superuser, eq(true));
    assert_that!(repo.hasher().verify("wonderland", &alice.password), eq(true));
}

#[tokio::test]
async fn given_applied_state_when_reconciled_again_then_attributes_unchanged_and_credential_equivalent() {
    // Given
    let secrets = TempDir::new().unwrap();
    let bob_secret = write_secret(secrets.path(), "bob", "builder");
    let json = format!(
        r#"{{
            "bob": {{ "is_staff": true, "email": "bob@example.org", "password_file": "{}" }},
            "carol": {{ "is_active": false }}
        }}"#,
        bob_secret.display()
    );
    let desired = DesiredState::from_json_str(&json).unwrap();
    let repo = UserRepository::new(create_test_pool().await);
    let reconciler = Reconciler::new(&repo);
    reconciler.reconcile(&desired).await.unwrap();
    let carol_before = repo.find_by_username("carol").await.unwrap().unwrap();

    // When
    let second = reconciler.reconcile(&desired).await.unwrap();

    // Then
    assert_that!(second.counts().unchanged, eq(2));
    assert_that!(
        second.entry("bob").unwrap().outcome,
        eq(&RecordOutcome::Unchanged)
    );
    let bob = repo.find_by_username("bob").await.unwrap().unwrap();
    assert_that!(bob.is_staff, eq(true));
    assert_that!(repo.hasher().verify("builder", &bob.password), eq(true));
    let carol_after = repo.find_by_username("carol").await.unwrap().unwrap();
    assert_that!(carol_after, eq(&carol_before));
}

#[tokio::test]
async fn given_record_removed_from_state_when_reconciled_then_user_is_kept() {
    let repo = UserRepository::new(create_test_pool().await);
    let first = DesiredState::from_json_str(r#"{ "dave": {}, "erin": { "staff": true } }"#).unwrap();
    Reconciler::new(&repo).reconcile(&first).await.unwrap();

    let second = DesiredState::from_json_str(r#"{ "dave": {} }"#).unwrap();
    Reconciler::new(&repo).reconcile(&second).await.unwrap();

    let erin = repo.find_by_username("erin").await.unwrap();
    assert_that!(erin, some(anything()));
}

#[tokio::test]
async fn given_deleted_secret_file_when_reconciled_then_other_records_still_applied() {
    // Given
    let secrets = TempDir::new().unwrap();
    let frank_secret = write_secret(secrets.path(), "frank", "f");
    let json = format!(
        r#"{{
            "frank": {{ "password_file": "{}" }},
            "grace": {{ "superuser": true }}
        }}"#,
        frank_secret.display()
    );
    let desired = DesiredState::from_json_str(&json).unwrap();
    std::fs::remove_file(&frank_secret).unwrap();
    let repo = UserRepository::new(create_test_pool().await);

    // When
    let report = Reconciler::new(&repo).reconcile(&desired).await.unwrap();

    // Then
    assert_that!(report.counts().failed, eq(1));
    assert_that!(report.counts().created, eq(1));
    assert_that!(repo.find_by_username("frank").await.unwrap(), none());
    assert_that!(repo.find_by_username("grace").await.unwrap(), some(anything()));
}
