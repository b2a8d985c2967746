//! Account creation and login against the in-memory store.

use pretty_assertions::assert_eq;

use small_chat::application::services::{AccountError, AccountService};
use small_chat::domain::{AccountQueryProcessor, UserName};

use crate::common::{TestServices, TEST_USER};

#[tokio::test]
async fn test_create_then_login() {
    let services = TestServices::new();

    let created = services
        .accounts
        .create_account(TEST_USER.username, TEST_USER.password)
        .await
        .unwrap();
    let logged_in = services
        .accounts
        .login(TEST_USER.username, TEST_USER.password)
        .await
        .unwrap();

    assert!(!created.token.as_str().is_empty());
    assert_eq!(created.user_name.as_str(), TEST_USER.username);
    assert_eq!(logged_in.user_name.as_str(), TEST_USER.username);

    assert_ne!(created.token, logged_in.token);
    let created_id = services.tokens.verify(created.token.as_str()).unwrap();
    let login_id = services.tokens.verify(logged_in.token.as_str()).unwrap();
    assert_eq!(created_id, login_id);

    let stored = services
        .store
        .get_login_credential(&UserName::parse(TEST_USER.username).unwrap())
        .await
        .unwrap();
    assert_eq!(stored.account_id, created_id);
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let services = TestServices::new();
    services
        .accounts
        .create_account(TEST_USER.username, TEST_USER.password)
        .await
        .unwrap();

    let err = services
        .accounts
        .login(TEST_USER.username, "wrongpass1")
        .await
        .unwrap_err();

    assert!(matches!(err, AccountError::PasswordMismatch));
}

#[tokio::test]
async fn test_login_with_unknown_user() {
    let services = TestServices::new();

    let err = services
        .accounts
        .login("doesnotexist", TEST_USER.password)
        .await
        .unwrap_err();

    assert!(matches!(err, AccountError::AccountNotFound));
}

#[tokio::test]
async fn test_second_create_with_same_name_fails_and_first_still_logs_in() {
    let services = TestServices::new();
    let first = services
        .accounts
        .create_account(TEST_USER.username, TEST_USER.password)
        .await
        .unwrap();

    let err = services
        .accounts
        .create_account(TEST_USER.username, "anotherpass1")
        .await
        .unwrap_err();

    assert!(matches!(err, AccountError::UserNameAlreadyRegistered));
    let logged_in = services
        .accounts
        .login(TEST_USER.username, TEST_USER.password)
        .await
        .unwrap();
    assert_eq!(
        services.tokens.verify(logged_in.token.as_str()).unwrap(),
        services.tokens.verify(first.token.as_str()).unwrap()
    );
    assert_eq!(services.store.len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_name_register_once() {
    let services = std::sync::Arc::new(TestServices::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let services = services.clone();
            tokio::spawn(async move {
                services
                    .accounts
                    .create_account(TEST_USER.username, TEST_USER.password)
                    .await
            })
        })
        .collect();

    let mut succeeded = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(AccountError::UserNameAlreadyRegistered) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(succeeded, 1);
    assert_eq!(services.store.len(), 1);
}
