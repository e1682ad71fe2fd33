//! User management integration tests
//!
//! Admin/self access rules, the self-deletion guard, email uniqueness and
//! the silent stripping of is_admin from non-admin payloads.

mod helpers;

use assert_matches::assert_matches;
use serial_test::serial;

use eventhub::models::user::{CreateUserRequest, UpdateUserRequest};
use eventhub::EventhubError;

use helpers::fixtures::{context_for, seed_user};
use helpers::TestApp;

fn new_user_request(email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: "New User".to_string(),
        email: email.to_string(),
        password: "a strong password".to_string(),
        phone: Some("+36301234567".to_string()),
        is_admin: None,
    }
}

#[tokio::test]
#[serial]
async fn admin_creates_and_lists_users() {
    let app = TestApp::new().await.unwrap();
    let admin = seed_user(&app, "admin@example.com", true).await;
    let caller = context_for(&admin);

    let created = app
        .api
        .create_user(new_user_request("anna@example.com"), &caller)
        .await
        .unwrap();
    assert_eq!(created.email, "anna@example.com");
    assert!(!created.is_admin);
    assert_ne!(created.password_hash, "a strong password");

    let users = app.api.list_users(1, &caller).await.unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
#[serial]
async fn non_admin_cannot_create_or_list_users() {
    let app = TestApp::new().await.unwrap();
    let user = seed_user(&app, "anna@example.com", false).await;
    let caller = context_for(&user);

    assert_matches!(
        app.api
            .create_user(new_user_request("x@example.com"), &caller)
            .await,
        Err(EventhubError::Unauthorized(_))
    );
    assert_matches!(
        app.api.list_users(1, &caller).await,
        Err(EventhubError::Unauthorized(_))
    );
}

#[tokio::test]
#[serial]
async fn duplicate_email_is_a_conflict() {
    let app = TestApp::new().await.unwrap();
    let admin = seed_user(&app, "admin@example.com", true).await;
    let caller = context_for(&admin);

    app.api
        .create_user(new_user_request("anna@example.com"), &caller)
        .await
        .unwrap();

    let result = app
        .api
        .create_user(new_user_request("anna@example.com"), &caller)
        .await;

    assert_matches!(result, Err(EventhubError::DuplicateEmail { .. }));
}

#[tokio::test]
#[serial]
async fn non_admin_update_strips_is_admin_but_applies_other_fields() {
    let app = TestApp::new().await.unwrap();
    let user = seed_user(&app, "anna@example.com", false).await;

    let update = UpdateUserRequest {
        name: Some("Anna Renamed".to_string()),
        is_admin: Some(true),
        ..Default::default()
    };

    let updated = app
        .api
        .update_user(user.id, update, &context_for(&user))
        .await
        .unwrap();

    assert_eq!(updated.name, "Anna Renamed");
    assert!(!updated.is_admin, "is_admin must be silently dropped");
}

#[tokio::test]
#[serial]
async fn admin_can_grant_the_admin_flag() {
    let app = TestApp::new().await.unwrap();
    let admin = seed_user(&app, "admin@example.com", true).await;
    let user = seed_user(&app, "anna@example.com", false).await;

    let update = UpdateUserRequest {
        is_admin: Some(true),
        ..Default::default()
    };

    let updated = app
        .api
        .update_user(user.id, update, &context_for(&admin))
        .await
        .unwrap();

    assert!(updated.is_admin);
}

#[tokio::test]
#[serial]
async fn user_cannot_view_or_edit_another_profile() {
    let app = TestApp::new().await.unwrap();
    let user = seed_user(&app, "anna@example.com", false).await;
    let other = seed_user(&app, "ben@example.com", false).await;
    let caller = context_for(&user);

    assert_matches!(
        app.api.show_user(other.id, &caller).await,
        Err(EventhubError::Unauthorized(_))
    );

    let update = UpdateUserRequest {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    assert_matches!(
        app.api.update_user(other.id, update, &caller).await,
        Err(EventhubError::Unauthorized(_))
    );
}

#[tokio::test]
#[serial]
async fn admin_cannot_delete_their_own_account() {
    let app = TestApp::new().await.unwrap();
    let admin = seed_user(&app, "admin@example.com", true).await;
    let caller = context_for(&admin);

    let result = app.api.delete_user(admin.id, &caller).await;
    assert_matches!(result, Err(EventhubError::SelfDeletionForbidden));

    // The account is still present.
    let me = app.api.me(&caller).await.unwrap();
    assert_eq!(me.user.id, admin.id);
}

#[tokio::test]
#[serial]
async fn admin_deletes_other_accounts() {
    let app = TestApp::new().await.unwrap();
    let admin = seed_user(&app, "admin@example.com", true).await;
    let user = seed_user(&app, "anna@example.com", false).await;
    let caller = context_for(&admin);

    app.api.delete_user(user.id, &caller).await.unwrap();

    assert_matches!(
        app.api.show_user(user.id, &caller).await,
        Err(EventhubError::UserNotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn login_verifies_credentials() {
    let app = TestApp::new().await.unwrap();
    let user = seed_user(&app, "anna@example.com", false).await;

    let logged_in = app
        .api
        .login("anna@example.com", "test password 123")
        .await
        .unwrap();
    assert_eq!(logged_in.id, user.id);

    // The verified id resolves to a caller context for later requests.
    let context = app.api.context_for(logged_in.id).await.unwrap();
    assert_eq!(context.user_id, user.id);
    assert!(!context.is_admin);

    assert_matches!(
        app.api.login("anna@example.com", "wrong password").await,
        Err(EventhubError::Unauthorized(_))
    );
    assert_matches!(
        app.api.login("ghost@example.com", "test password 123").await,
        Err(EventhubError::Unauthorized(_))
    );
}

#[tokio::test]
#[serial]
async fn validation_failures_report_fields() {
    let app = TestApp::new().await.unwrap();
    let admin = seed_user(&app, "admin@example.com", true).await;

    let mut request = new_user_request("not-an-email");
    request.password = "short".to_string();

    let result = app.api.create_user(request, &context_for(&admin)).await;
    assert_matches!(result, Err(EventhubError::Validation(ref errs)) if errs.len() == 2);
}
