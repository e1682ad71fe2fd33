//! Test data fixtures

use chrono::{DateTime, Duration, Utc};

use eventhub::database::repositories::NewUser;
use eventhub::models::event::{CreateEventRequest, Event};
use eventhub::models::user::User;
use eventhub::services::AuthContext;
use eventhub::utils::password::make_password_hash;

use super::TestApp;

pub fn context_for(user: &User) -> AuthContext {
    AuthContext::new(user.id, user.is_admin)
}

pub async fn seed_user(app: &TestApp, email: &str, is_admin: bool) -> User {
    app.db
        .users
        .create(NewUser {
            name: format!("Test {}", email),
            email: email.to_string(),
            password_hash: make_password_hash("test password 123").unwrap(),
            phone: None,
            is_admin,
        })
        .await
        .expect("failed to seed user")
}

pub async fn seed_event(app: &TestApp, date: DateTime<Utc>, max_participants: i32) -> Event {
    app.db
        .events
        .create(CreateEventRequest {
            name: "Tech Conference".to_string(),
            description: Some("Annual conference".to_string()),
            date,
            location: "Budapest".to_string(),
            max_participants,
        })
        .await
        .expect("failed to seed event")
}

pub async fn seed_upcoming_event(app: &TestApp, max_participants: i32) -> Event {
    seed_event(app, Utc::now() + Duration::days(30), max_participants).await
}

pub async fn seed_past_event(app: &TestApp, max_participants: i32) -> Event {
    seed_event(app, Utc::now() - Duration::days(10), max_participants).await
}
