use chrono::{DateTime, Utc};

/// A user row as the store reports it.
///
/// `id`, `password`, `date_joined` and `last_login` belong to the store; the
/// reconciler never compares them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub id: i64,
    pub identifier: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_superuser: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub password: String,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}
