
use crate::{Credential, StoreError, StoreResult, StoredUser, UserAttributes, UserStore};

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

/// In-memory stand-in for the application's user table.
///
/// Passwords are kept in clear text so tests can check what was written.
#[derive(Default)]
pub(crate) struct FakeUserStore {
    users: Mutex<Vec<StoredUser>>,
    writes: Mutex<usize>,
    fail_on: Option<String>,
}

impl FakeUserStore {
    /// Every call touching `identifier` fails as if the connection dropped.
    pub(crate) fn failing_on(identifier: &str) -> Self {
        Self {
            fail_on: Some(identifier.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn seed(&self, identifier: &str, attributes: &UserAttributes) -> StoredUser {
        let mut users = self.users.lock().unwrap();
        let user = build_user(users.len() as i64 + 1, identifier, attributes, None);
        users.push(user.clone());
        user
    }

    pub(crate) fn get(&self, identifier: &str) -> Option<StoredUser> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.identifier == identifier)
            .cloned()
    }

    pub(crate) fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    fn check(&self, identifier: &str) -> StoreResult<()> {
        match &self.fail_on {
            Some(failing) if failing == identifier => {
                Err(StoreError::unavailable("connection reset"))
            }
            _ => Ok(()),
        }
    }
}

fn build_user(
    id: i64,
    identifier: &str,
    attributes: &UserAttributes,
    credential: Option<&Credential>,
) -> StoredUser {
    StoredUser {
        id,
        identifier: identifier.to_string(),
        email: attributes.email.clone().unwrap_or_default(),
        first_name: attributes.first_name.clone().unwrap_or_default(),
        last_name: attributes.last_name.clone().unwrap_or_default(),
        is_superuser: attributes.is_superuser.unwrap_or(false),
        is_staff: attributes.is_staff.unwrap_or(false),
        is_active: attributes.is_active.unwrap_or(true),
        password: credential.map_or_else(|| "!".to_string(), |c| c.expose().to_string()),
        date_joined: Utc::now(),
        last_login: None,
    }
}

#[async_trait]
impl UserStore for FakeUserStore {
    async fn find_by_identifier(&self, identifier: &str) -> StoreResult<Option<StoredUser>> {
        self.check(identifier)?;
        Ok(self.get(identifier))
    }

    async fn create_user(
        &self,
        identifier: &str,
        attributes: &UserAttributes,
        credential: Option<&Credential>,
    ) -> StoreResult<StoredUser> {
        self.check(identifier)?;
        let mut users = self.users.lock().unwrap();
        let user = build_user(users.len() as i64 + 1, identifier, attributes, credential);
        users.push(user.clone());
        *self.writes.lock().unwrap() += 1;
        Ok(user)
    }

    async fn update_user(
        &self,
        id: i64,
        changes: &UserAttributes,
        credential: Option<&Credential>,
    ) -> StoreResult<()> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::corrupt(format!("no user with id {id}")))?;

        if let Some(email) = &changes.email {
            user.email = email.clone();
        }
        if let Some(first_name) = &changes.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &changes.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(is_superuser) = changes.is_superuser {
            user.is_superuser = is_superuser;
        }
        if let Some(is_staff) = changes.is_staff {
            user.is_staff = is_staff;
        }
        if let Some(is_active) = changes.is_active {
            user.is_active = is_active;
        }
        if let Some(credential) = credential {
            user.password = credential.expose().to_string();
        }

        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
