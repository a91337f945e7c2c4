use crate::StoredUser;

use serde::Serialize;

/// Mutable profile and role attributes of a user.
///
/// `None` means "not declared": the reconciler leaves the stored value alone
/// and a new user gets the store's default for that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UserAttributes {
    /// Declared attributes whose value differs from `stored`.
    pub fn changes_from(&self, stored: &StoredUser) -> UserAttributes {
        UserAttributes {
            email: differing(&self.email, &stored.email),
            first_name: differing(&self.first_name, &stored.first_name),
            last_name: differing(&self.last_name, &stored.last_name),
            is_superuser: differing(&self.is_superuser, &stored.is_superuser),
            is_staff: differing(&self.is_staff, &stored.is_staff),
            is_active: differing(&self.is_active, &stored.is_active),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Names of the declared attributes, in column order.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("email", self.email.is_some()),
            ("first_name", self.first_name.is_some()),
            ("last_name", self.last_name.is_some()),
            ("is_superuser", self.is_superuser.is_some()),
            ("is_staff", self.is_staff.is_some()),
            ("is_active", self.is_active.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, declared)| declared.then_some(name))
        .collect()
    }
}

fn differing<T: PartialEq + Clone>(declared: &Option<T>, stored: &T) -> Option<T> {
    declared.as_ref().filter(|value| *value != stored).cloned()
}
