//! Capability set of the persistent user store.
//!
//! The store is owned by the wrapped application. The reconciler only needs
//! three operations from it, and each of them must be a single atomic write
//! or read so that an interrupted run never leaves a half-applied record.

use crate::{Credential, StoreResult, StoredUser, UserAttributes};

use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_identifier(&self, identifier: &str) -> StoreResult<Option<StoredUser>>;

    /// Insert a user. Undeclared attributes take the store's defaults.
    async fn create_user(
        &self,
        identifier: &str,
        attributes: &UserAttributes,
        credential: Option<&Credential>,
    ) -> StoreResult<StoredUser>;

    /// Overwrite the declared attributes in `changes` and, when given, the
    /// password. Undeclared attributes are left as stored.
    async fn update_user(
        &self,
        id: i64,
        changes: &UserAttributes,
        credential: Option<&Credential>,
    ) -> StoreResult<()>;
}
