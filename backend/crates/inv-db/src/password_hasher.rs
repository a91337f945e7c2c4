//! Password hashing with Argon2id.
//!
//! Stored values use the application's `<algorithm>$<rest>` password
//! encoding: the algorithm name `argon2` followed by the Argon2 PHC string,
//! e.g. `argon2$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`. Every call draws
//! a fresh salt, so hashing the same credential twice yields different but
//! equivalent strings.

use crate::{DbError, Result};

use inv_core::Credential;

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;

/// Algorithm name the application reads in front of the PHC string.
pub const ALGORITHM: &str = "argon2";

#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Hasher with explicit Argon2 costs (memory in KiB).
    #[track_caller]
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            DbError::Hashing {
                message: format!("Invalid parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self { params })
    }

    #[track_caller]
    pub fn hash(&self, credential: &Credential) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(credential.expose().as_bytes(), &salt)
            .map_err(|e| DbError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(format!("{ALGORITHM}{hash}"))
    }

    /// Check `password` against a stored value. Values without the `argon2`
    /// prefix, malformed hashes and the unusable marker never verify.
    pub fn verify(&self, password: &str, encoded: &str) -> bool {
        let Some(phc) = encoded
            .strip_prefix(ALGORITHM)
            .filter(|phc| phc.starts_with('$'))
        else {
            return false;
        };

        PasswordHash::new(phc)
            .map(|parsed| {
                self.argon2()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}
