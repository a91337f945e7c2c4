pub mod connection;
pub mod error;
pub mod password_hasher;
pub mod repositories;


pub use connection::{connect, migrate};
pub use error::{DbError, Result};
pub use password_hasher::PasswordHasher;
pub use repositories::user_repository::UserRepository;
