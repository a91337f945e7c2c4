pub mod configuration_error;
pub mod secret_error;
pub mod store_error;

// -------------------------------------------------------------------------- //

pub use configuration_error::{ConfigurationError, ConfigurationResult};
pub use secret_error::{SecretError, SecretResult};
pub use store_error::{StoreError, StoreResult};
