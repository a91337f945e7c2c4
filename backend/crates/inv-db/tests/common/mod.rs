pub mod test_db;

#[allow(unused_imports)]
pub use test_db::{create_test_pool, write_secret};
