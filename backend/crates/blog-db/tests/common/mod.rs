#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{create_test_post, create_test_user, insert_post, insert_user};
pub use test_db::create_test_pool;
