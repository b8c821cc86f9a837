pub mod health;
pub mod summary;
pub mod v1;
