pub mod health;
pub mod summary;
