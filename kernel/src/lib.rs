pub mod aggregate;
pub mod model;
pub mod repository;
pub mod usecase;
