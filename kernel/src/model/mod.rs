pub mod booking;
pub mod price;
pub mod summary;
