pub mod booking;
pub mod price;
