pub mod cart;
pub mod envelope;
pub mod error;
pub mod health;
pub mod tags;
