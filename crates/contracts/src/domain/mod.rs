pub mod order;
pub mod pizza;
