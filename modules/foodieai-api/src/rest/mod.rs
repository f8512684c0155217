pub mod chat;
pub mod restaurants;
