pub mod database;
pub mod fcm;
