pub mod fcm;
pub mod request;
pub mod response;
pub mod user;
