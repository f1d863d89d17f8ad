pub mod credential;
pub mod port;
