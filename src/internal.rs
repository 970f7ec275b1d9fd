pub mod address;
pub mod auth;
pub mod client;
pub mod entrance;
pub mod error;
pub mod remote_file;
pub mod states;
