pub mod create;
pub mod exists;
pub mod get;
pub mod remove;
pub mod stat;
pub mod update;
pub mod upload;
