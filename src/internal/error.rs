pub mod http_error;
pub mod replica_error;
