pub mod client_config;
pub mod replica_client;

pub use client_config::ReplicaClientConfig;
pub use replica_client::ReplicaClient;
