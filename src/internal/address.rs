pub mod replica_address;
