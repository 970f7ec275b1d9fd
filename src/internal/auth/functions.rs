pub mod acquire_token;
pub mod current_token;
