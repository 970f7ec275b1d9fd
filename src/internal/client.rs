pub mod enums;
pub mod functions;
pub mod headers;
pub mod structs;
