pub mod address;
pub mod ports;
