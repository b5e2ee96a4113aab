pub mod entities;
pub mod filter;
pub mod ports;
pub mod services;
pub mod value_objects;
