pub mod entities;
pub mod extraction;
pub mod ports;
pub mod prompt;
pub mod services;
