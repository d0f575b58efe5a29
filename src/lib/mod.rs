#[macro_use]
extern crate rocket;

pub mod core;
pub mod server;
pub mod store;
