pub mod config;
pub mod logging;

pub mod connect;
pub mod extract;
pub mod fetch;
pub mod list;
pub mod protocol;
