mod api;
pub mod args;
pub mod commands;
mod config;
mod error;
mod filename;
mod model;
mod utils;

#[cfg(test)]
mod test;

pub use config::Config;
pub use error::Error;
pub use error::Result;
