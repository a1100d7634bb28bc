//! Transfer option resolution for a remote artifact cache client.

pub mod config;
pub mod logging;
pub mod options;
