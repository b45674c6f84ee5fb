//! Subcommand implementations.

mod keystore;
mod network;

pub use keystore::run_keystore;
pub use network::run_network;
