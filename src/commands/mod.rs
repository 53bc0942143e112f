//! Subcommand implementations for the bootstrap binary.

mod assemblies;
mod ccd;
mod ids;

pub use assemblies::run_assemblies;
pub use ccd::run_ccd;
pub use ids::run_fetch_ids;

/// The `hello` smoke-test subcommand.
pub fn run_hello(name: &str) {
    println!("Hello, {name}!");
}
