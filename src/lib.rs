//! lib target
//!
//! Approximation of the densest common subgraph of a set of undirected graphs by greedy peeling.
//! See [structure::dcs].

use env_logger::Builder;

#[macro_use]
extern crate lazy_static;

lazy_static! {
    static ref LOG: u64 = {
        let res = install_log();
        res
    };
}

// install a logger facility
fn install_log() -> u64 {
    Builder::from_default_env().init();
    log::debug!("logger initialized");
    return 1;
}

/// initializes env_logger (once) from RUST_LOG environment variable
pub fn init_log() {
    let _ = *LOG;
}

pub mod graph;

pub mod structure;

pub mod io;

pub mod tools;

pub mod prelude;
