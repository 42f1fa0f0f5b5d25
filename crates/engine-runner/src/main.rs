//! Perfection runner - development host for the perfection engine.
//!
//! This crate is the *composition root*: it loads a world snapshot, wires the
//! in-memory adapters to the engine's ports, and logs a progress report.

mod run;

fn main() -> anyhow::Result<()> {
    run::run()
}
