//! Test modules for the simulation

mod helpers;
mod monitor;
