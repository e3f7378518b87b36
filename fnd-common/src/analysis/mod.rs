//! Result aggregation and risk normalization
//!
//! Turns the heterogeneous, partially populated classifier response into
//! a single coherent, renderable risk state.

pub mod aggregate;
pub mod present;
pub mod response;
