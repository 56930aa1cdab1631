//! dnscache Application Layer
pub mod ports;
