//! Outbound adapters implementing the domain's driven ports.

pub mod geocoding;
pub mod openai;
pub mod persistence;
pub mod weather;
