//! REST binding of the operations contract.

mod client;
mod envelope;

pub use client::RestClient;
