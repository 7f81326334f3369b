pub mod client;
#[cfg(test)]
pub mod stub;
pub mod worker;

pub use client::ApiClient;
pub use worker::ApiWorker;
