// src/net/mod.rs

pub mod client;
pub mod wire;

pub use client::ScrapeClient;
pub use wire::{ErrorBody, ScrapeRequest, ScrapeResult};
