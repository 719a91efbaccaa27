#![no_std]

pub mod contract;
pub mod error;
mod event;
mod storage_types;
pub mod types;


pub use contract::{JettonRegistry, JettonRegistryClient};
