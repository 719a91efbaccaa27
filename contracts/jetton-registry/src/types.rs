use soroban_sdk::{contracttype, Address};

/// Per-jetton configuration tracked by the registry.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JettonConfig {
    pub decimals: u32,
    pub active: bool,
}

/// The jetton used as the base accounting unit, kept separately from the
/// general jetton registry.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseJetton {
    pub address: Address,
    pub decimals: u32,
}
