use registry_soroban_std::ensure;
use registry_soroban_std::ttl::extend_instance_ttl;
use soroban_sdk::{contract, contractimpl, Address, Env, Map, Vec};

use crate::error::ContractError;
use crate::event;
use crate::storage_types::DataKey;
use crate::types::{BaseJetton, JettonConfig};

#[contract]
pub struct JettonRegistry;

#[contractimpl]
impl JettonRegistry {
    /// Initializes the registry with its owner. All collections start empty
    /// and no base jetton is set.
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&DataKey::Owner, &owner);
    }

    /// Return the current owner of the registry.
    pub fn owner(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .expect("owner must be set during construction")
    }

    /// Transfer ownership of the registry to a new address.
    ///
    /// Only callable by the current owner.
    pub fn transfer_ownership(env: Env, new_owner: Address) {
        let owner = Self::owner(&env);
        owner.require_auth();

        env.storage().instance().set(&DataKey::Owner, &new_owner);

        event::transfer_ownership(&env, owner, new_owner);
    }

    /// Return true if the address is a member of the trusted set.
    pub fn is_trusted_address(env: &Env, address: Address) -> bool {
        Self::trusted_set(env).contains_key(address)
    }

    /// Snapshot of the trusted address set.
    pub fn trusted_addresses(env: &Env) -> Vec<Address> {
        Self::trusted_set(env).keys()
    }

    /// Add an address to the trusted set. Re-adding a member leaves the set
    /// unchanged and succeeds.
    ///
    /// Only callable by the owner.
    pub fn add_trusted_address(env: Env, address: Address) {
        Self::owner(&env).require_auth();

        let mut addresses = Self::trusted_set(&env);
        addresses.set(address.clone(), true);
        env.storage()
            .persistent()
            .set(&DataKey::TrustedAddresses, &addresses);

        extend_instance_ttl(&env);

        event::add_trusted_address(&env, address);
    }

    /// Remove an address from the trusted set. Removing a non-member is a
    /// no-op success.
    ///
    /// Only callable by the owner.
    pub fn remove_trusted_address(env: Env, address: Address) {
        Self::owner(&env).require_auth();

        let mut addresses = Self::trusted_set(&env);
        if addresses.remove(address.clone()).is_some() {
            env.storage()
                .persistent()
                .set(&DataKey::TrustedAddresses, &addresses);

            event::remove_trusted_address(&env, address);
        }
    }

    /// The base jetton configuration, if one has been set.
    pub fn base_jetton(env: &Env) -> Option<BaseJetton> {
        env.storage().instance().get(&DataKey::BaseJetton)
    }

    /// Set the base jetton, replacing any previous value wholesale.
    ///
    /// The registry's own address cannot be registered as the base jetton.
    /// Only callable by the owner.
    pub fn set_base_jetton(
        env: Env,
        address: Address,
        decimals: u32,
    ) -> Result<(), ContractError> {
        Self::owner(&env).require_auth();

        ensure!(
            address != env.current_contract_address(),
            ContractError::SelfReferenceForbidden
        );

        env.storage().instance().set(
            &DataKey::BaseJetton,
            &BaseJetton {
                address: address.clone(),
                decimals,
            },
        );

        extend_instance_ttl(&env);

        event::set_base_jetton(&env, address, decimals);

        Ok(())
    }

    /// Configuration of a single jetton, if registered.
    pub fn jetton(env: &Env, address: Address) -> Option<JettonConfig> {
        Self::jetton_map(env).get(address)
    }

    /// Snapshot of the jetton registry.
    pub fn jettons(env: &Env) -> Map<Address, JettonConfig> {
        Self::jetton_map(env)
    }

    /// Register a jetton or overwrite the configuration of an existing one.
    ///
    /// Only callable by the owner.
    pub fn add_jetton(env: Env, address: Address, decimals: u32, active: bool) {
        Self::owner(&env).require_auth();

        let mut jettons = Self::jetton_map(&env);
        jettons.set(address.clone(), JettonConfig { decimals, active });
        env.storage().persistent().set(&DataKey::Jettons, &jettons);

        extend_instance_ttl(&env);

        event::add_jetton(&env, address, decimals, active);
    }

    /// Remove a jetton from the registry. Removing an absent entry is a
    /// no-op success.
    ///
    /// Only callable by the owner.
    pub fn remove_jetton(env: Env, address: Address) {
        Self::owner(&env).require_auth();

        let mut jettons = Self::jetton_map(&env);
        if jettons.remove(address.clone()).is_some() {
            env.storage().persistent().set(&DataKey::Jettons, &jettons);

            event::remove_jetton(&env, address);
        }
    }
}

impl JettonRegistry {
    fn trusted_set(env: &Env) -> Map<Address, bool> {
        env.storage()
            .persistent()
            .get(&DataKey::TrustedAddresses)
            .unwrap_or_else(|| Map::new(env))
    }

    fn jetton_map(env: &Env) -> Map<Address, JettonConfig> {
        env.storage()
            .persistent()
            .get(&DataKey::Jettons)
            .unwrap_or_else(|| Map::new(env))
    }
}
