use soroban_sdk::{Address, Env, Symbol};

pub(crate) fn transfer_ownership(env: &Env, previous_owner: Address, new_owner: Address) {
    let topics = (
        Symbol::new(env, "ownership_transferred"),
        previous_owner,
        new_owner,
    );
    env.events().publish(topics, ());
}

pub(crate) fn add_trusted_address(env: &Env, address: Address) {
    let topics = (Symbol::new(env, "trusted_address_added"), address);
    env.events().publish(topics, ());
}

pub(crate) fn remove_trusted_address(env: &Env, address: Address) {
    let topics = (Symbol::new(env, "trusted_address_removed"), address);
    env.events().publish(topics, ());
}

pub(crate) fn set_base_jetton(env: &Env, address: Address, decimals: u32) {
    let topics = (Symbol::new(env, "base_jetton_set"), address);
    env.events().publish(topics, (decimals,));
}

pub(crate) fn add_jetton(env: &Env, address: Address, decimals: u32, active: bool) {
    let topics = (Symbol::new(env, "jetton_added"), address);
    env.events().publish(topics, (decimals, active));
}

pub(crate) fn remove_jetton(env: &Env, address: Address) {
    let topics = (Symbol::new(env, "jetton_removed"), address);
    env.events().publish(topics, ());
}
