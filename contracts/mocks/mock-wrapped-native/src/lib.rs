#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, String};
use stellar_tokens::fungible::Base as TokenBase;

#[contracttype]
enum DataKey {
    NativeToken,
    Initialized,
}

/// Wrapped native asset backed 1:1 by native balance held in this contract.
#[contract]
pub struct MockWrappedNative;

#[contractimpl]
impl MockWrappedNative {
    pub fn initialize(env: Env, native_token: Address, name: String, symbol: String) {
        if env
            .storage()
            .persistent()
            .get::<_, bool>(&DataKey::Initialized)
            .is_some()
        {
            panic!("already initialized");
        }
        TokenBase::set_metadata(&env, 7, name, symbol);
        env.storage()
            .persistent()
            .set(&DataKey::NativeToken, &native_token);
        env.storage().persistent().set(&DataKey::Initialized, &true);
    }

    pub fn deposit(env: Env, from: Address, amount: i128) {
        from.require_auth();
        if amount <= 0 {
            panic!("bad amount");
        }
        let native = native_token(&env);
        token::Client::new(&env, &native).transfer(&from, &env.current_contract_address(), &amount);
        TokenBase::mint(&env, &from, amount);
    }

    pub fn withdraw(env: Env, to: Address, amount: i128) {
        to.require_auth();
        if amount <= 0 {
            panic!("bad amount");
        }
        if TokenBase::balance(&env, &to) < amount {
            panic!("insufficient balance");
        }
        TokenBase::update(&env, Some(&to), None, amount);
        let native = native_token(&env);
        token::Client::new(&env, &native).transfer(&env.current_contract_address(), &to, &amount);
    }

    pub fn native_token(env: Env) -> Address {
        native_token(&env)
    }

    pub fn name(env: Env) -> String {
        TokenBase::name(&env)
    }

    pub fn symbol(env: Env) -> String {
        TokenBase::symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        TokenBase::decimals(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        TokenBase::total_supply(&env)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        TokenBase::balance(&env, &id)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        TokenBase::allowance(&env, &from, &spender)
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128, live_until_ledger: u32) {
        if amount < 0 {
            panic!("bad amount");
        }
        TokenBase::approve(&env, &from, &spender, amount, live_until_ledger);
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        if amount <= 0 {
            panic!("bad amount");
        }
        TokenBase::transfer_from(&env, &spender, &from, &to, amount);
    }
}

fn native_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::NativeToken)
        .expect("native token not set")
}
