//! Adapter over the external fungible-asset contract.
//!
//! The ledger only needs three capabilities from the asset: pull tokens into
//! custody, push tokens out of custody, and read a balance. Any failure of the
//! underlying token call is reported as [`ContractError::TransferFailure`]
//! rather than trapping the host, so the caller decides what to unwind.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Capabilities the staking ledger requires from its asset.
pub trait AssetInterface {
    /// Move `amount` from `from` into contract custody.
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError>;

    /// Move `amount` from contract custody to `to`.
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError>;

    /// Balance held by `account`.
    fn balance_of(&self, account: &Address) -> i128;
}

/// [`AssetInterface`] backed by a Soroban token contract.
pub struct TokenAsset<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> TokenAsset<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        Self {
            env,
            client: token::Client::new(env, token),
        }
    }

    fn custody(&self) -> Address {
        self.env.current_contract_address()
    }
}

impl AssetInterface for TokenAsset<'_> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<(), ContractError> {
        match self.client.try_transfer(from, &self.custody(), &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailure),
        }
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<(), ContractError> {
        match self.client.try_transfer(&self.custody(), to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailure),
        }
    }

    fn balance_of(&self, account: &Address) -> i128 {
        self.client.balance(account)
    }
}
