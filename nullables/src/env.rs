//! Nullable execution environment: a balance and a transfer log.

use veil_governance::{EnvError, ExecutionEnv};
use veil_types::MemberAddress;

/// An in-memory value ledger for testing.
pub struct NullEnv {
    balance: u128,
    transfers: Vec<(MemberAddress, u128, Vec<u8>)>,
}

impl NullEnv {
    pub fn with_balance(balance: u128) -> Self {
        Self {
            balance,
            transfers: Vec::new(),
        }
    }

    /// Every transfer performed, oldest first.
    pub fn transfers(&self) -> &[(MemberAddress, u128, Vec<u8>)] {
        &self.transfers
    }

    /// Total received by one address.
    pub fn received_by(&self, address: &MemberAddress) -> u128 {
        self.transfers
            .iter()
            .filter(|(to, _, _)| to == address)
            .map(|(_, amount, _)| amount)
            .sum()
    }
}

impl ExecutionEnv for NullEnv {
    fn available_balance(&self) -> u128 {
        self.balance
    }

    fn transfer_value(
        &mut self,
        to: &MemberAddress,
        amount: u128,
        payload: &[u8],
    ) -> Result<(), EnvError> {
        if amount > self.balance {
            return Err(EnvError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.transfers.push((to.clone(), amount, payload.to_vec()));
        Ok(())
    }
}
