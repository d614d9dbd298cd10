// SPDX-License-Identifier: Apache-2.0

mod account_balance;
mod hbar_transfer;

pub use account_balance::{
    get_account_balance,
    AccountBalance,
};
pub use hbar_transfer::{
    transfer_hbar,
    HbarTransfer,
    TransferHbar,
};
