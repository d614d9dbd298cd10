// SPDX-License-Identifier: Apache-2.0

mod token_associate;
mod token_transfer;

pub use token_associate::{
    associate_token,
    AssociateToken,
    TokenAssociation,
};
pub use token_transfer::{
    transfer_token,
    TokenTransfer,
    TransferToken,
};
