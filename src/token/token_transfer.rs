// SPDX-License-Identifier: Apache-2.0

use hedera::{
    AccountId,
    Client,
    PrivateKey,
    Status,
    TokenId,
    TransferTransaction,
};

/// Parameters for [`transfer_token`].
#[derive(Debug, Clone)]
pub struct TransferToken {
    /// The token to transfer.
    pub token_id: TokenId,

    /// The account tokens are sent from.
    pub sender_account_id: AccountId,

    /// Signs for the sender.
    pub sender_key: PrivateKey,

    /// The account receiving the tokens.
    pub recipient_account_id: AccountId,

    /// Number of tokens, in the token's smallest denomination.
    pub amount: i64,
}

/// Outcome of [`transfer_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTransfer {
    /// The token moved.
    pub token_id: TokenId,

    /// The amount moved, in the smallest denomination of the token.
    pub amount: i64,

    /// The receipt status of the transfer.
    pub status: Status,
}

/// Transfer fungible tokens between accounts.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the transaction or its receipt fails.
pub async fn transfer_token(client: &Client, request: TransferToken) -> crate::Result<TokenTransfer> {
    log::debug!(
        "transferring {} of `{}` from `{}` to `{}`",
        request.amount,
        request.token_id,
        request.sender_account_id,
        request.recipient_account_id
    );

    let receipt = TransferTransaction::new()
        .token_transfer(request.token_id, request.sender_account_id, -request.amount)
        .token_transfer(request.token_id, request.recipient_account_id, request.amount)
        .sign(request.sender_key)
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    Ok(TokenTransfer { token_id: request.token_id, amount: request.amount, status: receipt.status })
}
