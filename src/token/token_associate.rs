// SPDX-License-Identifier: Apache-2.0

use hedera::{
    AccountId,
    Client,
    PrivateKey,
    Status,
    TokenAssociateTransaction,
    TokenId,
};

/// Parameters for [`associate_token`].
#[derive(Debug, Clone)]
pub struct AssociateToken {
    /// The account to associate the tokens with.
    pub account_id: AccountId,

    /// The key of `account_id`; the association must be signed by the account.
    pub account_key: PrivateKey,

    /// The tokens to associate.
    pub token_ids: Vec<TokenId>,
}

/// Outcome of [`associate_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAssociation {
    /// The account the tokens were associated with.
    pub account_id: AccountId,

    /// The associated tokens.
    pub token_ids: Vec<TokenId>,

    /// The receipt status of the association.
    pub status: Status,
}

/// Associate an account with one or more tokens, allowing it to hold them.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the transaction or its receipt fails,
///   for example when the account is already associated with one of the tokens.
pub async fn associate_token(
    client: &Client,
    request: AssociateToken,
) -> crate::Result<TokenAssociation> {
    log::debug!(
        "associating `{}` with {} token(s)",
        request.account_id,
        request.token_ids.len()
    );

    let receipt = TokenAssociateTransaction::new()
        .account_id(request.account_id)
        .token_ids(request.token_ids.iter().copied())
        .sign(request.account_key)
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    Ok(TokenAssociation {
        account_id: request.account_id,
        token_ids: request.token_ids,
        status: receipt.status,
    })
}
