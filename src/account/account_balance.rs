// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use hedera::{
    AccountBalanceQuery,
    AccountId,
    Client,
    Hbar,
    TokenId,
};

/// The balance of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountBalance {
    /// The account queried.
    pub account_id: AccountId,

    /// Hbar held by the account.
    pub hbars: Hbar,

    /// Token balances reported by the node, in the smallest denomination of each token.
    pub tokens: HashMap<TokenId, u64>,
}

/// Query the hbar and token balances of `account_id`.
///
/// Balance queries are free.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the query fails.
pub async fn get_account_balance(
    client: &Client,
    account_id: AccountId,
) -> crate::Result<AccountBalance> {
    log::debug!("querying balance of `{account_id}`");

    let balance = AccountBalanceQuery::new().account_id(account_id).execute(client).await?;

    // nodes still report token balances; the mirror node is the long term source
    #[allow(deprecated)]
    let tokens = balance.tokens;

    Ok(AccountBalance { account_id, hbars: balance.hbars, tokens })
}
