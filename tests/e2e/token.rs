// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;
use hedera::{
    Hbar,
    Status,
    TokenCreateTransaction,
};
use hedera_services::account::get_account_balance;
use hedera_services::token::{
    associate_token,
    transfer_token,
    AssociateToken,
    TransferToken,
};
use hedera_services::Error;

use crate::common::{
    setup_nonfree,
    Account,
    TestEnvironment,
};

#[tokio::test]
async fn associate_then_transfer() -> anyhow::Result<()> {
    let Some(TestEnvironment { config: _, client }) = setup_nonfree() else {
        return Ok(());
    };

    let treasury = Account::create(Hbar::new(5), &client).await?;
    let holder = Account::create(Hbar::new(1), &client).await?;

    let token_id = TokenCreateTransaction::new()
        .name("e2e services token")
        .symbol("E2E")
        .initial_supply(100)
        .treasury_account_id(treasury.id)
        .admin_key(treasury.key.public_key())
        .sign(treasury.key.clone())
        .execute(&client)
        .await?
        .get_receipt(&client)
        .await?
        .token_id
        .ok_or_else(|| anyhow::anyhow!("receipt has no token id"))?;

    let association = associate_token(
        &client,
        AssociateToken {
            account_id: holder.id,
            account_key: holder.key.clone(),
            token_ids: vec![token_id],
        },
    )
    .await?;

    assert_eq!(association.status, Status::Success);
    assert_eq!(association.token_ids, [token_id]);

    let transfer = transfer_token(
        &client,
        TransferToken {
            token_id,
            sender_account_id: treasury.id,
            sender_key: treasury.key.clone(),
            recipient_account_id: holder.id,
            amount: 40,
        },
    )
    .await?;

    assert_eq!(transfer.status, Status::Success);

    let balance = get_account_balance(&client, holder.id).await?;

    assert_eq!(balance.tokens.get(&token_id), Some(&40));

    Ok(())
}

#[tokio::test]
async fn transfer_without_association_fails() -> anyhow::Result<()> {
    let Some(TestEnvironment { config: _, client }) = setup_nonfree() else {
        return Ok(());
    };

    let treasury = Account::create(Hbar::new(5), &client).await?;
    let stranger = Account::create(Hbar::new(0), &client).await?;

    let token_id = TokenCreateTransaction::new()
        .name("e2e services token")
        .symbol("E2E")
        .initial_supply(10)
        .treasury_account_id(treasury.id)
        .sign(treasury.key.clone())
        .execute(&client)
        .await?
        .get_receipt(&client)
        .await?
        .token_id
        .ok_or_else(|| anyhow::anyhow!("receipt has no token id"))?;

    let res = transfer_token(
        &client,
        TransferToken {
            token_id,
            sender_account_id: treasury.id,
            sender_key: treasury.key.clone(),
            recipient_account_id: stranger.id,
            amount: 1,
        },
    )
    .await;

    assert_matches!(
        res,
        Err(Error::Remote(hedera::Error::ReceiptStatus {
            status: Status::TokenNotAssociatedToAccount,
            ..
        }))
    );

    Ok(())
}
