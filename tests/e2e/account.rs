// SPDX-License-Identifier: Apache-2.0

use hedera::{
    Hbar,
    Status,
};
use hedera_services::account::{
    get_account_balance,
    transfer_hbar,
    TransferHbar,
};

use crate::common::{
    setup_nonfree,
    Account,
    TestEnvironment,
};

#[tokio::test]
async fn operator_balance() -> anyhow::Result<()> {
    let Some(TestEnvironment { config, client }) = setup_nonfree() else {
        return Ok(());
    };

    let op = &config.operator;

    let balance = get_account_balance(&client, op.account_id).await?;

    assert_eq!(balance.account_id, op.account_id);
    assert!(balance.hbars > Hbar::ZERO);

    Ok(())
}

#[tokio::test]
async fn transfer_between_accounts() -> anyhow::Result<()> {
    let Some(TestEnvironment { config: _, client }) = setup_nonfree() else {
        return Ok(());
    };

    let sender = Account::create(Hbar::new(2), &client).await?;
    let recipient = Account::create(Hbar::new(0), &client).await?;

    let transfer = transfer_hbar(
        &client,
        TransferHbar {
            sender_account_id: sender.id,
            sender_key: sender.key.clone(),
            recipient_account_id: recipient.id,
            amount: Hbar::new(1),
        },
    )
    .await?;

    assert_eq!(transfer.status, Status::Success);

    let balance = get_account_balance(&client, recipient.id).await?;

    assert_eq!(balance.hbars, Hbar::new(1));

    Ok(())
}
