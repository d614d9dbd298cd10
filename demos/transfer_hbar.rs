// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hedera::{
    AccountId,
    Hbar,
    PrivateKey,
};
use hedera_services::account::{
    transfer_hbar,
    TransferHbar,
};
use hedera_services::ClientConfig;

#[derive(Parser, Debug)]
struct Args {
    #[clap(long, env)]
    operator_account_id: AccountId,

    #[clap(long, env)]
    operator_key: PrivateKey,

    #[clap(long, env, default_value = "testnet")]
    hedera_network: String,

    #[clap(long, default_value = "0.0.1001")]
    receiver: AccountId,

    #[clap(long, default_value = "10 μℏ")]
    amount: Hbar,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::init();

    let args = Args::parse();

    let client = ClientConfig {
        network: args.hedera_network,
        operator_account_id: args.operator_account_id,
        operator_key: args.operator_key.clone(),
    }
    .into_client()?;

    let transfer = transfer_hbar(
        &client,
        TransferHbar {
            sender_account_id: args.operator_account_id,
            sender_key: args.operator_key,
            recipient_account_id: args.receiver,
            amount: args.amount,
        },
    )
    .await?;

    println!(
        " > sent {} from {} to {}: {:?}",
        transfer.amount, transfer.sender_account_id, transfer.recipient_account_id, transfer.status
    );

    Ok(())
}
