// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use hedera::{
    AccountId,
    Client,
};
use hedera_services::account::get_account_balance;

#[derive(Parser, Debug)]
struct Args {
    #[clap(long, default_value = "0.0.1001")]
    account_id: AccountId,

    #[clap(long, env, default_value = "testnet")]
    hedera_network: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    // balance queries are free, no operator needed
    let client = Client::for_name(&args.hedera_network)?;

    let balance = get_account_balance(&client, args.account_id).await?;

    println!("balance = {}", balance.hbars);

    for (token_id, amount) in &balance.tokens {
        println!("  {token_id}: {amount}");
    }

    Ok(())
}
