// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::Parser;
use hedera::{
    AccountId,
    FileContentsQuery,
    PrivateKey,
};
use hedera_services::file::{
    create_file_with,
    CreateFile,
    FileOptions,
};
use hedera_services::{
    ClientConfig,
    PublisherConfig,
};

#[derive(Parser, Debug)]
struct Args {
    #[clap(long, env)]
    operator_account_id: AccountId,

    #[clap(long, env)]
    operator_key: PrivateKey,

    #[clap(long, env, default_value = "testnet")]
    hedera_network: String,

    /// The text file to publish.
    path: PathBuf,

    #[clap(long)]
    memo: Option<String>,

    /// Content over this many bytes is chunked.
    #[clap(long, default_value_t = hedera_services::DEFAULT_CHUNK_THRESHOLD)]
    threshold: usize,
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

    let contents = std::fs::read_to_string(&args.path)?;

    let config = PublisherConfig { threshold: args.threshold, ..PublisherConfig::default() };

    let result = create_file_with(
        &client,
        config,
        CreateFile {
            admin_keys: vec![args.operator_key],
            contents,
            options: FileOptions { memo: args.memo, ..FileOptions::default() },
        },
    )
    .await?;

    println!("file_id: {}", result.file_id);
    println!("status: {:?}", result.status);

    let contents = FileContentsQuery::new().file_id(result.file_id).execute(&client).await?;

    println!("file size according to `FileContentsQuery`: `{}` bytes", contents.contents.len());

    Ok(())
}
