// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::Parser;
use hedera::{
    AccountId,
    PrivateKey,
};
use hedera_services::contract::{
    call_contract,
    create_contract,
    parse_parameters,
    ContractArtifact,
    ContractCall,
    CreateContract,
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

    /// Compiled contract JSON holding a `bytecode` field.
    #[clap(long)]
    artifact: PathBuf,

    /// Constructor arguments, as `[{"type": "string", "value": "First message"}]`.
    #[clap(long, default_value = r#"[{"type": "string", "value": "First message"}]"#)]
    constructor_parameters: String,

    /// A view function returning a string, called after deployment.
    #[clap(long, default_value = "message")]
    function: String,
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

    let artifact = ContractArtifact::from_file(&args.artifact)?;

    let mut request = CreateContract::new(args.operator_key, artifact.bytecode());
    request.constructor_parameters = parse_parameters(&args.constructor_parameters)?;
    request.memo = artifact.contract_name.clone();

    let created = create_contract(&client, request).await?;

    println!("bytecode file id: {}", created.file_id);
    println!("contract id: {}", created.contract_id);

    let call = call_contract(&client, ContractCall::new(created.contract_id, args.function)).await?;

    println!("{}", call.result.get_str(0).unwrap_or_default());

    Ok(())
}
