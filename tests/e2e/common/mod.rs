// SPDX-License-Identifier: Apache-2.0

use std::sync::Once;

use hedera::{
    AccountCreateTransaction,
    AccountId,
    Client,
    Hbar,
    PrivateKey,
};
use hedera_services::ClientConfig;

pub(crate) struct Operator {
    pub(crate) account_id: AccountId,
    pub(crate) private_key: PrivateKey,
}

pub(crate) struct Config {
    pub(crate) operator: Operator,
}

pub(crate) struct TestEnvironment {
    pub(crate) config: Config,
    pub(crate) client: Client,
}

fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = dotenvy::dotenv();
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Returns a configured environment for tests that spend hbar.
///
/// These only run with `TEST_RUN_NONFREE=1` and an operator in the environment.
pub(crate) fn setup_nonfree() -> Option<TestEnvironment> {
    init_logging();

    if std::env::var("TEST_RUN_NONFREE").as_deref() != Ok("1") {
        log::debug!("skipping non-free test");
        return None;
    }

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::debug!("skipping test due to missing operator: {e}");
            return None;
        }
    };

    let operator =
        Operator { account_id: config.operator_account_id, private_key: config.operator_key.clone() };

    let client = config.into_client().ok()?;

    Some(TestEnvironment { config: Config { operator }, client })
}

pub(crate) struct Account {
    pub(crate) id: AccountId,
    pub(crate) key: PrivateKey,
}

impl Account {
    pub(crate) async fn create(balance: Hbar, client: &Client) -> anyhow::Result<Self> {
        let key = PrivateKey::generate_ed25519();

        let id = AccountCreateTransaction::new()
            .key(key.public_key())
            .initial_balance(balance)
            .execute(client)
            .await?
            .get_receipt(client)
            .await?
            .account_id
            .ok_or_else(|| anyhow::anyhow!("receipt has no account id"))?;

        Ok(Self { id, key })
    }
}
