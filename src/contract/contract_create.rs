// SPDX-License-Identifier: Apache-2.0

use hedera::{
    AccountId,
    Client,
    ContractCreateTransaction,
    ContractId,
    FileId,
    PrivateKey,
    Status,
};

use super::{
    encode_parameters,
    FunctionParameter,
    DEFAULT_GAS,
};
use crate::file::{
    ChunkedPublisher,
    FileOptions,
};
use crate::Error;

/// Parameters for [`create_contract`].
#[derive(Debug, Clone)]
pub struct CreateContract {
    /// Key allowed to update or delete the contract, also used as the key of the bytecode file.
    pub admin_key: PrivateKey,

    /// Hex encoded bytecode, as found in the compiler output.
    pub bytecode: String,

    /// The account the contract's balance is staked to.
    pub staked_account_id: Option<AccountId>,

    /// Gas used to run the constructor. Unused gas is refunded.
    pub gas: u64,

    /// Arguments to the constructor.
    pub constructor_parameters: Vec<FunctionParameter>,

    /// The memo associated with the contract.
    pub memo: Option<String>,
}

impl CreateContract {
    /// Create a request for `bytecode` with default gas and no constructor arguments.
    pub fn new(admin_key: PrivateKey, bytecode: impl Into<String>) -> Self {
        Self {
            admin_key,
            bytecode: bytecode.into(),
            staked_account_id: None,
            gas: DEFAULT_GAS,
            constructor_parameters: Vec::new(),
            memo: None,
        }
    }
}

/// Outcome of [`create_contract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedContract {
    /// The file holding the bytecode.
    pub file_id: FileId,

    /// The new contract.
    pub contract_id: ContractId,

    /// The status reported by the receipt.
    pub status: Status,
}

/// Deploy a smart contract.
///
/// The bytecode is first stored in a file (chunked if needed), then the contract is
/// instantiated from that file.
///
/// # Errors
/// - [`Error::Remote`] if storing the bytecode or creating the contract fails.
/// - [`Error::MissingReceiptField`] if the receipt has no contract id.
pub async fn create_contract(
    client: &Client,
    request: CreateContract,
) -> crate::Result<CreatedContract> {
    log::debug!("creating contract from {} bytes of bytecode", request.bytecode.len());

    let file = ChunkedPublisher::new(client)
        .publish(
            &request.bytecode,
            std::slice::from_ref(&request.admin_key),
            &FileOptions::default(),
        )
        .await?;

    let mut transaction = ContractCreateTransaction::new();

    transaction
        .gas(request.gas)
        .bytecode_file_id(file.file_id)
        .admin_key(request.admin_key.public_key());

    if !request.constructor_parameters.is_empty() {
        transaction.constructor_parameters(
            encode_parameters(&request.constructor_parameters).to_bytes(None),
        );
    }

    if let Some(staked_account_id) = request.staked_account_id {
        transaction.staked_account_id(staked_account_id);
    }

    if let Some(memo) = request.memo {
        transaction.contract_memo(memo);
    }

    let response = transaction.sign(request.admin_key).execute(client).await?;
    let receipt = response.get_receipt(client).await?;

    let contract_id = receipt
        .contract_id
        .ok_or_else(|| Error::missing_receipt_field(response.transaction_id, "contract_id"))?;

    Ok(CreatedContract { file_id: file.file_id, contract_id, status: receipt.status })
}
