// SPDX-License-Identifier: Apache-2.0

use hedera::{
    Client,
    ContractExecuteTransaction,
    ContractId,
    Hbar,
    Status,
};

use super::{
    encode_parameters,
    FunctionParameter,
    DEFAULT_GAS,
};

/// Parameters for [`execute_contract`].
#[derive(Debug, Clone)]
pub struct ContractExecute {
    /// The contract to execute.
    pub contract_id: ContractId,

    /// Name of the function to execute.
    pub function_name: String,

    /// Arguments to the function.
    pub parameters: Vec<FunctionParameter>,

    /// Gas available to the call.
    pub gas: u64,

    /// Hbar sent along with the call; the function must be payable when this is set.
    pub payable_amount: Option<Hbar>,
}

impl ContractExecute {
    /// Create a request executing `function_name` with no arguments.
    pub fn new(contract_id: ContractId, function_name: impl Into<String>) -> Self {
        Self {
            contract_id,
            function_name: function_name.into(),
            parameters: Vec::new(),
            gas: DEFAULT_GAS,
            payable_amount: None,
        }
    }

    /// Sets the arguments to the function.
    #[must_use]
    pub fn parameters(mut self, parameters: Vec<FunctionParameter>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Outcome of [`execute_contract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractExecution {
    /// The contract that was executed.
    pub contract_id: ContractId,

    /// The function that was executed.
    pub function_name: String,

    /// The receipt status of the execution.
    pub status: Status,
}

/// Execute a state changing function of a contract.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the transaction or its receipt fails.
pub async fn execute_contract(
    client: &Client,
    request: ContractExecute,
) -> crate::Result<ContractExecution> {
    log::debug!("executing `{}` on contract `{}`", request.function_name, request.contract_id);

    let data = encode_parameters(&request.parameters).to_bytes(Some(&request.function_name));

    let mut transaction = ContractExecuteTransaction::new();

    transaction.contract_id(request.contract_id).gas(request.gas).function_parameters(data);

    if let Some(amount) = request.payable_amount {
        transaction.payable_amount(amount);
    }

    let receipt = transaction.execute(client).await?.get_receipt(client).await?;

    Ok(ContractExecution {
        contract_id: request.contract_id,
        function_name: request.function_name,
        status: receipt.status,
    })
}
