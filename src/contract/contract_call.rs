// SPDX-License-Identifier: Apache-2.0

use hedera::{
    Client,
    ContractCallQuery,
    ContractFunctionResult,
    ContractId,
    Hbar,
};

use super::{
    encode_parameters,
    FunctionParameter,
    DEFAULT_GAS,
};

/// Parameters for [`call_contract`].
#[derive(Debug, Clone)]
pub struct ContractCall {
    /// The contract to call.
    pub contract_id: ContractId,

    /// Name of the function to call.
    pub function_name: String,

    /// Arguments to the function.
    pub parameters: Vec<FunctionParameter>,

    /// Gas available to the call.
    pub gas: u64,

    /// The payment for the node answering the query.
    pub query_payment: Hbar,
}

impl ContractCall {
    /// Create a request calling `function_name` with no arguments.
    pub fn new(contract_id: ContractId, function_name: impl Into<String>) -> Self {
        Self {
            contract_id,
            function_name: function_name.into(),
            parameters: Vec::new(),
            gas: DEFAULT_GAS,
            query_payment: Hbar::new(2),
        }
    }

    /// Sets the arguments to the function.
    #[must_use]
    pub fn parameters(mut self, parameters: Vec<FunctionParameter>) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Outcome of [`call_contract`].
#[derive(Debug, Clone)]
pub struct ContractCallResult {
    /// The contract that was called.
    pub contract_id: ContractId,

    /// What the function returned.
    pub result: ContractFunctionResult,
}

/// Call a function of a contract without changing its state.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the query fails.
pub async fn call_contract(
    client: &Client,
    request: ContractCall,
) -> crate::Result<ContractCallResult> {
    log::debug!("calling `{}` on contract `{}`", request.function_name, request.contract_id);

    let data = encode_parameters(&request.parameters).to_bytes(Some(&request.function_name));

    let result = ContractCallQuery::new()
        .contract_id(request.contract_id)
        .gas(request.gas)
        .payment_amount(request.query_payment)
        .function_parameters(data)
        .execute(client)
        .await?;

    Ok(ContractCallResult { contract_id: request.contract_id, result })
}
