// SPDX-License-Identifier: Apache-2.0

#[cfg(feature = "serde")]
mod contract_artifact;
mod contract_call;
mod contract_create;
mod contract_execute;
mod function_parameters;

#[cfg(feature = "serde")]
pub use contract_artifact::ContractArtifact;
pub use contract_call::{
    call_contract,
    ContractCall,
    ContractCallResult,
};
pub use contract_create::{
    create_contract,
    CreateContract,
    CreatedContract,
};
pub use contract_execute::{
    execute_contract,
    ContractExecute,
    ContractExecution,
};
#[cfg(feature = "serde")]
pub use function_parameters::parse_parameters;
pub use function_parameters::{
    encode_parameters,
    FunctionParameter,
    ParameterType,
};

/// Gas supplied to contract creates, calls and executes unless the request says otherwise.
pub const DEFAULT_GAS: u64 = 100_000_000;
