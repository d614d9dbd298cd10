// SPDX-License-Identifier: Apache-2.0

use crate::contract::ParameterType;

/// `Result<T, Error>`
pub type Result<T> = std::result::Result<T, Error>;

/// Represents any possible error from a service function.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A request to the network failed.
    ///
    /// This covers transport failures, pre-check failures and failing receipts,
    /// exactly as reported by the SDK.
    #[error(transparent)]
    Remote(#[from] hedera::Error),

    /// A chunked submission to the network produced no transactions.
    #[error("no transactions were submitted")]
    NothingSubmitted,

    /// A contract parameter type tag was not recognized.
    #[error("unrecognized contract parameter type `{0}`")]
    InvalidParameterType(String),

    /// A contract parameter value does not fit its declared type.
    #[error("invalid value for contract parameter of type `{ty}`: {message}")]
    InvalidParameterValue {
        /// The declared type of the parameter.
        ty: ParameterType,

        /// What was wrong with the value.
        message: String,
    },

    /// A successful receipt did not contain the entity id the transaction should have created.
    #[error("receipt for `{transaction_id}` has no `{field}`")]
    MissingReceiptField {
        /// Id of the transaction whose receipt was inspected.
        transaction_id: hedera::TransactionId,

        /// Name of the missing receipt field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("environment variable `{0}` is not set")]
    MissingEnv(&'static str),

    /// A configuration value could not be parsed.
    #[error("invalid `{field}` in configuration: {source}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,

        /// The parse failure.
        #[source]
        source: hedera::Error,
    },

    /// A JSON document (configuration, parameters or a contract artifact) failed to parse.
    #[cfg(feature = "serde")]
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_value(ty: ParameterType, message: impl Into<String>) -> Self {
        Self::InvalidParameterValue { ty, message: message.into() }
    }

    pub(crate) fn missing_receipt_field(
        transaction_id: hedera::TransactionId,
        field: &'static str,
    ) -> Self {
        Self::MissingReceiptField { transaction_id, field }
    }
}
