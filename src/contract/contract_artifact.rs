// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

/// The parts of a compiled contract (solc / hardhat / truffle JSON output) needed to deploy it.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Name of the contract, when the compiler recorded it.
    #[serde(default)]
    pub contract_name: Option<String>,

    bytecode: String,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON text.
    ///
    /// # Errors
    /// - [`Error::Json`](crate::Error::Json) if the text is not JSON or has no `bytecode` string.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse an artifact file.
    ///
    /// # Errors
    /// - [`Error::Json`](crate::Error::Json) if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let file = std::fs::File::open(path).map_err(serde_json::Error::io)?;

        Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
    }

    /// Returns the hex encoded bytecode without any `0x` prefix.
    #[must_use]
    pub fn bytecode(&self) -> &str {
        self.bytecode.strip_prefix("0x").unwrap_or(&self.bytecode)
    }
}
