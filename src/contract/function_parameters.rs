// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use hedera::ContractFunctionParameters;
use num_bigint::{
    BigInt,
    BigUint,
};

use crate::Error;

/// The solidity types a [`FunctionParameter`] can carry, named by their textual tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Address,
    AddressArray,
    Bool,
    Bytes,
    Bytes32,
    Bytes32Array,
    BytesArray,
    Int256,
    Int256Array,
    Int32,
    Int32Array,
    Int64,
    Int64Array,
    Int8,
    Int8Array,
    String,
    StringArray,
    Uint256,
    Uint256Array,
    Uint32,
    Uint32Array,
    Uint64,
    Uint64Array,
    Uint8,
    Uint8Array,
}

impl ParameterType {
    /// Every supported type.
    pub const ALL: [Self; 25] = [
        Self::Address,
        Self::AddressArray,
        Self::Bool,
        Self::Bytes,
        Self::Bytes32,
        Self::Bytes32Array,
        Self::BytesArray,
        Self::Int256,
        Self::Int256Array,
        Self::Int32,
        Self::Int32Array,
        Self::Int64,
        Self::Int64Array,
        Self::Int8,
        Self::Int8Array,
        Self::String,
        Self::StringArray,
        Self::Uint256,
        Self::Uint256Array,
        Self::Uint32,
        Self::Uint32Array,
        Self::Uint64,
        Self::Uint64Array,
        Self::Uint8,
        Self::Uint8Array,
    ];

    /// Returns the textual tag of this type, for example `"uint256Array"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::AddressArray => "addressArray",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::Bytes32 => "bytes32",
            Self::Bytes32Array => "bytes32Array",
            Self::BytesArray => "bytesArray",
            Self::Int256 => "int256",
            Self::Int256Array => "int256Array",
            Self::Int32 => "int32",
            Self::Int32Array => "int32Array",
            Self::Int64 => "int64",
            Self::Int64Array => "int64Array",
            Self::Int8 => "int8",
            Self::Int8Array => "int8Array",
            Self::String => "string",
            Self::StringArray => "stringArray",
            Self::Uint256 => "uint256",
            Self::Uint256Array => "uint256Array",
            Self::Uint32 => "uint32",
            Self::Uint32Array => "uint32Array",
            Self::Uint64 => "uint64",
            Self::Uint64Array => "uint64Array",
            Self::Uint8 => "uint8",
            Self::Uint8Array => "uint8Array",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|it| it.as_str() == s)
            .ok_or_else(|| Error::InvalidParameterType(s.to_owned()))
    }
}

/// A single argument to a contract function or constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionParameter {
    /// A 20 byte EVM address, hex encoded.
    Address(String),
    AddressArray(Vec<String>),
    Bool(bool),
    Bytes(Vec<u8>),
    Bytes32([u8; 32]),
    Bytes32Array(Vec<[u8; 32]>),
    BytesArray(Vec<Vec<u8>>),
    Int256(BigInt),
    Int256Array(Vec<BigInt>),
    Int32(i32),
    Int32Array(Vec<i32>),
    Int64(i64),
    Int64Array(Vec<i64>),
    Int8(i8),
    Int8Array(Vec<i8>),
    String(String),
    StringArray(Vec<String>),
    Uint256(BigUint),
    Uint256Array(Vec<BigUint>),
    Uint32(u32),
    Uint32Array(Vec<u32>),
    Uint64(u64),
    Uint64Array(Vec<u64>),
    Uint8(u8),
    Uint8Array(Vec<u8>),
}

impl FunctionParameter {
    /// Returns the type of this parameter.
    #[must_use]
    pub fn parameter_type(&self) -> ParameterType {
        match self {
            Self::Address(_) => ParameterType::Address,
            Self::AddressArray(_) => ParameterType::AddressArray,
            Self::Bool(_) => ParameterType::Bool,
            Self::Bytes(_) => ParameterType::Bytes,
            Self::Bytes32(_) => ParameterType::Bytes32,
            Self::Bytes32Array(_) => ParameterType::Bytes32Array,
            Self::BytesArray(_) => ParameterType::BytesArray,
            Self::Int256(_) => ParameterType::Int256,
            Self::Int256Array(_) => ParameterType::Int256Array,
            Self::Int32(_) => ParameterType::Int32,
            Self::Int32Array(_) => ParameterType::Int32Array,
            Self::Int64(_) => ParameterType::Int64,
            Self::Int64Array(_) => ParameterType::Int64Array,
            Self::Int8(_) => ParameterType::Int8,
            Self::Int8Array(_) => ParameterType::Int8Array,
            Self::String(_) => ParameterType::String,
            Self::StringArray(_) => ParameterType::StringArray,
            Self::Uint256(_) => ParameterType::Uint256,
            Self::Uint256Array(_) => ParameterType::Uint256Array,
            Self::Uint32(_) => ParameterType::Uint32,
            Self::Uint32Array(_) => ParameterType::Uint32Array,
            Self::Uint64(_) => ParameterType::Uint64,
            Self::Uint64Array(_) => ParameterType::Uint64Array,
            Self::Uint8(_) => ParameterType::Uint8,
            Self::Uint8Array(_) => ParameterType::Uint8Array,
        }
    }

    /// Append this parameter to `params`.
    pub fn add_to(&self, params: &mut ContractFunctionParameters) {
        match self {
            Self::Address(it) => params.add_address(it),
            Self::AddressArray(it) => params.add_address_array(&str_slices(it)),
            Self::Bool(it) => params.add_bool(*it),
            Self::Bytes(it) => params.add_bytes(it),
            Self::Bytes32(it) => params.add_bytes32(it),
            Self::Bytes32Array(it) => params.add_bytes32_array(it),
            Self::BytesArray(it) => {
                let it: Vec<&[u8]> = it.iter().map(Vec::as_slice).collect();
                params.add_bytes_array(&it)
            }
            Self::Int256(it) => params.add_int256(it.clone()),
            Self::Int256Array(it) => params.add_int256_array(it),
            Self::Int32(it) => params.add_int32(*it),
            Self::Int32Array(it) => params.add_int32_array(it),
            Self::Int64(it) => params.add_int64(*it),
            Self::Int64Array(it) => params.add_int64_array(it),
            Self::Int8(it) => params.add_int8(*it),
            Self::Int8Array(it) => params.add_int8_array(it),
            Self::String(it) => params.add_string(it),
            Self::StringArray(it) => params.add_string_array(&str_slices(it)),
            Self::Uint256(it) => params.add_uint256(it.clone()),
            Self::Uint256Array(it) => params.add_uint256_array(it),
            Self::Uint32(it) => params.add_uint32(*it),
            Self::Uint32Array(it) => params.add_uint32_array(it),
            Self::Uint64(it) => params.add_uint64(*it),
            Self::Uint64Array(it) => params.add_uint64_array(it),
            Self::Uint8(it) => params.add_uint8(*it),
            Self::Uint8Array(it) => params.add_uint8_array(it),
        };
    }
}

fn str_slices(it: &[String]) -> Vec<&str> {
    it.iter().map(String::as_str).collect()
}

/// Encode `parameters`, in order, into the SDK's parameter builder.
#[must_use]
pub fn encode_parameters(parameters: &[FunctionParameter]) -> ContractFunctionParameters {
    let mut params = ContractFunctionParameters::new();

    for parameter in parameters {
        parameter.add_to(&mut params);
    }

    params
}

#[cfg(feature = "serde")]
mod json {
    use num_bigint::{
        BigInt,
        BigUint,
    };
    use serde_json::Value;

    use super::{
        FunctionParameter,
        ParameterType,
    };
    use crate::Error;

    impl FunctionParameter {
        /// Build a parameter of type `ty` from a JSON value.
        ///
        /// Integers may be JSON numbers or decimal strings (`0x` prefixed hex for 256 bit types).
        /// Byte types and addresses are hex strings with an optional `0x` prefix.
        ///
        /// # Errors
        /// - [`Error::InvalidParameterValue`] if `value` does not fit `ty`.
        pub fn from_json(ty: ParameterType, value: &Value) -> crate::Result<Self> {
            let cx = Cx { ty };

            let param = match ty {
                ParameterType::Address => Self::Address(cx.address(value)?),
                ParameterType::AddressArray => Self::AddressArray(cx.array(value, Cx::address)?),
                ParameterType::Bool => Self::Bool(cx.bool(value)?),
                ParameterType::Bytes => Self::Bytes(cx.bytes(value)?),
                ParameterType::Bytes32 => Self::Bytes32(cx.bytes32(value)?),
                ParameterType::Bytes32Array => Self::Bytes32Array(cx.array(value, Cx::bytes32)?),
                ParameterType::BytesArray => Self::BytesArray(cx.array(value, Cx::bytes)?),
                ParameterType::Int256 => Self::Int256(cx.bigint(value)?),
                ParameterType::Int256Array => Self::Int256Array(cx.array(value, Cx::bigint)?),
                ParameterType::Int32 => Self::Int32(cx.int(value)?),
                ParameterType::Int32Array => Self::Int32Array(cx.array(value, Cx::int)?),
                ParameterType::Int64 => Self::Int64(cx.int(value)?),
                ParameterType::Int64Array => Self::Int64Array(cx.array(value, Cx::int)?),
                ParameterType::Int8 => Self::Int8(cx.int(value)?),
                ParameterType::Int8Array => Self::Int8Array(cx.array(value, Cx::int)?),
                ParameterType::String => Self::String(cx.string(value)?),
                ParameterType::StringArray => Self::StringArray(cx.array(value, Cx::string)?),
                ParameterType::Uint256 => Self::Uint256(cx.biguint(value)?),
                ParameterType::Uint256Array => Self::Uint256Array(cx.array(value, Cx::biguint)?),
                ParameterType::Uint32 => Self::Uint32(cx.uint(value)?),
                ParameterType::Uint32Array => Self::Uint32Array(cx.array(value, Cx::uint)?),
                ParameterType::Uint64 => Self::Uint64(cx.uint(value)?),
                ParameterType::Uint64Array => Self::Uint64Array(cx.array(value, Cx::uint)?),
                ParameterType::Uint8 => Self::Uint8(cx.uint(value)?),
                ParameterType::Uint8Array => Self::Uint8Array(cx.array(value, Cx::uint)?),
            };

            Ok(param)
        }

        /// Build a parameter from a `{"type": "<tag>", "value": <value>}` object.
        ///
        /// # Errors
        /// - [`Error::InvalidParameterType`] if the tag is missing or unrecognized.
        /// - [`Error::InvalidParameterValue`] if the value does not fit the tag.
        pub fn from_tagged_json(tagged: &Value) -> crate::Result<Self> {
            let tag = tagged.get("type").and_then(Value::as_str).unwrap_or_default();
            let ty: ParameterType = tag.parse()?;

            Self::from_json(ty, tagged.get("value").unwrap_or(&Value::Null))
        }
    }

    /// Parse a JSON array of `{"type", "value"}` objects into parameters.
    ///
    /// # Errors
    /// - [`Error::Json`] if `json` is not a JSON array.
    /// - See [`FunctionParameter::from_tagged_json`].
    pub fn parse_parameters(json: &str) -> crate::Result<Vec<FunctionParameter>> {
        let items: Vec<Value> = serde_json::from_str(json)?;

        items.iter().map(FunctionParameter::from_tagged_json).collect()
    }

    #[derive(Clone, Copy)]
    struct Cx {
        ty: ParameterType,
    }

    impl Cx {
        fn err(self, message: impl Into<String>) -> Error {
            Error::invalid_value(self.ty, message)
        }

        fn str(self, value: &Value) -> crate::Result<&str> {
            value.as_str().ok_or_else(|| self.err(format!("expected a string, found `{value}`")))
        }

        fn array<T>(
            self,
            value: &Value,
            item: fn(Self, &Value) -> crate::Result<T>,
        ) -> crate::Result<Vec<T>> {
            let items = value
                .as_array()
                .ok_or_else(|| self.err(format!("expected an array, found `{value}`")))?;

            items.iter().map(|it| item(self, it)).collect()
        }

        fn string(self, value: &Value) -> crate::Result<String> {
            self.str(value).map(str::to_owned)
        }

        fn bool(self, value: &Value) -> crate::Result<bool> {
            value.as_bool().ok_or_else(|| self.err(format!("expected a boolean, found `{value}`")))
        }

        fn bytes(self, value: &Value) -> crate::Result<Vec<u8>> {
            let s = self.str(value)?;

            hex::decode(strip_hex_prefix(s)).map_err(|e| self.err(format!("invalid hex: {e}")))
        }

        fn bytes32(self, value: &Value) -> crate::Result<[u8; 32]> {
            let bytes = self.bytes(value)?;

            <[u8; 32]>::try_from(bytes.as_slice())
                .map_err(|_| self.err(format!("expected 32 bytes, found {}", bytes.len())))
        }

        fn address(self, value: &Value) -> crate::Result<String> {
            let s = self.str(value)?;
            let bytes =
                hex::decode(strip_hex_prefix(s)).map_err(|e| self.err(format!("invalid hex: {e}")))?;

            if bytes.len() != 20 {
                return Err(self.err(format!("expected a 20 byte address, found {} bytes", bytes.len())));
            }

            Ok(s.to_owned())
        }

        fn int<T: TryFrom<i64>>(self, value: &Value) -> crate::Result<T> {
            let n = match value {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }
            .ok_or_else(|| self.err(format!("expected an integer, found `{value}`")))?;

            T::try_from(n).map_err(|_| self.err(format!("`{n}` is out of range")))
        }

        fn uint<T: TryFrom<u64>>(self, value: &Value) -> crate::Result<T> {
            let n = match value {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }
            .ok_or_else(|| self.err(format!("expected an unsigned integer, found `{value}`")))?;

            T::try_from(n).map_err(|_| self.err(format!("`{n}` is out of range")))
        }

        fn bigint(self, value: &Value) -> crate::Result<BigInt> {
            let parsed = match value {
                Value::Number(n) => n.as_i64().map(BigInt::from),
                Value::String(s) => parse_big(s.trim(), BigInt::parse_bytes),
                _ => None,
            };

            parsed.ok_or_else(|| self.err(format!("expected an integer, found `{value}`")))
        }

        fn biguint(self, value: &Value) -> crate::Result<BigUint> {
            let parsed = match value {
                Value::Number(n) => n.as_u64().map(BigUint::from),
                Value::String(s) => parse_big(s.trim(), BigUint::parse_bytes),
                _ => None,
            };

            parsed.ok_or_else(|| self.err(format!("expected an unsigned integer, found `{value}`")))
        }
    }

    fn strip_hex_prefix(s: &str) -> &str {
        s.strip_prefix("0x").unwrap_or(s)
    }

    fn parse_big<T>(s: &str, parse: fn(&[u8], u32) -> Option<T>) -> Option<T> {
        match s.strip_prefix("0x") {
            Some(hex) => parse(hex.as_bytes(), 16),
            None => parse(s.as_bytes(), 10),
        }
    }
}

#[cfg(feature = "serde")]
pub use json::parse_parameters;
