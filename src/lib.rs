// SPDX-License-Identifier: Apache-2.0

//! Convenience services over the Hedera SDK.
//!
//! Every service takes a [`hedera::Client`] by reference; build one with
//! [`ClientConfig::into_client`] at startup and pass it down.
//!
//! Files larger than a single transaction accepts are created with a
//! [`ChunkedPublisher`], which creates the file from the first chunk and appends
//! the rest in order.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod account;
mod config;
pub mod contract;
mod error;
pub mod file;
pub mod token;

pub use config::{
    ClientConfig,
    PublisherConfig,
    DEFAULT_CHUNK_SIZE,
    DEFAULT_CHUNK_THRESHOLD,
};
pub use error::{
    Error,
    Result,
};
pub use file::{
    ChunkedPublisher,
    FileStore,
    PublishResult,
};
