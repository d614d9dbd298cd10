// SPDX-License-Identifier: Apache-2.0

mod chunked_publisher;
mod file_store;

pub use chunked_publisher::{
    measure_byte_length,
    partition,
    ChunkedPublisher,
    PublishResult,
};
pub use file_store::{
    FileCreated,
    FileOptions,
    FileStore,
};
use hedera::{
    Client,
    FileId,
    PrivateKey,
    Status,
};

use crate::PublisherConfig;

/// Parameters for [`create_file`].
#[derive(Debug, Clone)]
pub struct CreateFile {
    /// Keys allowed to change the file. All of them sign the create; the first signs any appends.
    pub admin_keys: Vec<PrivateKey>,

    /// The content of the file.
    ///
    /// For contract bytecode this is the hex `bytecode` string of the compiler output.
    pub contents: String,

    /// Expiration time and memo.
    pub options: FileOptions,
}

/// Parameters for [`append_file`].
#[derive(Debug, Clone)]
pub struct AppendFile {
    /// The file to append to.
    pub file_id: FileId,

    /// A key of the file's key list.
    pub admin_key: PrivateKey,

    /// The content to append.
    pub contents: String,
}

/// Outcome of [`append_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendedFile {
    /// The file that was appended to.
    pub file_id: FileId,

    /// The status reported by the receipt.
    pub status: Status,
}

/// Create a new file on the network.
///
/// Contents over 5500 bytes are chunked: the first chunk creates the file and
/// the rest are appended one by one (see [`ChunkedPublisher`]).
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the create or any append fails;
///   the file may then exist with only part of its contents.
pub async fn create_file(client: &Client, request: CreateFile) -> crate::Result<PublishResult> {
    create_file_with(client, PublisherConfig::default(), request).await
}

/// Like [`create_file`], with an explicit chunking configuration.
///
/// # Errors
/// - See [`create_file`].
pub async fn create_file_with(
    client: &Client,
    config: PublisherConfig,
    request: CreateFile,
) -> crate::Result<PublishResult> {
    log::debug!("creating file of {} bytes", request.contents.len());

    ChunkedPublisher::with_config(client, config)
        .publish(&request.contents, &request.admin_keys, &request.options)
        .await
}

/// Append content to the end of an existing file.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the append fails.
pub async fn append_file(client: &Client, request: AppendFile) -> crate::Result<AppendedFile> {
    log::debug!("appending {} bytes to file `{}`", request.contents.len(), request.file_id);

    let status = client
        .append_file(request.file_id, Some(&request.admin_key), request.contents.as_bytes())
        .await?;

    Ok(AppendedFile { file_id: request.file_id, status })
}
