// SPDX-License-Identifier: Apache-2.0

use hedera::{
    FileId,
    PrivateKey,
    Status,
};

use super::{
    FileOptions,
    FileStore,
};
use crate::PublisherConfig;

/// The outcome of [`ChunkedPublisher::publish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishResult {
    /// The id of the created file.
    pub file_id: FileId,

    /// The status of the last operation executed, which is the last append
    /// when the content was chunked and the create otherwise.
    pub status: Status,
}

/// Returns the number of bytes `content` occupies on the wire.
///
/// File contents are submitted as UTF-8, so this is the UTF-8 length and not the character count.
#[must_use]
pub fn measure_byte_length(content: &str) -> usize {
    content.len()
}

/// Split `content` into consecutive pieces of at most `chunk_size` characters.
///
/// Concatenating the pieces in order yields `content`.
/// Empty content yields a single empty piece.
#[must_use]
pub fn partition(content: &str, chunk_size: std::num::NonZeroUsize) -> Vec<&str> {
    let chunk_size = chunk_size.get();

    let mut chunks = Vec::with_capacity(content.len() / chunk_size + 1);
    let mut start = 0;

    for (index, (offset, _)) in content.char_indices().enumerate() {
        if index != 0 && index % chunk_size == 0 {
            chunks.push(&content[start..offset]);
            start = offset;
        }
    }

    chunks.push(&content[start..]);

    chunks
}

/// Creates files whose content may exceed the size a single create transaction accepts.
///
/// Oversized content is partitioned; the first chunk creates the file and each
/// remaining chunk is appended to it, one at a time and in order.
///
/// Nothing is rolled back when a step fails: chunks that were already accepted stay in the file.
pub struct ChunkedPublisher<'a, S: ?Sized> {
    store: &'a S,
    config: PublisherConfig,
}

impl<'a, S> ChunkedPublisher<'a, S>
where
    S: FileStore + ?Sized,
{
    /// Create a publisher over `store` using the default chunk size and threshold.
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, PublisherConfig::default())
    }

    /// Create a publisher over `store` using `config`.
    pub fn with_config(store: &'a S, config: PublisherConfig) -> Self {
        Self { store, config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Publish `content` as a new file.
    ///
    /// `signers` sign the create (and their public keys become the file's keys);
    /// the first of them signs every append.
    ///
    /// # Errors
    /// - The first error returned by the store. No further operations are submitted after it.
    pub async fn publish(
        &self,
        content: &str,
        signers: &[PrivateKey],
        options: &FileOptions,
    ) -> Result<PublishResult, S::Error> {
        let size = measure_byte_length(content);

        if size <= self.config.threshold {
            log::debug!("publishing {size} bytes with a single create");

            let created = self.store.create_file(content.as_bytes(), signers, options).await?;

            return Ok(PublishResult { file_id: created.file_id, status: created.status });
        }

        let mut chunks = partition(content, self.config.chunk_size).into_iter();
        let count = chunks.len();

        log::debug!("publishing {size} bytes as {count} chunks");

        let created = self
            .store
            .create_file(chunks.next().unwrap_or_default().as_bytes(), signers, options)
            .await?;

        let file_id = created.file_id;
        let mut status = created.status;

        for (index, chunk) in chunks.enumerate() {
            log::trace!("appending chunk {}/{count} to `{file_id}`", index + 2);

            status = self.store.append_file(file_id, signers.first(), chunk.as_bytes()).await?;
        }

        Ok(PublishResult { file_id, status })
    }
}
