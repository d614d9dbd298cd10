// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use hedera::{
    Client,
    FileAppendTransaction,
    FileCreateTransaction,
    FileId,
    PrivateKey,
    Status,
};
use time::OffsetDateTime;

use crate::Error;

/// Optional properties of a newly created file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// The instant at which the file will expire, after which its contents are no longer available.
    pub expiration_time: Option<OffsetDateTime>,

    /// Short publicly visible memo about the file.
    pub memo: Option<String>,
}

/// Outcome of a successful file create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCreated {
    /// The id of the newly created file.
    pub file_id: FileId,

    /// The status reported by the receipt.
    pub status: Status,
}

/// The remote operations a [`ChunkedPublisher`](crate::ChunkedPublisher) sequences.
///
/// Both operations must wait for the outcome of the submission (the receipt)
/// before returning, so that a returned `Ok` means the bytes are durably part of the file.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// The failure reported by this store.
    type Error: Send;

    /// Create a file holding `contents`.
    ///
    /// The public keys of `signers` become the file's key list and every signer signs the create.
    async fn create_file(
        &self,
        contents: &[u8],
        signers: &[PrivateKey],
        options: &FileOptions,
    ) -> Result<FileCreated, Self::Error>;

    /// Append `contents` to the end of the file `file_id`.
    async fn append_file(
        &self,
        file_id: FileId,
        signer: Option<&PrivateKey>,
        contents: &[u8],
    ) -> Result<Status, Self::Error>;
}

#[async_trait]
impl FileStore for Client {
    type Error = Error;

    async fn create_file(
        &self,
        contents: &[u8],
        signers: &[PrivateKey],
        options: &FileOptions,
    ) -> crate::Result<FileCreated> {
        let mut transaction = FileCreateTransaction::new();

        transaction.keys(signers.iter().map(PrivateKey::public_key)).contents(contents.to_vec());

        if let Some(expiration_time) = options.expiration_time {
            transaction.expiration_time(expiration_time);
        }

        if let Some(memo) = &options.memo {
            transaction.file_memo(memo.clone());
        }

        for signer in signers {
            transaction.sign(signer.clone());
        }

        let response = transaction.execute(self).await?;
        let receipt = response.get_receipt(self).await?;

        let file_id = receipt
            .file_id
            .ok_or_else(|| Error::missing_receipt_field(response.transaction_id, "file_id"))?;

        Ok(FileCreated { file_id, status: receipt.status })
    }

    async fn append_file(
        &self,
        file_id: FileId,
        signer: Option<&PrivateKey>,
        contents: &[u8],
    ) -> crate::Result<Status> {
        let mut transaction = FileAppendTransaction::new();

        transaction.file_id(file_id).contents(contents.to_vec());

        if let Some(signer) = signer {
            transaction.sign(signer.clone());
        }

        // the SDK splits oversized appends further; every piece must land before we report back
        let responses = transaction.execute_all(self).await?;

        let Some(last) = responses.last() else {
            return Err(Error::NothingSubmitted);
        };

        Ok(last.get_receipt(self).await?.status)
    }
}
