// SPDX-License-Identifier: Apache-2.0

use hedera::{
    AccountId,
    Client,
    Hbar,
    PrivateKey,
    Status,
    TransferTransaction,
};

/// Parameters for [`transfer_hbar`].
#[derive(Debug, Clone)]
pub struct TransferHbar {
    /// The account hbar is sent from.
    pub sender_account_id: AccountId,

    /// Signs for the sender.
    pub sender_key: PrivateKey,

    /// The account receiving the hbar.
    pub recipient_account_id: AccountId,

    /// How much to send.
    pub amount: Hbar,
}

/// Outcome of [`transfer_hbar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HbarTransfer {
    /// The account debited.
    pub sender_account_id: AccountId,

    /// The account credited.
    pub recipient_account_id: AccountId,

    /// The amount moved.
    pub amount: Hbar,

    /// The receipt status of the transfer.
    pub status: Status,
}

fn build_transfer(request: &TransferHbar) -> TransferTransaction {
    let mut transaction = TransferTransaction::new();

    transaction
        .hbar_transfer(request.sender_account_id, -request.amount)
        .hbar_transfer(request.recipient_account_id, request.amount);

    transaction
}

/// Transfer hbar from one account to another.
///
/// The operator pays the transaction fee; the sender key signs the debit.
///
/// # Errors
/// - [`Error::Remote`](crate::Error::Remote) if the transaction or its receipt fails.
pub async fn transfer_hbar(client: &Client, request: TransferHbar) -> crate::Result<HbarTransfer> {
    log::debug!(
        "transferring {} from `{}` to `{}`",
        request.amount,
        request.sender_account_id,
        request.recipient_account_id
    );

    let receipt = build_transfer(&request)
        .sign(request.sender_key)
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    Ok(HbarTransfer {
        sender_account_id: request.sender_account_id,
        recipient_account_id: request.recipient_account_id,
        amount: request.amount,
        status: receipt.status,
    })
}
