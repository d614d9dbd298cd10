// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;
use hedera::{
    FileContentsQuery,
    FileDeleteTransaction,
    FileId,
    PrivateKey,
    Status,
};
use hedera_services::file::{
    append_file,
    create_file,
    AppendFile,
    CreateFile,
    FileOptions,
};
use hedera_services::Error;

use crate::common::{
    setup_nonfree,
    TestEnvironment,
};

async fn contents(client: &hedera::Client, file_id: FileId) -> anyhow::Result<String> {
    let contents = FileContentsQuery::new().file_id(file_id).execute(client).await?.contents;

    Ok(String::from_utf8(contents)?)
}

async fn delete(client: &hedera::Client, file_id: FileId, key: PrivateKey) -> anyhow::Result<()> {
    FileDeleteTransaction::new()
        .file_id(file_id)
        .sign(key)
        .execute(client)
        .await?
        .get_receipt(client)
        .await?;

    Ok(())
}

#[tokio::test]
async fn small_file() -> anyhow::Result<()> {
    let Some(TestEnvironment { config, client }) = setup_nonfree() else {
        return Ok(());
    };

    let op = &config.operator;

    let result = create_file(
        &client,
        CreateFile {
            admin_keys: vec![op.private_key.clone()],
            contents: "[e2e::create_file]".to_owned(),
            options: FileOptions { memo: Some("small".to_owned()), ..FileOptions::default() },
        },
    )
    .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(contents(&client, result.file_id).await?, "[e2e::create_file]");

    delete(&client, result.file_id, op.private_key.clone()).await
}

#[tokio::test]
async fn chunked_file() -> anyhow::Result<()> {
    let Some(TestEnvironment { config: _, client }) = setup_nonfree() else {
        return Ok(());
    };

    let key = PrivateKey::generate_ed25519();
    let body: String = (0..12_000).map(|it| char::from(b'0' + (it % 10) as u8)).collect();

    let result = create_file(
        &client,
        CreateFile {
            admin_keys: vec![key.clone()],
            contents: body.clone(),
            options: FileOptions::default(),
        },
    )
    .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(contents(&client, result.file_id).await?, body);

    delete(&client, result.file_id, key).await
}

#[tokio::test]
async fn append() -> anyhow::Result<()> {
    let Some(TestEnvironment { config: _, client }) = setup_nonfree() else {
        return Ok(());
    };

    let key = PrivateKey::generate_ed25519();

    let created = create_file(
        &client,
        CreateFile {
            admin_keys: vec![key.clone()],
            contents: "head ".to_owned(),
            options: FileOptions::default(),
        },
    )
    .await?;

    let appended = append_file(
        &client,
        AppendFile { file_id: created.file_id, admin_key: key.clone(), contents: "tail".to_owned() },
    )
    .await?;

    assert_eq!(appended.file_id, created.file_id);
    assert_eq!(contents(&client, created.file_id).await?, "head tail");

    delete(&client, created.file_id, key).await
}

#[tokio::test]
async fn append_with_wrong_key_fails() -> anyhow::Result<()> {
    let Some(TestEnvironment { config: _, client }) = setup_nonfree() else {
        return Ok(());
    };

    let key = PrivateKey::generate_ed25519();

    let created = create_file(
        &client,
        CreateFile {
            admin_keys: vec![key.clone()],
            contents: String::new(),
            options: FileOptions::default(),
        },
    )
    .await?;

    let res = append_file(
        &client,
        AppendFile {
            file_id: created.file_id,
            admin_key: PrivateKey::generate_ed25519(),
            contents: "nope".to_owned(),
        },
    )
    .await;

    assert_matches!(
        res,
        Err(Error::Remote(hedera::Error::ReceiptStatus { status: Status::InvalidSignature, .. }))
    );

    delete(&client, created.file_id, key).await
}
