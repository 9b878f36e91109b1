//! AWS Secrets Manager store backend.
//!
//! Enabled by the default `aws` feature.
//!
//! ## Credentials
//!
//! Uses the default AWS credential provider chain, so whatever the workflow
//! set up before this step (for example an assumed OIDC role exported as
//! `AWS_ACCESS_KEY_ID` etc.) is picked up. The region comes from
//! `AWS_REGION`/`AWS_DEFAULT_REGION` unless overridden.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::types::SecretValueEntry;
use aws_sdk_secretsmanager::Client;
use tracing::{debug, trace};

use super::{BatchOutcome, FetchFailure, SecretStore};
use crate::core::constants::{BATCH_SIZE, LIST_PAGE_SIZE};
use crate::core::domain::Secret;
use crate::core::types::SecretId;
use crate::error::{Result, StoreError};

/// Overrides applied on top of the default AWS configuration.
#[derive(Debug, Clone, Default)]
pub struct AwsSettings {
    /// Region to use instead of the environment's
    pub region: Option<String>,
    /// Custom endpoint, e.g. a LocalStack URL
    pub endpoint_url: Option<String>,
}

/// AWS Secrets Manager backend
#[derive(Debug, Clone)]
pub struct AwsSecretsManager {
    client: Client,
}

impl AwsSecretsManager {
    /// Load AWS configuration from the environment and build a client.
    pub async fn connect(settings: &AwsSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(url) = &settings.endpoint_url {
            loader = loader.endpoint_url(url.clone());
        }
        let config = loader.load().await;

        debug!(
            region = ?config.region().map(|r| r.as_ref().to_string()),
            endpoint = ?settings.endpoint_url,
            "created secrets manager client"
        );

        Self {
            client: Client::new(&config),
        }
    }

    /// One batch of at most `BATCH_SIZE` identifiers, following `NextToken`.
    async fn get_chunk(&self, ids: &[SecretId], outcome: &mut BatchOutcome) -> Result<()> {
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .batch_get_secret_value()
                .set_secret_id_list(Some(ids.to_vec()))
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| StoreError::Fetch(DisplayErrorContext(&e).to_string()))?;

            for entry in page.secret_values() {
                match secret_from_entry(entry) {
                    Ok(secret) => outcome.secrets.push(secret),
                    Err(failure) => outcome.failures.push(failure),
                }
            }

            for error in page.errors() {
                outcome.failures.push(FetchFailure::new(
                    error.secret_id().unwrap_or_default(),
                    error.error_code().unwrap_or("UnknownError"),
                    error.message().unwrap_or_default(),
                ));
            }

            match page.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => return Ok(()),
            }
        }
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManager {
    async fn list_secret_ids(&self) -> Result<Vec<SecretId>> {
        let mut ids = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_secrets()
                .max_results(LIST_PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| StoreError::List(DisplayErrorContext(&e).to_string()))?;

            ids.extend(
                page.secret_list()
                    .iter()
                    .filter_map(|entry| entry.name())
                    .map(str::to_string),
            );
            trace!(listed = ids.len(), "listed secrets page");

            match page.next_token() {
                Some(token) => next_token = Some(token.to_string()),
                None => break,
            }
        }

        debug!(count = ids.len(), "listed secrets");
        Ok(ids)
    }

    async fn batch_get(&self, ids: &[SecretId]) -> Result<BatchOutcome> {
        let mut outcome = BatchOutcome::default();

        for chunk in batches(ids) {
            trace!(batch = chunk.len(), "fetching secret batch");
            self.get_chunk(chunk, &mut outcome).await?;
        }

        debug!(
            fetched = outcome.secrets.len(),
            failed = outcome.failures.len(),
            "fetched secret values"
        );
        Ok(outcome)
    }
}

/// Split a request into the batches one `BatchGetSecretValue` call accepts.
fn batches(ids: &[SecretId]) -> std::slice::Chunks<'_, SecretId> {
    ids.chunks(BATCH_SIZE)
}

/// Convert one batch entry, accepting binary values only when valid UTF-8.
fn secret_from_entry(entry: &SecretValueEntry) -> std::result::Result<Secret, FetchFailure> {
    let id = entry.name().or(entry.arn()).unwrap_or_default();

    if let Some(value) = entry.secret_string() {
        return Ok(Secret::new(id, value));
    }

    match entry.secret_binary() {
        Some(blob) => String::from_utf8(blob.as_ref().to_vec())
            .map(|value| Secret::new(id, value))
            .map_err(|_| {
                FetchFailure::new(id, "InvalidBinaryValue", "binary value is not valid UTF-8")
            }),
        None => Err(FetchFailure::new(id, "EmptyValue", "secret has no value")),
    }
}
