// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Upstream fetcher for the Flxpoint catalog API.
//!
//! Issues exactly one GET against the parent-listings endpoint per lookup
//! and hands the JSON body back untouched.

use anyhow::Context;
use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::error::AppError;
use crate::model::{AttributePayload, LookupContext};

const API_TOKEN_HEADER: &str = "X-API-TOKEN";

/// HTTP client wrapper for talking to the Flxpoint catalog.
#[derive(Clone)]
pub struct FlxpointClient {
    base_url: String,
    client: Client,
}

impl FlxpointClient {
    /// Construct a new upstream client for the given base endpoint.
    ///
    /// No timeout is set; the transport default applies.
    pub fn try_new(base_url: String) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("failed to build Flxpoint client")?;

        Ok(Self { base_url, client })
    }

    /// Fetch extended attribute data for the SKU in `ctx`.
    ///
    /// The token travels only as an outbound header; it never appears in the
    /// returned error text.
    pub async fn fetch_attributes(
        &self,
        ctx: &LookupContext,
    ) -> Result<AttributePayload, AppError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("skus", ctx.sku.as_str()), ("includeAttributes", "true")])
            .header(API_TOKEN_HEADER, &ctx.token)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(sku = %ctx.sku, error = %e, "catalog request failed");
                AppError::upstream(format!("catalog request failed: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            tracing::warn!(sku = %ctx.sku, %status, "catalog returned error status");
            return Err(AppError::upstream(format!(
                "catalog returned status {status}"
            )));
        }

        response
            .json::<AttributePayload>()
            .await
            .map_err(|e| AppError::upstream(format!("failed to parse catalog response: {e}")))
    }
}
