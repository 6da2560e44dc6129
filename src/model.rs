// Copyright 2025 Memophor Labs
// SPDX-License-Identifier: Apache-2.0

//! Request and context types for the relay.
//!
//! Everything here is scoped to a single request; nothing is persisted.

use serde::Deserialize;
use serde_json::value::RawValue;

/// Query parameters accepted by `GET /attributes`.
///
/// `skus` is optional at the extractor level so that a missing parameter
/// reaches the gate and produces the documented 400 body instead of a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct AttributesQuery {
    #[serde(default)]
    pub skus: Option<String>,
}

/// Validated inputs for one upstream lookup.
#[derive(Debug, Clone)]
pub struct LookupContext {
    pub sku: String,
    pub token: String,
}

/// The upstream JSON body, kept as raw text.
///
/// Decoding into `RawValue` proves the payload is JSON while leaving the
/// bytes untouched, so the relay response matches the upstream response
/// exactly.
pub type AttributePayload = Box<RawValue>;
