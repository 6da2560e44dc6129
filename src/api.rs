// Copyright 2025 Memophor Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! HTTP API handlers for the relay.
//!
//! - `GET /` - Liveness probe
//! - `GET /attributes` - Validated pass-through to the Flxpoint catalog
//!
//! The attributes path is a straight line: gate the query against process
//! configuration, fetch once from upstream, relay the body.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::model::{AttributePayload, AttributesQuery, LookupContext};
use crate::upstream::FlxpointClient;

#[derive(Clone)]
pub struct AppState {
    pub upstream: FlxpointClient,
    pub flxpoint_token: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/attributes", get(handle_attributes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe
pub async fn root() -> &'static str {
    "Hello World"
}

/// Look up product attributes for one SKU
pub async fn handle_attributes(
    State(state): State<AppState>,
    Query(query): Query<AttributesQuery>,
) -> Result<Json<AttributePayload>, AppError> {
    let ctx = validate_lookup(query, state.flxpoint_token.as_deref())?;
    let attributes = state.upstream.fetch_attributes(&ctx).await?;

    Ok(Json(attributes))
}

/// Gate a raw query into a validated lookup context.
///
/// No outbound call happens unless both the SKU and the token are present.
fn validate_lookup(
    query: AttributesQuery,
    token: Option<&str>,
) -> Result<LookupContext, AppError> {
    let sku = query.skus.unwrap_or_default();
    if sku.trim().is_empty() {
        return Err(AppError::validation("SKU is required"));
    }

    let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
        return Err(AppError::configuration(
            "FLXPOINT_TOKEN is not defined in environment variables",
        ));
    };

    Ok(LookupContext {
        sku,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(skus: Option<&str>) -> AttributesQuery {
        AttributesQuery {
            skus: skus.map(str::to_string),
        }
    }

    #[test]
    fn missing_sku_is_rejected() {
        let err = validate_lookup(query(None), Some("token")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn blank_sku_is_rejected() {
        let err = validate_lookup(query(Some("   ")), Some("token")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_token_is_a_configuration_error() {
        let err = validate_lookup(query(Some("ABC123")), None).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn valid_inputs_build_a_context() {
        let ctx = validate_lookup(query(Some("ABC123")), Some("secret")).unwrap();
        assert_eq!(ctx.sku, "ABC123");
        assert_eq!(ctx.token, "secret");
    }
}
