//! Upstream owned-object queries.
//!
//! [`ObjectSource`] is the seam the classifier reads through; [`SuiRpcClient`]
//! serves it from a fullnode's JSON-RPC endpoint.

use crate::config::NetworkConfig;
use crate::error::{RafflekitError, Result};
use crate::types::RawObject;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

const OWNED_OBJECTS_METHOD: &str = "suix_getOwnedObjects";

#[async_trait]
pub trait ObjectSource: Send + Sync {
    /// Every object owned by `owner`, with type, display and content.
    async fn owned_objects(&self, owner: &str) -> Result<Vec<RawObject>>;

    /// Objects owned by `owner` whose struct type matches `type_pattern`.
    async fn owned_objects_by_type(&self, owner: &str, type_pattern: &str)
        -> Result<Vec<RawObject>>;
}

/// Checks that `address` is `0x` followed by 1 to 64 hex digits.
pub fn validate_address(address: &str) -> Result<()> {
    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| RafflekitError::InvalidAddress(address.to_string()))?;

    if hex.is_empty() || hex.len() > 64 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(RafflekitError::InvalidAddress(address.to_string()));
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ObjectPage {
    #[serde(default)]
    data: Vec<Value>,
    #[serde(default)]
    has_next_page: bool,
}

/// Converts response entries, skipping malformed ones.
pub(crate) fn parse_entries(entries: &[Value]) -> Vec<RawObject> {
    entries
        .iter()
        .filter_map(|entry| match RawObject::from_response(entry) {
            Ok(object) => Some(object),
            Err(e) => {
                tracing::warn!("Skipping malformed object: {}", e);
                None
            }
        })
        .collect()
}

pub struct SuiRpcClient {
    client: reqwest::Client,
    config: NetworkConfig,
}

impl SuiRpcClient {
    pub fn new(config: NetworkConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                RafflekitError::network_connection(format!("Failed to create RPC client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn rpc_url(&self) -> &str {
        &self.config.rpc_url
    }

    async fn query_owned(&self, owner: &str, filter: Option<Value>) -> Result<Vec<RawObject>> {
        validate_address(owner)?;

        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": OWNED_OBJECTS_METHOD,
            "params": [
                owner,
                {
                    "filter": filter,
                    "options": {
                        "showType": true,
                        "showDisplay": true,
                        "showContent": true
                    }
                },
                Value::Null,
                self.config.page_limit
            ]
        });

        let response = self
            .client
            .post(&self.config.rpc_url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: RpcResponse<ObjectPage> = response.json().await?;

        if let Some(error) = body.error {
            return Err(RafflekitError::rpc(error.code, error.message));
        }

        let page = body
            .result
            .ok_or_else(|| RafflekitError::internal("RPC response carried neither result nor error"))?;

        if page.has_next_page {
            tracing::debug!(
                "Owned objects for {} exceed one page of {}, later pages ignored",
                owner,
                self.config.page_limit
            );
        }

        Ok(parse_entries(&page.data))
    }
}

#[async_trait]
impl ObjectSource for SuiRpcClient {
    async fn owned_objects(&self, owner: &str) -> Result<Vec<RawObject>> {
        self.query_owned(owner, None).await
    }

    async fn owned_objects_by_type(
        &self,
        owner: &str,
        type_pattern: &str,
    ) -> Result<Vec<RawObject>> {
        self.query_owned(owner, Some(json!({ "StructType": type_pattern })))
            .await
    }
}
