//! RPC Dispatcher
//!
//! Builds the `{"method", "params"}` envelope the daemon expects, posts it,
//! and unwraps `result` or turns `error` into [`LbryError::Rpc`].
//!
//! The `error` key is checked before the HTTP status: a daemon error body
//! wins regardless of status. A non-2xx response without one is reported as
//! [`LbryError::HttpStatus`] rather than decoded as a result.

use crate::error::{LbryError, Result};
use crate::transport::{Transport, TransportResponse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    pub params: Map<String, Value>,
}

impl RpcRequest {
    /// Build an envelope from any parameter value encoding as a JSON object
    ///
    /// `()` and `null` mean "no parameters" and become `{}`.
    pub fn new<P: Serialize>(method: impl Into<String>, params: P) -> Result<Self> {
        let params = match serde_json::to_value(params)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(LbryError::Validation(format!(
                    "params must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(Self {
            method: method.into(),
            params,
        })
    }

    pub fn to_body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Error object carried by a failed response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i32,
    pub message: String,
}

/// Interpret a response body
///
/// Returns the raw `result` value (`null` if absent).
pub fn parse_response(response: &TransportResponse) -> Result<Value> {
    let status = response.status;
    let success = response.is_success();

    let mut envelope: Map<String, Value> = match serde_json::from_slice(&response.body) {
        Ok(Value::Object(map)) => map,
        Ok(_) if !success => return Err(LbryError::HttpStatus { status }),
        Ok(other) => {
            return Err(LbryError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
        Err(_) if !success => return Err(LbryError::HttpStatus { status }),
        Err(e) => return Err(LbryError::MalformedResponse(e.to_string())),
    };

    if let Some(error) = envelope.remove("error") {
        let error: RpcErrorObject = serde_json::from_value(error)
            .map_err(|e| LbryError::MalformedResponse(format!("invalid error object: {}", e)))?;
        return Err(LbryError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    if !success {
        return Err(LbryError::HttpStatus { status });
    }

    Ok(envelope.remove("result").unwrap_or(Value::Null))
}

/// Generic request dispatcher
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Call `method` and return the untyped `result`
    pub async fn call_value<P: Serialize>(&self, method: &str, params: P) -> Result<Value> {
        let request = RpcRequest::new(method, params)?;
        let body = request.to_body()?;

        debug!(method, params = request.params.len(), "Dispatching RPC call");
        trace!(body = %String::from_utf8_lossy(&body), "RPC request body");

        let response = self.transport.post(body).await?;
        trace!(
            status = response.status,
            body = %String::from_utf8_lossy(&response.body),
            "RPC response body"
        );

        match parse_response(&response) {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(method, status = response.status, error = %e, "RPC call failed");
                Err(e)
            }
        }
    }

    /// Call `method` and decode `result` into `R`
    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let value = self.call_value(method, params).await?;
        Ok(serde_json::from_value(value)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
