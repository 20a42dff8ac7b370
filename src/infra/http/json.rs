use axum::Json;
use serde_json::json;

use crate::core::error::GatewayError;
use crate::core::mcp::{err as rpc_err, ok as rpc_ok, RpcErr, RpcResp};

pub fn ok(id: serde_json::Value, result: serde_json::Value) -> Json<RpcResp> {
    Json(rpc_ok(id, result))
}

pub fn error(id: serde_json::Value, code: i32, message: impl Into<String>) -> Json<RpcResp> {
    Json(rpc_err(id, code, message, None))
}

pub fn parse_error(message: impl Into<String>) -> Json<RpcResp> {
    Json(RpcResp {
        jsonrpc: "2.0",
        id: serde_json::Value::Null,
        result: None,
        error: Some(RpcErr {
            code: -32700,
            message: message.into(),
            data: None,
        }),
    })
}

/// Map a GatewayError onto JSON-RPC: validation failures become invalid
/// params (-32602); upstream failures keep their status and raw body in the
/// error data (-32000 application error).
pub fn from_gateway_error(id: serde_json::Value, err: GatewayError) -> Json<RpcResp> {
    match err {
        GatewayError::Validation(msg) => error(id, -32602, msg),
        GatewayError::Upstream { status, body } => Json(rpc_err(
            id,
            -32000,
            format!("upstream returned {status}"),
            Some(json!({ "status": status, "body": body })),
        )),
        other => error(id, -32000, other.to_string()),
    }
}
