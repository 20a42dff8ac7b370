//! Deprecated JSON-RPC shim over the tool registry.
//!
//! Predates the streamable MCP mount at `/mcp`; kept for callers that speak
//! plain request/response JSON-RPC. Disabled by setting `DEPRECATE_REST`.

use axum::Json;
use serde_json::{json, Value as J};

use crate::core::error::GatewayError;
use crate::core::mcp::{RpcReq, RpcResp};
use crate::infra::http::json as http_json;
use crate::tools::registry::ToolRegistry;

fn tools_list(reg: &ToolRegistry) -> J {
    let tools: Vec<J> = reg
        .list()
        .into_iter()
        .map(|t| {
            json!({ "name": t.name, "description": t.description, "inputSchema": t.input_schema })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(reg: &ToolRegistry, params: &J) -> Result<J, GatewayError> {
    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| GatewayError::validation("missing tool name"))?;
    let args = params.get("arguments").cloned().unwrap_or(J::Null);
    reg.call(name, &args).await
}

pub async fn http(
    axum::extract::State(reg): axum::extract::State<ToolRegistry>,
    body: String,
) -> Json<RpcResp> {
    // Parse by hand so a malformed body still gets a JSON-RPC envelope
    // (-32700) instead of the extractor's plain 400.
    let req: RpcReq = match serde_json::from_str(&body) {
        Ok(r) => r,
        Err(e) => return http_json::parse_error(format!("parse error: {e}")),
    };
    tracing::debug!(method = %req.method, id = ?req.id, "RPC shim invoked");
    let id = req.id.clone();
    let resp = match req.method.as_str() {
        "initialize" => http_json::ok(
            id,
            json!({ "serverInfo": { "name": "royale-mcp-gateway", "version": env!("CARGO_PKG_VERSION") }, "capabilities": {} }),
        ),
        "shutdown" => http_json::ok(id, J::Null),
        "tools.list" | "tools/list" => http_json::ok(id, tools_list(&reg)),
        "tools.call" | "tools/call" => match call_tool(&reg, &req.params).await {
            Ok(out) => http_json::ok(id, out),
            Err(e) => {
                tracing::warn!(error = %e, "tools.call failed");
                http_json::from_gateway_error(id, e)
            }
        },
        _ => http_json::error(id, -32601, format!("unknown method: {}", req.method)),
    };
    resp
}
