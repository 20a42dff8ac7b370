use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::clients::royale::RoyaleClient;
use crate::core::error::GatewayError;
use crate::core::tool::Tool;
use crate::tools::dispatch;
use crate::tools::endpoints::{Endpoint, ENDPOINTS};

/// A `Tool` backed by one row of the endpoint table.
#[derive(Clone)]
pub struct EndpointTool {
    ep: &'static Endpoint,
    client: RoyaleClient,
}

impl EndpointTool {
    pub fn new(ep: &'static Endpoint, client: RoyaleClient) -> Self {
        Self { ep, client }
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn name(&self) -> &'static str {
        self.ep.name
    }
    fn description(&self) -> &'static str {
        self.ep.description
    }
    fn input_schema(&self) -> serde_json::Value {
        self.ep.input_schema()
    }
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
        dispatch::call_endpoint(&self.client, self.ep, arguments).await
    }
}

pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// Name-indexed view over the endpoint table, shared by the RPC shim.
#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<HashMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    /// One `EndpointTool` per table row, all sharing the same client.
    pub fn from_client(client: RoyaleClient) -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Tool>> = HashMap::new();
        for ep in ENDPOINTS {
            let tool: Arc<dyn Tool> = Arc::new(EndpointTool::new(ep, client.clone()));
            map.insert(tool.name(), tool);
        }
        Self {
            by_name: Arc::new(map),
        }
    }

    pub fn list(&self) -> Vec<ToolMeta> {
        let mut out: Vec<ToolMeta> = self
            .by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
            })
            .collect();
        out.sort_by_key(|m| m.name);
        out
    }

    pub async fn call(
        &self,
        name: &str,
        args: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let tool = self
            .by_name
            .get(name)
            .ok_or_else(|| GatewayError::validation(format!("unknown tool: {name}")))?;
        tool.call(args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn registry(base: String) -> ToolRegistry {
        ToolRegistry::from_client(RoyaleClient::new(base, "t"))
    }

    #[test]
    fn it_registers_every_table_row() {
        let reg = registry("http://localhost:0".into());
        assert_eq!(reg.list().len(), ENDPOINTS.len());
    }

    #[test]
    fn list_is_sorted_and_carries_schemas() {
        let reg = registry("http://localhost:0".into());
        let metas = reg.list();
        let names: Vec<_> = metas.iter().map(|m| m.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(metas.iter().all(|m| m.input_schema["type"] == "object"));
    }

    #[tokio::test]
    async fn call_resolves_by_name() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/cards");
            then.status(200).json_body(json!({"items": []}));
        });
        let reg = registry(server.base_url());
        let out = reg.call("royale.get_cards", &json!({})).await.unwrap();
        assert!(out["items"].is_array());
    }

    #[tokio::test]
    async fn unknown_tool_is_a_validation_error() {
        let reg = registry("http://localhost:0".into());
        let err = reg.call("royale.nope", &json!({})).await.unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("unknown tool"));
    }
}
