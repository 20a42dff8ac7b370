use async_trait::async_trait;

use crate::core::error::GatewayError;

/// A named, schema-described callable exposed to an agent.
///
/// Implementations resolve their behavior from the endpoint table; the trait
/// exists so the RPC shim and registry stay decoupled from how a tool is
/// backed.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_schema(&self) -> serde_json::Value;
    async fn call(&self, arguments: &serde_json::Value) -> Result<serde_json::Value, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Tool for Echo {
        fn name(&self) -> &'static str {
            "test.echo"
        }
        fn description(&self) -> &'static str {
            "echo tool"
        }
        fn input_schema(&self) -> serde_json::Value {
            json!({"type":"object"})
        }
        async fn call(&self, args: &serde_json::Value) -> Result<serde_json::Value, GatewayError> {
            Ok(args.clone())
        }
    }

    #[tokio::test]
    async fn it_runs_echo() {
        let t = Echo;
        let out = t.call(&json!({"x":1})).await.unwrap();
        assert_eq!(out["x"], 1);
    }
}
