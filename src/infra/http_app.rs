use axum::{
    routing::{any_service, get, post},
    Router,
};
use std::sync::Arc;

use crate::clients::royale::RoyaleClient;
use crate::infra::runtime::mcp_transport;
use crate::tools::registry::ToolRegistry;
use crate::tools::tool_router::RoyaleSvc;

fn svc_factory(client: RoyaleClient) -> impl Fn() -> (RoyaleSvc, crate::tools::tool_router::RoyaleRouter) + Send + Sync + Clone + 'static {
    move || {
        let handler = RoyaleSvc {
            client: client.clone(),
        };
        (handler, RoyaleSvc::router())
    }
}

/// Default app: `/healthz` + streamable MCP at `/mcp`.
pub fn build_app_default(client: RoyaleClient) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service = mcp_transport::make_streamable_http_service(svc_factory(client), session_mgr);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
}

/// Default app **plus** the deprecated JSON-RPC shim at `/v1/tools`.
pub fn build_app_with_deprecated_api(client: RoyaleClient) -> Router {
    let session_mgr = Arc::new(mcp_transport::LocalSessionManager::default());
    let mcp_service =
        mcp_transport::make_streamable_http_service(svc_factory(client.clone()), session_mgr);
    let registry = ToolRegistry::from_client(client);

    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route_service("/mcp", any_service(mcp_service))
        .route("/v1/tools", post(crate::api::mcp::http))
        .with_state(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthz_responds_ok() {
        let app = build_app_default(RoyaleClient::new("http://localhost:0", "t"));
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(res.status().is_success());
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }
}
