//! rmcp tool router for the Clash Royale endpoints.
//!
//! Each tool method is a thin stub: the macro gives rmcp a named route, and
//! the body delegates straight to the generic dispatcher keyed by the same
//! name in the endpoint table. Input: a plain JSON object of parameters.
//! Output: the upstream JSON body, untouched, as `structuredContent`.

use std::future::Future;

use rmcp::handler::server::tool::{Parameters, ToolRouter};
use rmcp::model::JsonObject;

use crate::clients::royale::RoyaleClient;
use crate::core::error::GatewayError;
use crate::infra::runtime::mcp_transport::ServerHandler;
use crate::tools::{dispatch, endpoints};

type ToolResult = Result<rmcp::Json<serde_json::Value>, rmcp::ErrorData>;

#[derive(Clone)]
pub struct RoyaleSvc {
    pub client: RoyaleClient,
}

impl ServerHandler for RoyaleSvc {}

fn to_error_data(e: GatewayError) -> rmcp::ErrorData {
    match e {
        GatewayError::Validation(msg) => rmcp::ErrorData::invalid_params(msg, None),
        other => rmcp::ErrorData::internal_error(other.to_string(), None),
    }
}

impl RoyaleSvc {
    pub fn router() -> RoyaleRouter {
        // Wrapper to expose the macro-generated private tool_router
        Self::tool_router()
    }

    async fn invoke(&self, name: &'static str, args: JsonObject) -> ToolResult {
        let ep = endpoints::find(name).ok_or_else(|| {
            rmcp::ErrorData::internal_error(format!("no endpoint registered for {name}"), None)
        })?;
        let payload = dispatch::call_endpoint(&self.client, ep, &serde_json::Value::Object(args))
            .await
            .map_err(to_error_data)?;
        Ok(rmcp::Json(payload))
    }
}

#[rmcp::tool_router]
impl RoyaleSvc {
    #[rmcp::tool(
        name = "royale.get_player_info",
        description = "Fetch player info (stats, deck, clan) for a player tag."
    )]
    async fn get_player_info(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_player_info", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_player_upcoming_chests",
        description = "Fetch the upcoming chest cycle for a player tag."
    )]
    async fn get_player_upcoming_chests(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_player_upcoming_chests", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_player_battle_log",
        description = "Fetch the recent battle log for a player tag."
    )]
    async fn get_player_battle_log(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_player_battle_log", params.0).await
    }

    #[rmcp::tool(
        name = "royale.search_clans",
        description = "Search clans by name and/or numeric filters; at least one criterion is required."
    )]
    async fn search_clans(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.search_clans", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_clan_info",
        description = "Fetch detailed info (members, war stats) for a clan tag."
    )]
    async fn get_clan_info(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_clan_info", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_clan_members",
        description = "List the members of a clan."
    )]
    async fn get_clan_members(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_clan_members", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_clan_river_race_log",
        description = "Fetch a clan's past river race log."
    )]
    async fn get_clan_river_race_log(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_clan_river_race_log", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_clan_current_river_race",
        description = "Fetch a clan's currently running river race."
    )]
    async fn get_clan_current_river_race(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_clan_current_river_race", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_cards",
        description = "List all cards in the game (name, id, elixir cost, rarity, evolution)."
    )]
    async fn get_cards(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_cards", params.0).await
    }

    #[rmcp::tool(
        name = "royale.search_tournaments",
        description = "Search player-created tournaments by name; at least one criterion is required."
    )]
    async fn search_tournaments(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.search_tournaments", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_tournament_info",
        description = "Fetch detailed info for a player-created tournament tag."
    )]
    async fn get_tournament_info(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_tournament_info", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_global_tournaments",
        description = "List global tournaments and their milestone rewards."
    )]
    async fn get_global_tournaments(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_global_tournaments", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_challenges",
        description = "Fetch current and upcoming challenges."
    )]
    async fn get_challenges(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_challenges", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_locations",
        description = "List all locations and their identifiers."
    )]
    async fn get_locations(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_locations", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_location_info",
        description = "Fetch info for a specific location id."
    )]
    async fn get_location_info(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_location_info", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_location_player_rankings",
        description = "Fetch player rankings for a specific location id."
    )]
    async fn get_location_player_rankings(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_location_player_rankings", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_seasons",
        description = "List all ladder seasons and their identifiers."
    )]
    async fn get_seasons(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_seasons", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_leaderboards",
        description = "List all temporary game-mode leaderboards."
    )]
    async fn get_leaderboards(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_leaderboards", params.0).await
    }

    #[rmcp::tool(
        name = "royale.get_specific_leaderboard",
        description = "Fetch a specific temporary game-mode leaderboard by id."
    )]
    async fn get_specific_leaderboard(&self, params: Parameters<JsonObject>) -> ToolResult {
        self.invoke("royale.get_specific_leaderboard", params.0).await
    }
}

pub type RoyaleRouter = ToolRouter<RoyaleSvc>;

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn svc(base: String) -> RoyaleSvc {
        RoyaleSvc {
            client: RoyaleClient::new(base, "t"),
        }
    }

    fn obj(v: serde_json::Value) -> Parameters<JsonObject> {
        Parameters(v.as_object().unwrap().clone())
    }

    #[test]
    fn router_carries_a_route_per_endpoint() {
        let router: RoyaleRouter = RoyaleSvc::router();
        let names: Vec<String> = router.into_iter().map(|r| r.name().to_string()).collect();
        assert_eq!(names.len(), crate::tools::endpoints::ENDPOINTS.len());
        for ep in crate::tools::endpoints::ENDPOINTS {
            assert!(
                names.iter().any(|n| n == ep.name),
                "router missing {}",
                ep.name
            );
        }
    }

    #[tokio::test]
    async fn tool_call_returns_upstream_payload_verbatim() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/players/%23ABC");
            then.status(200).json_body(json!({"tag":"#ABC","name":"X"}));
        });

        let rmcp::Json(val) = svc(server.base_url())
            .get_player_info(obj(json!({"player_tag": "#ABC"})))
            .await
            .unwrap();
        assert_eq!(val, json!({"tag":"#ABC","name":"X"}));
    }

    #[tokio::test]
    async fn missing_required_param_maps_to_invalid_params() {
        // rmcp::Json is not Debug, so unwrap_err is unavailable here.
        let err = svc("http://localhost:0".into())
            .get_player_info(obj(json!({})))
            .await
            .err()
            .unwrap();
        // JSON-RPC invalid params is -32602
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("player_tag"));
    }

    #[tokio::test]
    async fn conflicting_cursors_map_to_invalid_params() {
        let err = svc("http://localhost:0".into())
            .get_clan_members(obj(json!({"clan_tag":"#C","after":"a","before":"b"})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("mutually exclusive"));
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_internal_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(503).body("maintenance");
        });

        let err = svc(server.base_url())
            .get_cards(obj(json!({})))
            .await
            .err()
            .unwrap();
        assert_eq!(err.code.0, -32603);
        assert!(err.message.contains("503"));
    }
}
