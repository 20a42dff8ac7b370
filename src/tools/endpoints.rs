//! Declarative table of upstream endpoints.
//!
//! One descriptor per tool: path template, typed parameters, and pagination
//! behavior. The generic dispatcher in [`crate::tools::dispatch`] is the only
//! consumer of request semantics; everything else (tool router, registry,
//! schema generation) reads this table.

use serde_json::{json, Value as J};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Player/clan/tournament tag; percent-encoded before path interpolation.
    Tag,
    Int,
    Str,
}

/// Required parameter interpolated into the path template.
pub struct PathParam {
    pub name: &'static str,
    pub kind: ParamKind,
}

/// Optional parameter forwarded on the query string when present.
pub struct QueryParam {
    pub name: &'static str,
    pub kind: ParamKind,
}

pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    /// Relative path with `{param}` placeholders, e.g. `players/{player_tag}`.
    pub path: &'static str,
    pub path_params: &'static [PathParam],
    pub query_params: &'static [QueryParam],
    /// Accepts `limit`/`after`/`before`; cursors are mutually exclusive.
    pub paginated: bool,
    /// Search-style endpoint: at least one query parameter must be supplied.
    pub requires_filter: bool,
}

impl Endpoint {
    /// JSON schema advertised through `tools/list`.
    pub fn input_schema(&self) -> J {
        let mut props = serde_json::Map::new();
        let mut required = Vec::new();
        for p in self.path_params {
            props.insert(p.name.to_string(), schema_for(p.name, p.kind));
            required.push(J::String(p.name.to_string()));
        }
        for q in self.query_params {
            props.insert(q.name.to_string(), schema_for(q.name, q.kind));
        }
        if self.paginated {
            props.insert("limit".into(), schema_for("limit", ParamKind::Int));
            props.insert("after".into(), schema_for("after", ParamKind::Str));
            props.insert("before".into(), schema_for("before", ParamKind::Str));
        }
        json!({ "type": "object", "properties": props, "required": required })
    }
}

fn schema_for(name: &str, kind: ParamKind) -> J {
    match kind {
        ParamKind::Tag => json!({
            "type": "string",
            "description": format!("{name} with leading '#', e.g. #ABCDEF")
        }),
        ParamKind::Int => json!({ "type": "integer" }),
        ParamKind::Str => json!({ "type": "string" }),
    }
}

macro_rules! path_params {
    ($(($name:literal, $kind:ident)),* $(,)?) => {
        &[$(PathParam { name: $name, kind: ParamKind::$kind }),*]
    };
}

macro_rules! query_params {
    ($(($name:literal, $kind:ident)),* $(,)?) => {
        &[$(QueryParam { name: $name, kind: ParamKind::$kind }),*]
    };
}

pub static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "royale.get_player_info",
        description: "Fetch player info (stats, deck, clan) for a player tag.",
        path: "players/{player_tag}",
        path_params: path_params![("player_tag", Tag)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_player_upcoming_chests",
        description: "Fetch the upcoming chest cycle for a player tag.",
        path: "players/{player_tag}/upcomingchests",
        path_params: path_params![("player_tag", Tag)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_player_battle_log",
        description: "Fetch the recent battle log for a player tag.",
        path: "players/{player_tag}/battlelog",
        path_params: path_params![("player_tag", Tag)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.search_clans",
        description: "Search clans by name and/or numeric filters; at least one criterion is required.",
        path: "clans",
        path_params: &[],
        query_params: query_params![
            ("name", Str),
            ("location_id", Int),
            ("min_members", Int),
            ("max_members", Int),
            ("min_score", Int),
        ],
        paginated: true,
        requires_filter: true,
    },
    Endpoint {
        name: "royale.get_clan_info",
        description: "Fetch detailed info (members, war stats) for a clan tag.",
        path: "clans/{clan_tag}",
        path_params: path_params![("clan_tag", Tag)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_clan_members",
        description: "List the members of a clan.",
        path: "clans/{clan_tag}/members",
        path_params: path_params![("clan_tag", Tag)],
        query_params: &[],
        paginated: true,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_clan_river_race_log",
        description: "Fetch a clan's past river race log.",
        path: "clans/{clan_tag}/riverracelog",
        path_params: path_params![("clan_tag", Tag)],
        query_params: &[],
        paginated: true,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_clan_current_river_race",
        description: "Fetch a clan's currently running river race.",
        path: "clans/{clan_tag}/currentriverrace",
        path_params: path_params![("clan_tag", Tag)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_cards",
        description: "List all cards in the game (name, id, elixir cost, rarity, evolution).",
        path: "cards",
        path_params: &[],
        query_params: &[],
        paginated: true,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.search_tournaments",
        description: "Search player-created tournaments by name; at least one criterion is required.",
        path: "tournaments",
        path_params: &[],
        query_params: query_params![("name", Str)],
        paginated: true,
        requires_filter: true,
    },
    Endpoint {
        name: "royale.get_tournament_info",
        description: "Fetch detailed info for a player-created tournament tag.",
        path: "tournaments/{tournament_tag}",
        path_params: path_params![("tournament_tag", Tag)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_global_tournaments",
        description: "List global tournaments and their milestone rewards.",
        path: "globaltournaments",
        path_params: &[],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_challenges",
        description: "Fetch current and upcoming challenges.",
        path: "challenges",
        path_params: &[],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_locations",
        description: "List all locations and their identifiers.",
        path: "locations",
        path_params: &[],
        query_params: &[],
        paginated: true,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_location_info",
        description: "Fetch info for a specific location id.",
        path: "locations/{location_id}",
        path_params: path_params![("location_id", Int)],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_location_player_rankings",
        description: "Fetch player rankings for a specific location id.",
        path: "locations/{location_id}/rankings/players",
        path_params: path_params![("location_id", Int)],
        query_params: &[],
        paginated: true,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_seasons",
        description: "List all ladder seasons and their identifiers.",
        path: "locations/global/seasonsV2",
        path_params: &[],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_leaderboards",
        description: "List all temporary game-mode leaderboards.",
        path: "leaderboards",
        path_params: &[],
        query_params: &[],
        paginated: false,
        requires_filter: false,
    },
    Endpoint {
        name: "royale.get_specific_leaderboard",
        description: "Fetch a specific temporary game-mode leaderboard by id.",
        path: "leaderboards/{leaderboard_id}",
        path_params: path_params![("leaderboard_id", Int)],
        query_params: &[],
        paginated: true,
        requires_filter: false,
    },
];

pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}
