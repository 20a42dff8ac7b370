//! Generic endpoint dispatch: one function turns an endpoint descriptor plus
//! caller arguments into a validated relative path, then hands it to the
//! client. All validation happens here, before any network call.

use serde_json::Value as J;

use crate::clients::royale::RoyaleClient;
use crate::core::error::GatewayError;
use crate::core::query::{encode_tag, ensure_single_cursor, QueryParams};
use crate::tools::endpoints::{Endpoint, ParamKind};

/// Assemble the relative request path for `ep` from `args`.
///
/// Interpolates required path parameters (tags percent-encoded), collects the
/// optional query parameters that are present, enforces cursor exclusivity on
/// paginated endpoints and the at-least-one-criterion rule on search
/// endpoints. Pure: no I/O.
pub fn build_request_path(ep: &Endpoint, args: &J) -> Result<String, GatewayError> {
    let empty = serde_json::Map::new();
    let args = args.as_object().unwrap_or(&empty);

    let mut path = ep.path.to_string();
    for p in ep.path_params {
        let value = args
            .get(p.name)
            .filter(|v| !v.is_null())
            .ok_or_else(|| {
                GatewayError::validation(format!("missing required parameter '{}'", p.name))
            })?;
        let segment = match p.kind {
            ParamKind::Tag => encode_tag(expect_str(p.name, value)?),
            ParamKind::Int => expect_int(p.name, value)?.to_string(),
            ParamKind::Str => expect_str(p.name, value)?.to_string(),
        };
        path = path.replace(&format!("{{{}}}", p.name), &segment);
    }

    let mut query = QueryParams::new();
    for q in ep.query_params {
        let Some(value) = args.get(q.name).filter(|v| !v.is_null()) else {
            continue;
        };
        match q.kind {
            ParamKind::Int => query.push(q.name, expect_int(q.name, value)?),
            ParamKind::Str | ParamKind::Tag => query.push(q.name, expect_str(q.name, value)?),
        }
    }

    if ep.paginated {
        let after = opt_str("after", args)?;
        let before = opt_str("before", args)?;
        ensure_single_cursor(after, before)?;
        if let Some(v) = args.get("limit").filter(|v| !v.is_null()) {
            query.push("limit", expect_int("limit", v)?);
        }
        query.push_opt("after", after);
        query.push_opt("before", before);
    }

    if ep.requires_filter && query.is_empty() {
        return Err(GatewayError::validation(
            "at least one search parameter must be provided",
        ));
    }

    Ok(query.append_to(path))
}

/// Validate, assemble and perform one upstream GET for `ep`.
pub async fn call_endpoint(
    client: &RoyaleClient,
    ep: &Endpoint,
    args: &J,
) -> Result<J, GatewayError> {
    let path = build_request_path(ep, args)?;
    tracing::info!(tool = ep.name, path = %path, "dispatching endpoint call");
    client.get(&path).await
}

fn expect_str<'a>(name: &str, value: &'a J) -> Result<&'a str, GatewayError> {
    value
        .as_str()
        .ok_or_else(|| GatewayError::validation(format!("parameter '{name}' must be a string")))
}

fn expect_int(name: &str, value: &J) -> Result<i64, GatewayError> {
    value
        .as_i64()
        .ok_or_else(|| GatewayError::validation(format!("parameter '{name}' must be an integer")))
}

fn opt_str<'a>(
    name: &'static str,
    args: &'a serde_json::Map<String, J>,
) -> Result<Option<&'a str>, GatewayError> {
    match args.get(name) {
        None | Some(J::Null) => Ok(None),
        Some(v) => expect_str(name, v).map(Some),
    }
}
