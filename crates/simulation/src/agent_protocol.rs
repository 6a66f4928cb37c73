//! Agent text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that external programs
//! (scripts, test harnesses) use to drive the garage over newline-delimited
//! JSON on stdin/stdout.
//!
//! These types live in the `simulation` crate so they can be unit-tested
//! without pulling in the app binary. The I/O loop lives in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::ascii_map;
use crate::game_actions::{ActionResult, GarageAction};
use crate::garage::Garage;
use crate::garage_observation::GarageObservation;

// ---------------------------------------------------------------------------
// Commands (stdin -> simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent over stdin.
///
/// Each line of stdin is parsed as one `AgentCommand`. The `cmd` field acts as
/// the discriminator tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Request the current garage observation snapshot.
    #[serde(rename = "observe")]
    Observe,

    /// Execute a single garage action.
    #[serde(rename = "act")]
    Act { action: GarageAction },

    /// Execute multiple garage actions in sequence.
    #[serde(rename = "batch_act")]
    BatchAct { actions: Vec<GarageAction> },

    /// Request one or more named data layers (see [`QUERY_LAYERS`]).
    #[serde(rename = "query")]
    Query { layers: Vec<String> },

    /// Start over with a fresh garage and the given seed.
    #[serde(rename = "new_game")]
    NewGame { seed: u64 },

    /// Gracefully shut down the agent session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (simulation -> stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "observation")]
    Observation { observation: GarageObservation },

    #[serde(rename = "action_result")]
    ActionResult { result: ActionResult },

    #[serde(rename = "batch_result")]
    BatchResult { results: Vec<ActionResult> },

    /// A JSON object keyed by layer name.
    #[serde(rename = "query_result")]
    QueryResult { layers: serde_json::Value },

    #[serde(rename = "ok")]
    Ok,

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Layer names accepted by the `query` command.
pub const QUERY_LAYERS: [&str; 5] = ["ascii", "grid", "rate", "clock", "balance"];

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Resolve the requested layers against the garage. Any unknown name fails
/// the whole query.
pub fn query_layers(garage: &Garage, layers: &[String]) -> Result<serde_json::Value, String> {
    let mut out = serde_json::Map::new();
    for layer in layers {
        let value = match layer.as_str() {
            "ascii" => serde_json::Value::String(ascii_map::build_garage_map(garage)),
            "grid" => serde_json::to_value(garage.grid_snapshot()).map_err(|e| e.to_string())?,
            "rate" => serde_json::json!({
                "rate": garage.current_rate(),
                "tier": garage.rate_tier(),
            }),
            "clock" => serde_json::to_value(garage.clock()).map_err(|e| e.to_string())?,
            "balance" => serde_json::json!(garage.balance()),
            other => {
                return Err(format!(
                    "unknown layer '{other}', expected one of {}",
                    QUERY_LAYERS.join(", ")
                ))
            }
        };
        out.insert(layer.clone(), value);
    }
    Ok(serde_json::Value::Object(out))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
