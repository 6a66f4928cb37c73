//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! ## Protocol
//!
//! Each input line is a JSON object with a `"cmd"` discriminator.
//! Each output line is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.

use std::io::{self, BufRead, Write};

use bevy::log::{info, warn};

use simulation::agent_protocol::{
    make_response, query_layers, AgentCommand, AgentResponse, ResponsePayload, PROTOCOL_VERSION,
};
use simulation::game_actions::GarageAction;

use crate::session::Session;

pub fn run_agent_mode<R: BufRead, W: Write>(
    mut session: Session,
    input: R,
    mut out: W,
) -> io::Result<()> {
    // Send the "ready" message so the external program knows we are live.
    send(&mut out, &make_response(ResponsePayload::Ready))?;
    info!(
        "parking garage agent mode v{} ready, waiting for commands on stdin",
        PROTOCOL_VERSION
    );

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AgentCommand>(&line) {
            Ok(cmd) => process_command(cmd, &mut session),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        send(&mut out, &response)?;

        if is_goodbye {
            break;
        }
    }

    info!("parking garage agent mode shutting down");
    Ok(())
}

fn send<W: Write>(out: &mut W, response: &AgentResponse) -> io::Result<()> {
    let line = serde_json::to_string(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out, "{line}")?;
    out.flush()
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(cmd: AgentCommand, session: &mut Session) -> AgentResponse {
    match cmd {
        AgentCommand::Observe => make_response(ResponsePayload::Observation {
            observation: session.observation(),
        }),

        AgentCommand::Act { action } => make_response(ResponsePayload::ActionResult {
            result: session.act(action),
        }),

        AgentCommand::BatchAct { actions } => {
            let results = actions.into_iter().map(|a| session.act(a)).collect();
            make_response(ResponsePayload::BatchResult { results })
        }

        AgentCommand::Query { layers } => match query_layers(session.garage(), &layers) {
            Ok(layers) => make_response(ResponsePayload::QueryResult { layers }),
            Err(message) => make_response(ResponsePayload::Error { message }),
        },

        AgentCommand::NewGame { seed } => {
            let result = session.act(GarageAction::NewGame { seed });
            match result.error() {
                Some(e) => make_response(ResponsePayload::Error {
                    message: e.to_string(),
                }),
                None => make_response(ResponsePayload::Ok),
            }
        }

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}
