use std::collections::BTreeSet;

use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::render::Board;
use crate::game::state::Phase;
use crate::game::types::CellIndex;

/// Messages a client may send over the game WebSocket.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    /// Start a new session, abandoning the current one if any.
    Start,
    Ping,
}

/// Audio cues the client plays. Playback failures stay on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    BackgroundLoop,
    Move,
}

/// Snapshot of the session as drawn by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateUpdate {
    pub session_id: Uuid,
    pub phase: Phase,
    pub agent: CellIndex,
    pub gold_collected: bool,
    pub message: String,
    pub visited: BTreeSet<CellIndex>,
    pub board: Board,
}

/// Everything the session controller sends to its client.
#[derive(Message, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerMessage {
    /// The world is being fetched; `board` is a placeholder.
    Loading { session_id: Uuid, board: Board },
    State(GameStateUpdate),
    Cue(SoundCue),
    GoldFound { reward: u32 },
    GameOver { phase: Phase, message: String },
    Error { code: String, message: String, context: Option<String> },
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct StartGame;

/// Tear the session down (client gone).
#[derive(Message)]
#[rtype(result = "()")]
pub struct EndSession;

/// Diagnostic view of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: Option<Uuid>,
    pub phase: Option<Phase>,
    pub ticking: bool,
    pub loading: bool,
}

#[derive(Message)]
#[rtype(result = "SessionSnapshot")]
pub struct GetSnapshot;
