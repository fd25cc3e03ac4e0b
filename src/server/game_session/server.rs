use actix::prelude::*;
use actix::MessageResult;
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::time::Duration;
use uuid::Uuid;

use crate::config::game::{GOLD_REWARD, TICK_INTERVAL_MS};
use crate::game::render::project;
use crate::game::state::SessionState;
use crate::game::types::Grid;
use crate::server::game_session::messages::{
    EndSession, GameStateUpdate, GetSnapshot, ServerMessage, SessionSnapshot, SoundCue, StartGame,
};
use crate::server::game_session::tick::TickScheduler;
use crate::server::world_fetcher::{SharedWorldSource, WorldFetchError};
use crate::server::ws_error::WORLD_FETCH_FAILED;

/// Controller of one client's game: owns the session state and its tick timer.
///
/// All mutation happens on this actor, either from `StartGame` or from a tick,
/// so there is a single writer at any time.
pub struct GameSession {
    world_source: SharedWorldSource,
    client: Recipient<ServerMessage>,
    rng: StdRng,
    scheduler: TickScheduler<SpawnHandle>,

    /// Id of the latest start request; results and ticks for older ids are dropped.
    current_id: Option<Uuid>,
    state: Option<SessionState>,
    fetch: Option<SpawnHandle>,
}

impl Actor for GameSession {
    type Context = Context<Self>;

    fn stopping(&mut self, ctx: &mut Self::Context) -> Running {
        self.scheduler.stop(ctx);
        Running::Stop
    }
}

impl GameSession {
    pub fn new(world_source: SharedWorldSource, client: Recipient<ServerMessage>) -> Self {
        Self {
            world_source,
            client,
            rng: StdRng::from_rng(&mut rand::rng()),
            scheduler: TickScheduler::new(Duration::from_millis(TICK_INTERVAL_MS)),
            current_id: None,
            state: None,
            fetch: None,
        }
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.scheduler = TickScheduler::new(period);
        self
    }

    fn send(&self, msg: ServerMessage) {
        self.client.do_send(msg);
    }

    fn send_state(&self) {
        let Some(state) = &self.state else { return };
        let board = project(Some(&state.grid), Some(state.agent), &state.visited);
        debug!("[GameSession] {} board:\n{}", state.id, board);
        self.send(ServerMessage::State(GameStateUpdate {
            session_id: state.id,
            phase: state.phase,
            agent: state.agent,
            gold_collected: state.gold_collected,
            message: state.message.clone(),
            visited: state.visited.clone(),
            board,
        }));
    }

    /// Abandon whatever is running and fetch a new world.
    fn start_session(&mut self, ctx: &mut Context<Self>) {
        self.scheduler.stop(ctx);
        if let Some(handle) = self.fetch.take() {
            ctx.cancel_future(handle);
        }
        self.state = None;

        let session_id = Uuid::new_v4();
        self.current_id = Some(session_id);
        info!("[GameSession] Starting session {}", session_id);

        self.send(ServerMessage::Loading {
            session_id,
            board: project(None, None, &BTreeSet::new()),
        });
        self.send(ServerMessage::Cue(SoundCue::BackgroundLoop));

        let fetch = self.world_source.fetch();
        let handle = ctx.spawn(
            fut::wrap_future::<_, Self>(fetch).map(move |result, act, ctx| {
                act.on_world_fetched(session_id, result, ctx);
            }),
        );
        self.fetch = Some(handle);
    }

    fn on_world_fetched(
        &mut self,
        session_id: Uuid,
        result: Result<Grid, WorldFetchError>,
        ctx: &mut Context<Self>,
    ) {
        if self.current_id != Some(session_id) {
            debug!("[GameSession] Dropping world for superseded session {}", session_id);
            return;
        }
        self.fetch = None;

        match result {
            Ok(grid) => {
                self.state = Some(SessionState::start(session_id, grid));
                self.send_state();
                self.scheduler.start(ctx, session_id);
                debug!("[GameSession] {} ticking every {:?}", session_id, self.scheduler.period());
            }
            Err(e) => {
                error!("[GameSession] Failed to fetch world for {}: {}", session_id, e);
                self.current_id = None;
                self.send(ServerMessage::Error {
                    code: WORLD_FETCH_FAILED.to_string(),
                    message: e.to_string(),
                    context: Some(session_id.to_string()),
                });
            }
        }
    }

    pub(crate) fn on_tick(&mut self, session_id: Uuid, ctx: &mut Context<Self>) {
        let Some(state) = self.state.as_mut().filter(|s| s.id == session_id && !s.is_over()) else {
            debug!("[GameSession] Ignoring stale tick for {}", session_id);
            return;
        };

        let report = state.advance(&mut self.rng);
        self.send(ServerMessage::Cue(SoundCue::Move));
        if report.gold_collected {
            self.send(ServerMessage::GoldFound { reward: GOLD_REWARD });
        }
        self.send_state();

        if report.phase.is_over() {
            self.scheduler.stop(ctx);
            if let Some(state) = &self.state {
                info!("[GameSession] Session {} over: {}", state.id, state.message);
                self.send(ServerMessage::GameOver { phase: state.phase, message: state.message.clone() });
            }
        }
    }
}

impl Handler<StartGame> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: StartGame, ctx: &mut Context<Self>) -> Self::Result {
        self.start_session(ctx);
    }
}

impl Handler<EndSession> for GameSession {
    type Result = ();

    fn handle(&mut self, _msg: EndSession, ctx: &mut Context<Self>) -> Self::Result {
        self.scheduler.stop(ctx);
        if let Some(id) = self.current_id.take() {
            info!("[GameSession] Session {} torn down", id);
        }
        ctx.stop();
    }
}

impl Handler<GetSnapshot> for GameSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _msg: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(SessionSnapshot {
            session_id: self.current_id,
            phase: self.state.as_ref().map(|s| s.phase),
            ticking: self.scheduler.is_active(),
            loading: self.fetch.is_some(),
        })
    }
}
