/// WebSocket session handler for a single game client.
///
/// Owns the connection, spawns the client's `GameSession` controller, forwards
/// client actions to it and serializes every server message back to the socket.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use log::{debug, warn};

use crate::server::game_session::messages::{ClientAction, EndSession, ServerMessage, StartGame};
use crate::server::game_session::server::GameSession;
use crate::server::state::AppState;
use crate::server::world_fetcher::SharedWorldSource;
use crate::server::ws_error::{ws_error_message, INVALID_ACTION, SERIALIZATION_FAILED};

pub struct GameSessionActor {
    world_source: SharedWorldSource,
    session_addr: Option<Addr<GameSession>>,
}

impl GameSessionActor {
    pub fn new(world_source: SharedWorldSource) -> Self {
        Self { world_source, session_addr: None }
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Spawn the game controller that reports back to this socket.
    fn started(&mut self, ctx: &mut Self::Context) {
        let controller = GameSession::new(self.world_source.clone(), ctx.address().recipient());
        self.session_addr = Some(controller.start());
        debug!("[GameSessionActor] Client connected");
    }

    /// Cancel any pending tick and stop the controller with the socket.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(addr) = self.session_addr.take() {
            addr.do_send(EndSession);
        }
        debug!("[GameSessionActor] Client disconnected");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientAction>(&text) {
                Ok(ClientAction::Start) => {
                    if let Some(addr) = &self.session_addr {
                        addr.do_send(StartGame);
                    }
                }
                Ok(ClientAction::Ping) => (),
                Err(e) => {
                    warn!("[GameSessionActor] Invalid client message: {}", e);
                    ctx.text(ws_error_message(INVALID_ACTION, "Invalid client message", None));
                }
            },
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSessionActor] Protocol error: {}", e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<ServerMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerMessage, ctx: &mut Self::Context) -> Self::Result {
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => ctx.text(ws_error_message(SERIALIZATION_FAILED, &e.to_string(), None)),
        }
    }
}

pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    ws::start(GameSessionActor::new(data.world_source.clone()), &req, stream)
}
