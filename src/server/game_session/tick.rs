/// Tick scheduling for a GameSession.
/// Owns at most one repeating timer and guarantees it is cancelled before a new one starts.

use std::time::Duration;
use actix::prelude::*;
use uuid::Uuid;

use crate::server::game_session::server::GameSession;

/// Something that can run a repeating tick for a session and cancel it.
pub trait TimerHost {
    type Handle;

    fn schedule_every(&mut self, period: Duration, session_id: Uuid) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

impl TimerHost for Context<GameSession> {
    type Handle = SpawnHandle;

    fn schedule_every(&mut self, period: Duration, session_id: Uuid) -> SpawnHandle {
        self.run_interval(period, move |act, ctx| {
            act.on_tick(session_id, ctx);
        })
    }

    fn cancel(&mut self, handle: SpawnHandle) {
        self.cancel_future(handle);
    }
}

/// Holds the pending tick timer of the current session, if any.
pub struct TickScheduler<H> {
    period: Duration,
    pending: Option<H>,
}

impl<H> TickScheduler<H> {
    pub fn new(period: Duration) -> Self {
        Self { period, pending: None }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking for `session_id`, replacing any previous timer.
    pub fn start<T: TimerHost<Handle = H>>(&mut self, host: &mut T, session_id: Uuid) {
        self.stop(host);
        self.pending = Some(host.schedule_every(self.period, session_id));
    }

    pub fn stop<T: TimerHost<Handle = H>>(&mut self, host: &mut T) {
        if let Some(handle) = self.pending.take() {
            host.cancel(handle);
        }
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }
}
