//! Async timer driver
//!
//! The machine never sleeps; it hands out generation-tagged timers. This
//! driver owns the sleeping: it waits out each scheduled delay and delivers
//! the wakeup, following chains (feedback then settle) until the machine
//! goes quiet. Stale generations die inside [`Session::fire`], so a driver
//! racing a newer user action is harmless.

use super::machine::{Effect, Session};
use parking_lot::Mutex;
use std::sync::Arc;

/// Drive one effect chain to rest, returning the final quiet effect
///
/// The lock is held only across each `fire` call, never across a sleep, so
/// user intents keep flowing while a delay is pending.
pub async fn drive(session: Arc<Mutex<Session>>, mut effect: Effect) -> Effect {
    while let Effect::Timer(timer) = effect {
        tokio::time::sleep(timer.delay).await;
        effect = session.lock().fire(timer.generation);
    }
    effect
}
