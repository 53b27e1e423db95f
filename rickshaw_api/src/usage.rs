use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use jiff::{SignedDuration, Timestamp};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Error)]
#[error("request ceiling of {ceiling} reached for the current window")]
pub struct LimitExceeded {
    pub ceiling: u32,
}

struct UsageWindow {
    count: u32,
    started_at: Timestamp,
}

/// Rolling-window admission counter.
///
/// The window restarts once `window` has elapsed since its first admitted
/// request; within a window at most `ceiling` requests are admitted. Injected
/// into the router as middleware so the assignment engine itself stays
/// stateless.
pub struct UsageTracker {
    ceiling: u32,
    window: SignedDuration,
    state: Mutex<UsageWindow>,
}

impl UsageTracker {
    pub fn new(ceiling: u32, window: SignedDuration) -> Self {
        Self {
            ceiling,
            window,
            state: Mutex::new(UsageWindow {
                count: 0,
                started_at: Timestamp::now(),
            }),
        }
    }

    /// Admits one request at `now`, returning the request count within the
    /// current window.
    pub fn try_acquire(&self, now: Timestamp) -> Result<u32, LimitExceeded> {
        let mut window = self.state.lock();

        if now.duration_since(window.started_at) > self.window {
            window.count = 0;
            window.started_at = now;
        }

        if window.count >= self.ceiling {
            return Err(LimitExceeded {
                ceiling: self.ceiling,
            });
        }

        window.count += 1;
        Ok(window.count)
    }
}

pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match state.usage.try_acquire(Timestamp::now()) {
        Ok(count) => {
            debug!("admitted request {count} in the current window");
            Ok(next.run(request).await)
        }
        Err(error) => Err(ApiError::TooManyRequests(error.to_string())),
    }
}
