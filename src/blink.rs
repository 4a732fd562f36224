//! Post-collision blink / respawn state machine.
//!
//! Timing is driven entirely by the `now` timestamps passed in (milliseconds,
//! same clock as `requestAnimationFrame`), so tests can step time by hand.

/// Whether the player sprite is drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BlinkState {
    #[default]
    Normal,
    Blinking {
        since_ms: f64,
    },
}

impl BlinkState {
    pub fn is_blinking(&self) -> bool {
        matches!(self, BlinkState::Blinking { .. })
    }

    /// Enters `Blinking` at `now`. Returns false (and keeps the first
    /// entry time) when already blinking.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.is_blinking() {
            return false;
        }
        *self = BlinkState::Blinking { since_ms: now };
        true
    }

    /// Duty cycle: OFF for even interval indices, starting OFF at entry.
    pub fn visibility(&self, now: f64, interval_ms: f64) -> Visibility {
        match *self {
            BlinkState::Normal => Visibility::Visible,
            BlinkState::Blinking { since_ms } => {
                let phase = ((now - since_ms) / interval_ms).floor() as i64;
                if phase.rem_euclid(2) == 0 {
                    Visibility::Hidden
                } else {
                    Visibility::Visible
                }
            }
        }
    }

    /// Per-frame step. Clears the state once more than `duration_ms` has
    /// elapsed; the sprite stays hidden on that final frame.
    pub fn advance(&mut self, now: f64, duration_ms: f64, interval_ms: f64) -> Visibility {
        if let BlinkState::Blinking { since_ms } = *self {
            if now - since_ms > duration_ms {
                *self = BlinkState::Normal;
                tracing::info!(elapsed_ms = now - since_ms, "blink finished");
                return Visibility::Hidden;
            }
        }
        self.visibility(now, interval_ms)
    }
}
