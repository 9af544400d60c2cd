//! Held-key input handler for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::{classify_key, KeyIntent};
use crate::types::{GameAction, InputState};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Hold state of one key, refreshed by press events (including repeats)
/// and expired by the auto-release timeout.
#[derive(Debug, Clone, Copy)]
struct KeyLatch {
    held: bool,
    last_seen: Instant,
}

impl KeyLatch {
    fn new() -> Self {
        Self {
            held: false,
            last_seen: Instant::now(),
        }
    }

    /// Register a press. Returns true on the rising edge only.
    fn press(&mut self) -> bool {
        self.last_seen = Instant::now();
        let edge = !self.held;
        self.held = true;
        edge
    }

    fn release(&mut self) {
        self.held = false;
    }

    fn expire(&mut self, timeout: Duration) {
        if self.held && self.last_seen.elapsed() > timeout {
            self.held = false;
        }
    }
}

/// Tracks per-key hold state and converts key events into the two kinds
/// of input the simulation consumes: a continuously sampled movement
/// [`InputState`] and edge-triggered [`GameAction`]s.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left: KeyLatch,
    right: KeyLatch,
    jump: KeyLatch,
    next: KeyLatch,
    prev: KeyLatch,
    restart: KeyLatch,
    key_release_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: KeyLatch::new(),
            right: KeyLatch::new(),
            jump: KeyLatch::new(),
            next: KeyLatch::new(),
            prev: KeyLatch::new(),
            restart: KeyLatch::new(),
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout(mut self, timeout: Duration) -> Self {
        self.key_release_timeout = timeout;
        self
    }

    /// Handle a press (or terminal auto-repeat) event.
    ///
    /// Movement keys only refresh their latch and return `None`; they are
    /// sampled via [`state`](Self::state). Everything else fires its
    /// action exactly once per physical press.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match classify_key(code)? {
            KeyIntent::MoveLeft => {
                self.left.press();
                None
            }
            KeyIntent::MoveRight => {
                self.right.press();
                None
            }
            KeyIntent::Jump => self.jump.press().then_some(GameAction::Jump),
            KeyIntent::NextLevel => self.next.press().then_some(GameAction::NextLevel),
            KeyIntent::PrevLevel => self.prev.press().then_some(GameAction::PrevLevel),
            KeyIntent::Restart => self.restart.press().then_some(GameAction::Restart),
        }
    }

    /// Handle a release event, where the terminal provides them.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match classify_key(code) {
            Some(KeyIntent::MoveLeft) => self.left.release(),
            Some(KeyIntent::MoveRight) => self.right.release(),
            Some(KeyIntent::Jump) => self.jump.release(),
            Some(KeyIntent::NextLevel) => self.next.release(),
            Some(KeyIntent::PrevLevel) => self.prev.release(),
            Some(KeyIntent::Restart) => self.restart.release(),
            None => {}
        }
    }

    /// Sample the movement state for one simulation tick, expiring any
    /// latch the auto-release timeout has overrun.
    pub fn state(&mut self) -> InputState {
        let timeout = self.key_release_timeout;
        self.left.expire(timeout);
        self.right.expire(timeout);
        self.jump.expire(timeout);
        self.next.expire(timeout);
        self.prev.expire(timeout);
        self.restart.expire(timeout);

        InputState {
            left: self.left.held,
            right: self.right.held,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
