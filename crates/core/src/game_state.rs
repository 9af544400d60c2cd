//! The top-level simulation: one tick loop tying body, level, and
//! progression together.

use std::collections::HashMap;

use tui_platformer_types::{GameAction, InputState, TRANSITION_DELAY_TICKS};

use crate::body::Body;
use crate::level::{Level, LevelOverride};
use crate::physics::{self, PhysicsParams, StepEvents};
use crate::progression::Progression;

/// Complete mutable game state. Owns the current level wholesale; level
/// transitions replace it rather than patch it.
#[derive(Debug, Clone)]
pub struct GameState {
    pub params: PhysicsParams,
    pub progression: Progression,
    pub level: Level,
    pub body: Body,
    /// Ticks remaining in the level-complete pause; 0 means not
    /// transitioning.
    pub transition_timer: u32,
    overrides: HashMap<(u32, u32), LevelOverride>,
}

impl GameState {
    pub fn new(params: PhysicsParams) -> Self {
        Self::with_overrides(params, HashMap::new())
    }

    /// Construct with external per-level overrides keyed by
    /// `(world, level)`.
    pub fn with_overrides(
        params: PhysicsParams,
        overrides: HashMap<(u32, u32), LevelOverride>,
    ) -> Self {
        let progression = Progression::new();
        let level = Self::build_level(&overrides, progression);
        Self {
            params,
            progression,
            level,
            body: Body::at_spawn(),
            transition_timer: 0,
            overrides,
        }
    }

    fn build_level(
        overrides: &HashMap<(u32, u32), LevelOverride>,
        progression: Progression,
    ) -> Level {
        Level::generate_with(
            progression.world,
            progression.level,
            overrides.get(&(progression.world, progression.level)),
        )
    }

    /// Regenerate the current level and reset the body and timer.
    pub fn load_level(&mut self) {
        self.level = Self::build_level(&self.overrides, self.progression);
        self.body = Body::at_spawn();
        self.transition_timer = 0;
    }

    /// True while the level-complete pause is running.
    pub fn transitioning(&self) -> bool {
        self.transition_timer > 0
    }

    /// Apply a discrete player action. Movement is not an action; it is
    /// sampled continuously via [`tick`](Self::tick)'s `InputState`.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Jump => {
                self.body.jump(self.params.jump_strength);
            }
            GameAction::NextLevel => {
                self.progression.advance();
                self.load_level();
            }
            GameAction::PrevLevel => {
                self.progression.retreat();
                self.load_level();
            }
            GameAction::Restart => self.load_level(),
        }
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Input translates to horizontal acceleration (right wins when both
    /// are held), physics steps, then the goal check and transition
    /// countdown run. The timer decrements on the same tick it is armed,
    /// so the pause lasts exactly the configured tick count.
    pub fn tick(&mut self, input: InputState) -> StepEvents {
        self.body.acc_x = if input.right {
            self.params.player_acc
        } else if input.left {
            -self.params.player_acc
        } else {
            0.0
        };

        let ev = physics::step(&self.params, &self.level.platforms, &mut self.body);

        if self.transition_timer == 0 && self.body.rect().intersects(&self.level.goal.rect) {
            self.transition_timer = TRANSITION_DELAY_TICKS;
        }
        if self.transition_timer > 0 {
            self.transition_timer -= 1;
            if self.transition_timer == 0 {
                self.progression.advance();
                self.load_level();
            }
        }

        ev
    }
}
