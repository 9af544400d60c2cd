//! End-to-end physics behavior through the public facade.

use tui_platformer::core::{Body, GameState, Level, PhysicsParams};
use tui_platformer::core::physics::step;
use tui_platformer::types::{InputState, GROUND_HEIGHT, PLAYER_SIZE, SCREEN_H, SCREEN_W};

#[test]
fn spawn_drop_settles_on_a_surface() {
    let mut game = GameState::new(PhysicsParams::default());
    for _ in 0..240 {
        game.tick(InputState::default());
        if game.body.on_ground {
            break;
        }
    }
    assert!(game.body.on_ground);
    assert_eq!(game.body.vy, 0.0);
    // Resting exactly on some platform top.
    let bottom = game.body.y + PLAYER_SIZE;
    assert!(
        game.level
            .platforms
            .iter()
            .any(|p| (bottom - p.rect.y).abs() < f32::EPSILON),
        "body bottom {bottom} should match a platform top"
    );
}

#[test]
fn held_right_walks_to_the_wall_and_stops() {
    let mut game = GameState::new(PhysicsParams::default());
    let held = InputState {
        left: false,
        right: true,
    };
    // Ten seconds of held input crosses the whole screen comfortably.
    for _ in 0..600 {
        game.tick(held);
    }
    assert_eq!(game.body.x, SCREEN_W - PLAYER_SIZE);
    assert!(game.body.vx <= 0.0, "rightward speed zeroed at the edge");
    assert!(game.body.facing_right);
}

#[test]
fn velocity_invariants_hold_over_a_long_run() {
    let mut game = GameState::new(PhysicsParams::default());
    let max_x = game.params.max_vel_x;
    let max_y = game.params.max_vel_y;

    // Alternate directions and jump whenever possible.
    for i in 0..2_000u32 {
        if game.body.on_ground && i % 7 == 0 {
            game.apply_action(tui_platformer::types::GameAction::Jump);
        }
        let input = InputState {
            left: i % 3 == 0,
            right: i % 5 == 0,
        };
        game.tick(input);
        assert!(game.body.vx.abs() <= max_x, "tick {i}: vx {}", game.body.vx);
        assert!(game.body.vy <= max_y, "tick {i}: vy {}", game.body.vy);
        assert!(game.body.x >= 0.0 && game.body.x + PLAYER_SIZE <= SCREEN_W);
    }
}

#[test]
fn jump_arc_returns_to_the_ground() {
    let mut game = GameState::new(PhysicsParams::default());
    for _ in 0..240 {
        game.tick(InputState::default());
        if game.body.on_ground {
            break;
        }
    }
    let rest_y = game.body.y;

    game.apply_action(tui_platformer::types::GameAction::Jump);
    assert!(!game.body.on_ground);

    let mut peak = rest_y;
    for _ in 0..240 {
        game.tick(InputState::default());
        peak = peak.min(game.body.y);
        if game.body.on_ground {
            break;
        }
    }
    assert!(game.body.on_ground, "arc must land");
    assert!(peak < rest_y - 50.0, "jump must gain real height");
    assert_eq!(game.body.y, rest_y, "lands back at the same surface");
}

#[test]
fn custom_gravity_changes_fall_behavior() {
    let floaty = PhysicsParams {
        gravity: 0.1,
        ..PhysicsParams::default()
    };
    let level = Level::generate(1, 1);

    let mut fast = Body::at_spawn();
    let mut slow = Body::at_spawn();
    fast.x = 300.0;
    slow.x = 300.0;

    let mut fast_ticks = 0;
    while !fast.on_ground {
        step(&PhysicsParams::default(), &level.platforms, &mut fast);
        fast_ticks += 1;
    }
    let mut slow_ticks = 0;
    while !slow.on_ground {
        step(&floaty, &level.platforms, &mut slow);
        slow_ticks += 1;
    }
    assert!(slow_ticks > fast_ticks);
}

#[test]
fn ground_sits_at_the_bottom_of_every_generated_level() {
    for world in 1..=9 {
        for level in 1..=5 {
            let l = Level::generate(world, level);
            assert_eq!(l.platforms[0].rect.y, SCREEN_H - GROUND_HEIGHT);
        }
    }
}
