//! External engine data wired into a running game, and its fallbacks.

use std::fs;
use std::path::{Path, PathBuf};

use tui_platformer::core::{GameState, PhysicsParams};
use tui_platformer::data::{EngineData, LEVELS_FILE, PHYSICS_FILE, SPRITES_FILE};
use tui_platformer::types::{Color, GameAction, InputState};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("tui-platformer-int-tests")
        .join(format!("{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &Path, file: &str, text: &str) {
    fs::write(dir.join(file), text).unwrap();
}

#[test]
fn game_without_engine_dir_plays_on_builtins() {
    let engine = EngineData::load(Path::new("/nonexistent"));
    assert!(!engine.loaded);

    let mut game = GameState::with_overrides(engine.physics, engine.levels);
    for _ in 0..240 {
        game.tick(InputState::default());
        if game.body.on_ground {
            break;
        }
    }
    assert!(game.body.on_ground, "builtin physics must still play");
}

#[test]
fn physics_overrides_flow_into_the_simulation() {
    let dir = scratch("physics-flow");
    write(&dir, PHYSICS_FILE, r#"{"jump_strength": -20.0}"#);

    let engine = EngineData::load(&dir);
    assert!(engine.loaded);

    let mut game = GameState::with_overrides(engine.physics, engine.levels);
    for _ in 0..240 {
        game.tick(InputState::default());
        if game.body.on_ground {
            break;
        }
    }
    game.apply_action(GameAction::Jump);
    assert_eq!(game.body.vy, -20.0);
}

#[test]
fn level_overrides_replace_only_their_level() {
    let dir = scratch("levels-flow");
    write(
        &dir,
        LEVELS_FILE,
        r#"{
            "1-2": {
                "platforms": [{"x": 0, "y": 560, "width": 800, "height": 40, "type": "ground"}],
                "background_color": [7, 7, 7],
                "goal": {"x": 400, "y": 500}
            }
        }"#,
    );

    let engine = EngineData::load(&dir);
    let mut game = GameState::with_overrides(engine.physics, engine.levels);

    let builtin_count = game.level.platforms.len();
    assert!(builtin_count > 1);

    game.apply_action(GameAction::NextLevel);
    assert_eq!(game.level.platforms.len(), 1);
    assert_eq!(game.level.background, Color::new(7, 7, 7));
    assert_eq!(game.level.goal.rect.x, 400.0);

    game.apply_action(GameAction::NextLevel);
    assert_eq!(game.level.platforms.len(), 5 + 1, "1-3 is procedural again");
}

#[test]
fn broken_engine_files_never_stop_the_game() {
    let dir = scratch("broken");
    write(&dir, PHYSICS_FILE, "not json at all");
    write(&dir, LEVELS_FILE, r#"{"1-1": {"platforms": "wrong type"}}"#);
    write(&dir, SPRITES_FILE, "[]");

    let engine = EngineData::load(&dir);
    assert_eq!(engine.physics, PhysicsParams::default());
    assert!(engine.levels.is_empty());
    assert!(engine.sprites.is_empty());

    let mut game = GameState::with_overrides(engine.physics, engine.levels);
    game.tick(InputState::default());
}
