//! External engine data: optional JSON files that override the built-in
//! physics constants, level layouts, and sprite manifest.
//!
//! Loading never fails. A missing directory, a missing file, or a file
//! that does not parse simply leaves the built-in values in place; the
//! only visible difference is the `loaded` flag the HUD reports.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use tui_platformer_core::level::{LevelOverride, PlatformSpec};
use tui_platformer_core::physics::PhysicsParams;
use tui_platformer_types::{Color, PlatformKind, Rect, GREEN, SCREEN_H, SCREEN_W};

pub const PHYSICS_FILE: &str = "physics.json";
pub const LEVELS_FILE: &str = "levels.json";
pub const SPRITES_FILE: &str = "sprites.json";
pub const CONFIG_FILE: &str = "config.json";

/// Partial physics document; absent keys keep the built-in constant.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PhysicsDoc {
    gravity: Option<f32>,
    player_acc: Option<f32>,
    player_friction: Option<f32>,
    jump_strength: Option<f32>,
    max_vel_x: Option<f32>,
    max_vel_y: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PlatformDoc {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Option<[u8; 3]>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

impl Default for PlatformDoc {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 20.0,
            color: None,
            kind: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GoalDoc {
    x: f32,
    y: f32,
}

impl Default for GoalDoc {
    fn default() -> Self {
        Self {
            x: SCREEN_W - 50.0,
            y: SCREEN_H - 100.0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LevelDoc {
    platforms: Option<Vec<PlatformDoc>>,
    background_color: Option<[u8; 3]>,
    platform_color: Option<[u8; 3]>,
    goal: Option<GoalDoc>,
}

/// One entry of the sprite manifest. Purely descriptive; the terminal
/// renderer draws blocks regardless, but the manifest's presence is what
/// flips the HUD to `ENGINE: LOADED`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpriteInfo {
    pub file: String,
    pub frames: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for SpriteInfo {
    fn default() -> Self {
        Self {
            file: String::new(),
            frames: 1,
            width: 0,
            height: 0,
        }
    }
}

/// Everything the engine directory can supply, resolved against the
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct EngineData {
    pub physics: PhysicsParams,
    pub levels: HashMap<(u32, u32), LevelOverride>,
    pub sprites: HashMap<String, SpriteInfo>,
    /// True when at least one engine file was found and parsed.
    pub loaded: bool,
}

impl EngineData {
    /// Pure built-in defaults, as if no engine directory existed.
    pub fn builtin() -> Self {
        Self {
            physics: PhysicsParams::default(),
            levels: HashMap::new(),
            sprites: HashMap::new(),
            loaded: false,
        }
    }

    /// Load from an engine directory. Infallible: every problem short of
    /// a successful parse degrades to the built-in value for that file.
    pub fn load(dir: &Path) -> Self {
        let mut data = Self::builtin();

        if let Some(doc) = read_json::<PhysicsDoc>(&dir.join(PHYSICS_FILE)) {
            apply_physics(&mut data.physics, &doc);
            data.loaded = true;
        }
        if let Some(docs) = read_json::<HashMap<String, LevelDoc>>(&dir.join(LEVELS_FILE)) {
            data.levels = convert_levels(docs);
            data.loaded = true;
        }
        if let Some(sprites) = read_json::<HashMap<String, SpriteInfo>>(&dir.join(SPRITES_FILE)) {
            data.sprites = sprites;
            data.loaded = true;
        }
        if read_json::<serde_json::Value>(&dir.join(CONFIG_FILE)).is_some() {
            data.loaded = true;
        }

        data
    }

    pub fn sprite(&self, name: &str) -> Option<&SpriteInfo> {
        self.sprites.get(name)
    }
}

/// Read and parse one JSON file, or `None` for any I/O or syntax problem.
fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let text = fs::read_to_string(path).ok()?;
    serde_json::from_str(&text).ok()
}

fn apply_physics(params: &mut PhysicsParams, doc: &PhysicsDoc) {
    if let Some(v) = doc.gravity {
        params.gravity = v;
    }
    if let Some(v) = doc.player_acc {
        params.player_acc = v;
    }
    if let Some(v) = doc.player_friction {
        params.player_friction = v;
    }
    if let Some(v) = doc.jump_strength {
        params.jump_strength = v;
    }
    if let Some(v) = doc.max_vel_x {
        params.max_vel_x = v;
    }
    if let Some(v) = doc.max_vel_y {
        params.max_vel_y = v;
    }
}

/// Level keys are `"world-level"`, e.g. `"2-4"`. Malformed keys are
/// skipped.
fn parse_level_key(key: &str) -> Option<(u32, u32)> {
    let (w, l) = key.split_once('-')?;
    Some((w.trim().parse().ok()?, l.trim().parse().ok()?))
}

fn convert_levels(docs: HashMap<String, LevelDoc>) -> HashMap<(u32, u32), LevelOverride> {
    docs.into_iter()
        .filter_map(|(key, doc)| Some((parse_level_key(&key)?, convert_level(doc))))
        .collect()
}

fn convert_level(doc: LevelDoc) -> LevelOverride {
    LevelOverride {
        platforms: doc.platforms.map(|ps| {
            ps.into_iter()
                .map(|p| PlatformSpec {
                    rect: Rect::new(p.x, p.y, p.width, p.height),
                    color: p.color.map(rgb).unwrap_or(GREEN),
                    kind: match p.kind.as_deref() {
                        Some("ground") => PlatformKind::Ground,
                        _ => PlatformKind::Normal,
                    },
                })
                .collect()
        }),
        background: doc.background_color.map(rgb),
        platform_color: doc.platform_color.map(rgb),
        goal: doc.goal.map(|g| (g.x, g.y)),
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Unique scratch directory per test.
    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("tui-platformer-data-tests")
            .join(format!("{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, file: &str, text: &str) {
        fs::write(dir.join(file), text).unwrap();
    }

    #[test]
    fn missing_directory_yields_builtin_defaults() {
        let data = EngineData::load(Path::new("/nonexistent/engine/dir"));
        assert!(!data.loaded);
        assert_eq!(data.physics, PhysicsParams::default());
        assert!(data.levels.is_empty());
        assert!(data.sprites.is_empty());
    }

    #[test]
    fn partial_physics_overrides_merge_over_defaults() {
        let dir = scratch("physics-partial");
        write(&dir, PHYSICS_FILE, r#"{"gravity": 0.8, "max_vel_x": 9.0}"#);

        let data = EngineData::load(&dir);
        assert!(data.loaded);
        assert_eq!(data.physics.gravity, 0.8);
        assert_eq!(data.physics.max_vel_x, 9.0);
        assert_eq!(data.physics.jump_strength, -12.0, "untouched key");
        assert_eq!(data.physics.player_friction, -0.12);
    }

    #[test]
    fn malformed_json_degrades_to_defaults() {
        let dir = scratch("malformed");
        write(&dir, PHYSICS_FILE, "{not json");
        write(&dir, LEVELS_FILE, "[1, 2");

        let data = EngineData::load(&dir);
        assert!(!data.loaded);
        assert_eq!(data.physics, PhysicsParams::default());
        assert!(data.levels.is_empty());
    }

    #[test]
    fn level_documents_convert_with_field_defaults() {
        let dir = scratch("levels");
        write(
            &dir,
            LEVELS_FILE,
            r#"{
                "2-3": {
                    "platforms": [
                        {"x": 50, "y": 500, "width": 200, "color": [10, 20, 30], "type": "ground"},
                        {"y": 400}
                    ],
                    "background_color": [1, 2, 3],
                    "goal": {"x": 300}
                },
                "bogus": {"platform_color": [9, 9, 9]},
                "1-x": {}
            }"#,
        );

        let data = EngineData::load(&dir);
        assert!(data.loaded);
        assert_eq!(data.levels.len(), 1, "malformed keys skipped");

        let ov = &data.levels[&(2, 3)];
        let platforms = ov.platforms.as_ref().unwrap();
        assert_eq!(platforms[0].rect, Rect::new(50.0, 500.0, 200.0, 20.0));
        assert_eq!(platforms[0].color, Color::new(10, 20, 30));
        assert_eq!(platforms[0].kind, PlatformKind::Ground);
        // Second platform relies almost entirely on defaults.
        assert_eq!(platforms[1].rect, Rect::new(0.0, 400.0, 100.0, 20.0));
        assert_eq!(platforms[1].color, GREEN);
        assert_eq!(platforms[1].kind, PlatformKind::Normal);

        assert_eq!(ov.background, Some(Color::new(1, 2, 3)));
        assert_eq!(ov.platform_color, None);
        // Goal y falls back to the built-in default point.
        assert_eq!(ov.goal, Some((300.0, SCREEN_H - 100.0)));
    }

    #[test]
    fn sprites_manifest_parses_and_flags_loaded() {
        let dir = scratch("sprites");
        write(
            &dir,
            SPRITES_FILE,
            r#"{"player": {"file": "mario.png", "frames": 4, "width": 32, "height": 32}}"#,
        );

        let data = EngineData::load(&dir);
        assert!(data.loaded);
        let player = data.sprite("player").unwrap();
        assert_eq!(player.file, "mario.png");
        assert_eq!(player.frames, 4);
        assert!(data.sprite("goomba").is_none());
    }

    #[test]
    fn config_presence_alone_flags_loaded() {
        let dir = scratch("config-only");
        write(&dir, CONFIG_FILE, "{}");

        let data = EngineData::load(&dir);
        assert!(data.loaded);
        assert_eq!(data.physics, PhysicsParams::default());
    }
}
