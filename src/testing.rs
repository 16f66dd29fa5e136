//! Headless app harness shared by the world-level tests.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

pub const STEP: Duration = Duration::from_nanos(16_666_667);

/// Minimal app with physics in `FixedPostUpdate`, advancing exactly one
/// fixed step per update and with gravity switched off.
pub fn physics_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(bevy::transform::TransformPlugin);
    // Avian's collider hierarchy plugin expects a scene spawner
    app.insert_resource(bevy::scene::SceneSpawner::default());
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Time::<Fixed>::from_duration(STEP));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.insert_resource(Gravity(Vec2::ZERO));
    app.finish();
    app.cleanup();
    app
}

pub fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}
