//! Debug domain: toggles for developer overlays.

use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw surface probes and portal normals
    pub show_gizmos: bool,
}
