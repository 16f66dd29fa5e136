//! Portals domain: portal colors, instances and the linked pair.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortalColor {
    Blue,
    Orange,
}

impl PortalColor {
    pub const ALL: [PortalColor; 2] = [PortalColor::Blue, PortalColor::Orange];

    pub fn other(self) -> Self {
        match self {
            PortalColor::Blue => PortalColor::Orange,
            PortalColor::Orange => PortalColor::Blue,
        }
    }

    pub const fn mouse_button(self) -> MouseButton {
        match self {
            PortalColor::Blue => MouseButton::Left,
            PortalColor::Orange => MouseButton::Right,
        }
    }

    pub fn tint(self) -> Color {
        match self {
            PortalColor::Blue => Color::srgb(0.0, 0.0, 1.0),
            PortalColor::Orange => Color::srgb(1.0, 0.65, 0.0),
        }
    }
}

/// Marker on a portal's sensor body (which also carries its visual).
#[derive(Component, Debug)]
pub struct Portal {
    pub color: PortalColor,
}

/// A placed portal: where it sits and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalInstance {
    pub entity: Entity,
    pub position: Vec2,
    pub angle: f32,
    /// Unit surface normal pointing out of the wall the portal sits on
    pub normal: Vec2,
}

/// The blue/orange pair. At most one instance per color.
///
/// The entity stored here is the only one whose contacts count for that
/// color, so a replaced portal's stale contacts are ignored.
#[derive(Resource, Debug, Default)]
pub struct PortalPair {
    blue: Option<PortalInstance>,
    orange: Option<PortalInstance>,
}

impl PortalPair {
    pub fn get(&self, color: PortalColor) -> Option<&PortalInstance> {
        match color {
            PortalColor::Blue => self.blue.as_ref(),
            PortalColor::Orange => self.orange.as_ref(),
        }
    }

    fn slot_mut(&mut self, color: PortalColor) -> &mut Option<PortalInstance> {
        match color {
            PortalColor::Blue => &mut self.blue,
            PortalColor::Orange => &mut self.orange,
        }
    }

    /// Install a new portal of `color`, returning the instance it replaces.
    pub fn replace(&mut self, color: PortalColor, portal: PortalInstance) -> Option<PortalInstance> {
        self.slot_mut(color).replace(portal)
    }

    /// Which color, if any, the given entity currently is.
    pub fn color_of(&self, entity: Entity) -> Option<PortalColor> {
        PortalColor::ALL
            .into_iter()
            .find(|&color| self.get(color).is_some_and(|p| p.entity == entity))
    }

    pub fn is_linked(&self) -> bool {
        self.blue.is_some() && self.orange.is_some()
    }

    /// The exit for a contact on `entity`: the other color's portal, but only
    /// when `entity` is a live portal and both colors exist.
    pub fn exit_for(&self, entity: Entity) -> Option<&PortalInstance> {
        let color = self.color_of(entity)?;
        self.get(color.other())
    }

    /// Empty the pair, returning whatever was placed.
    pub fn take_all(&mut self) -> Vec<PortalInstance> {
        self.blue.take().into_iter().chain(self.orange.take()).collect()
    }
}
