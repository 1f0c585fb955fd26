use bevy::prelude::*;

/// A movable, show/hide-able visual the selector drives.
pub trait MarkerHandle {
    fn position(&self) -> Vec3;

    fn set_position(&mut self, position: Vec3);

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);
}

// Scene tags used to find the entities the selector binds to.

#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct Crosshair;

#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct TargetMarker;

/// The camera used for pointer projection. UI cameras must not carry this.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct WorldCamera;

/// Marker state bound to an entity. The selector owns the authoritative
/// position and visibility; `sync_markers` copies them onto the entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMarker {
    pub entity: Entity,
    position: Vec3,
    visible: bool,
}

impl EntityMarker {
    pub fn new(entity: Entity, position: Vec3, visible: bool) -> Self {
        Self {
            entity,
            position,
            visible,
        }
    }

    pub fn visibility(&self) -> Visibility {
        if self.visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

impl MarkerHandle for EntityMarker {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
