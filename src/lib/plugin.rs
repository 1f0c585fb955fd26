use bevy::{
    app::AppExit,
    input::mouse::MouseMotion,
    log,
    prelude::*,
    window::PrimaryWindow,
};

use crate::{
    camera::{ScreenToWorld, ViewportProjector},
    config::{PointerBindings, SelectorConfig},
    error::SelectorError,
    input::PointerActions,
    marker::{Crosshair, EntityMarker, MarkerHandle, TargetMarker, WorldCamera},
    selector::PointerTargetSelector,
};

pub type MarbleSelector = PointerTargetSelector<PointerActions, EntityMarker>;

/// The scene's one pointer target selector.
#[derive(Resource, Deref, DerefMut, Debug)]
pub struct Selector(pub MarbleSelector);

/// Sent once per selection, after the selector's own subscribers ran.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TargetSelected {
    pub position: Vec3,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PointerSet {
    Sample,
    Select,
    Sync,
}

/// Crosshair tracking and click-to-target selection.
///
/// Expects exactly one `Crosshair`, one `TargetMarker` and an active
/// `WorldCamera` in the scene by the end of `Startup`. Systems reacting to
/// [`TargetSelected`] should run `.after(PointerSet::Select)`.
#[derive(Default)]
pub struct PointerTargetPlugin;

impl Plugin for PointerTargetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectorConfig>()
            .init_resource::<PointerBindings>()
            .add_event::<TargetSelected>()
            .configure_sets(
                Update,
                (PointerSet::Sample, PointerSet::Select, PointerSet::Sync).chain(),
            )
            .add_systems(PostStartup, (bind_selector, hide_os_cursor))
            .add_systems(
                Update,
                (
                    sample_pointer.in_set(PointerSet::Sample),
                    tick_selector.in_set(PointerSet::Select),
                    sync_markers.in_set(PointerSet::Sync),
                ),
            )
            .add_systems(Last, release_on_exit);
    }
}

/// Install `selector` unless one already exists; the first one wins.
pub fn install_selector(world: &mut World, selector: MarbleSelector) -> Result<(), SelectorError> {
    if world.contains_resource::<Selector>() {
        return Err(SelectorError::AlreadyInitialized);
    }

    world.insert_resource(Selector(selector));
    Ok(())
}

fn single_marker<T: Component>(
    world: &mut World,
    name: &'static str,
) -> Result<(Entity, Vec3), SelectorError> {
    let mut query = world.query_filtered::<(Entity, Option<&Transform>), With<T>>();
    let mut found = query.iter(world).map(|(entity, transform)| {
        (entity, transform.map(|t| t.translation).unwrap_or_default())
    });

    let first = found.next().ok_or(SelectorError::MissingMarker(name))?;
    if found.next().is_some() {
        return Err(SelectorError::DuplicateMarker(name));
    }

    Ok(first)
}

fn build_selector(world: &mut World) -> Result<MarbleSelector, SelectorError> {
    let config = world.resource::<SelectorConfig>().clone();
    config.validate()?;

    let (crosshair, crosshair_pos) = single_marker::<Crosshair>(world, "crosshair")?;
    let (target, target_pos) = single_marker::<TargetMarker>(world, "target")?;

    Ok(PointerTargetSelector::new(
        config,
        PointerActions::default(),
        EntityMarker::new(crosshair, crosshair_pos, true),
        EntityMarker::new(target, target_pos, false),
    ))
}

/// Bind the scene's crosshair and target entities to a new selector.
pub fn bind_selector(world: &mut World) {
    let result = build_selector(world).and_then(|selector| {
        let crosshair = selector.crosshair().entity;
        let target = selector.target().entity;
        install_selector(world, selector)?;
        Ok((crosshair, target))
    });

    match result {
        Ok((crosshair, target)) => {
            log::info!("pointer selector bound: crosshair {crosshair:?}, target {target:?}");
        }
        Err(err) => log::error!("{err}"),
    }
}

/// The crosshair stands in for the OS cursor.
pub fn hide_os_cursor(
    config: Res<SelectorConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !config.hide_cursor {
        return;
    }

    for mut window in windows.iter_mut() {
        window.cursor.visible = false;
    }
}

pub fn sample_pointer(
    selector: Option<ResMut<Selector>>,
    bindings: Res<PointerBindings>,
    buttons: Res<Input<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let delta: Vec2 = motion.iter().map(|ev| ev.delta).sum();

    let Some(mut selector) = selector else {
        return;
    };

    let cursor = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position());

    // a press and release inside one frame still counts as a press
    let select_level = buttons.pressed(bindings.select) || buttons.just_pressed(bindings.select);

    selector.input_mut().sample(cursor, delta, select_level);
}

pub fn tick_selector(
    time: Res<Time>,
    selector: Option<ResMut<Selector>>,
    cameras: Query<(&Camera, &GlobalTransform), With<WorldCamera>>,
    mut selected: EventWriter<TargetSelected>,
) {
    let Some(mut selector) = selector else {
        return;
    };

    let projector = ViewportProjector::active(cameras.iter());
    let camera = projector.as_ref().map(|p| p as &dyn ScreenToWorld);

    if let Some(position) = selector.tick(time.delta(), camera) {
        selected.send(TargetSelected { position });
    }
}

pub fn sync_markers(
    selector: Option<Res<Selector>>,
    mut markers: Query<(&mut Transform, &mut Visibility)>,
) {
    let Some(selector) = selector else {
        return;
    };
    if !selector.is_changed() {
        return;
    }

    for marker in [selector.crosshair(), selector.target()] {
        let Ok((mut transform, mut visibility)) = markers.get_mut(marker.entity) else {
            continue;
        };

        if transform.translation != marker.position() {
            transform.translation = marker.position();
        }
        let wanted = marker.visibility();
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}

/// Drop the selector on shutdown, which releases its input.
pub fn release_on_exit(exit: EventReader<AppExit>, mut commands: Commands) {
    if !exit.is_empty() {
        commands.remove_resource::<Selector>();
    }
}
