use bevy::{log, prelude::*};

use marble_pointer::{
    marker::{Crosshair, TargetMarker, WorldCamera},
    plugin::bind_selector,
    PointerSet, Selector,
};

pub mod marble;

use self::marble::{roll_marble, steer_marble, Marble};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(PostStartup, announce_selections.after(bind_selector))
            .add_systems(
                Update,
                (steer_marble, roll_marble)
                    .chain()
                    .after(PointerSet::Select),
            );
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0., 10., 6.).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        WorldCamera,
    ));

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 2500.,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(4., 8., 4.),
        ..default()
    });

    // ground plane
    commands.spawn(PbrBundle {
        mesh: meshes.add(shape::Plane::from_size(20.).into()),
        material: materials.add(Color::rgb(0.3, 0.5, 0.3).into()),
        ..default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(
                shape::Torus {
                    radius: 0.3,
                    ring_radius: 0.05,
                    ..default()
                }
                .into(),
            ),
            material: materials.add(Color::WHITE.into()),
            ..default()
        },
        Crosshair,
        Name::new("Crosshair"),
    ));

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(
                shape::Cylinder {
                    radius: 0.4,
                    height: 0.02,
                    ..default()
                }
                .into(),
            ),
            material: materials.add(Color::rgb(0.9, 0.2, 0.2).into()),
            visibility: Visibility::Hidden,
            ..default()
        },
        TargetMarker,
        Name::new("Target"),
    ));

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(
                shape::UVSphere {
                    radius: marble::MARBLE_RADIUS,
                    ..default()
                }
                .into(),
            ),
            material: materials.add(Color::rgb(0.2, 0.3, 0.9).into()),
            transform: Transform::from_xyz(0., marble::MARBLE_RADIUS, 0.),
            ..default()
        },
        Marble::default(),
        Name::new("Marble"),
    ));
}

fn announce_selections(selector: Option<ResMut<Selector>>) {
    let Some(mut selector) = selector else {
        return;
    };

    let mut count = 0u32;
    selector.subscribe(move |position| {
        count += 1;
        log::info!("selection #{count} at {position}");
    });
}
