mod game;

use anyhow::Context;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use marble_pointer::{
    marker::{Crosshair, TargetMarker, WorldCamera},
    PointerTargetPlugin, SelectorConfig,
};

fn main() -> anyhow::Result<()> {
    let config = SelectorConfig::from_env().context("failed to read pointer settings")?;

    let mut app = App::new();
    app.insert_resource(config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Marble".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PointerTargetPlugin)
        .add_plugins(game::GamePlugin)
        .add_systems(Update, bevy::window::close_on_esc);

    #[cfg(debug_assertions)]
    {
        app.register_type::<SelectorConfig>()
            .register_type::<Crosshair>()
            .register_type::<TargetMarker>()
            .register_type::<WorldCamera>()
            .register_type::<game::marble::Marble>()
            .add_plugins(WorldInspectorPlugin::new());
    }

    app.run();

    Ok(())
}
