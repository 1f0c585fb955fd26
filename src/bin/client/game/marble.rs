use bevy::prelude::*;

use marble_pointer::TargetSelected;

pub const MARBLE_RADIUS: f32 = 0.25;

#[derive(Component, Reflect)]
#[reflect(Component)]
pub struct Marble {
    pub speed: f32,
    pub destination: Option<Vec3>,
}

impl Default for Marble {
    fn default() -> Self {
        Self {
            speed: 4.,
            destination: None,
        }
    }
}

pub fn steer_marble(
    mut selected: EventReader<TargetSelected>,
    mut marbles: Query<&mut Marble>,
) {
    let Some(latest) = selected.iter().last() else {
        return;
    };

    for mut marble in marbles.iter_mut() {
        marble.destination = Some(latest.position);
    }
}

pub fn roll_marble(time: Res<Time>, mut marbles: Query<(&mut Transform, &mut Marble)>) {
    for (mut transform, mut marble) in marbles.iter_mut() {
        let Some(destination) = marble.destination else {
            continue;
        };

        // roll on the ground, ignore the target's height
        let goal = Vec3::new(destination.x, MARBLE_RADIUS, destination.z);
        let to_goal = goal - transform.translation;
        let step = marble.speed * time.delta_seconds();

        if to_goal.length() <= step {
            transform.translation = goal;
            marble.destination = None;
        } else {
            transform.translation += to_goal.normalize() * step;
        }
    }
}
