use bevy::{
    math::Ray,
    prelude::{Camera, GlobalTransform, Vec2, Vec3},
};

/// Maps a screen coordinate to a world-space point.
pub trait ScreenToWorld {
    /// `depth` is measured from the camera along its view axis.
    /// Returns `None` when the point cannot be resolved this frame.
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Option<Vec3>;
}

/// Bevy camera seen through [`ScreenToWorld`].
pub struct ViewportProjector<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
}

impl<'a> ViewportProjector<'a> {
    pub fn new(camera: &'a Camera, transform: &'a GlobalTransform) -> Self {
        Self { camera, transform }
    }

    /// First active camera of the candidates, if any.
    pub fn active<I>(cameras: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a Camera, &'a GlobalTransform)>,
    {
        cameras
            .into_iter()
            .find(|(camera, _)| camera.is_active)
            .map(|(camera, transform)| Self::new(camera, transform))
    }
}

impl ScreenToWorld for ViewportProjector<'_> {
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Option<Vec3> {
        let ray = self.camera.viewport_to_world(self.transform, screen)?;

        point_at_depth(
            ray,
            self.transform.translation(),
            self.transform.forward(),
            depth,
        )
    }
}

/// Walk `ray` until the point lies `depth` units in front of `eye` along
/// `forward`. Works for perspective rays (origin on the near plane) and
/// orthographic ones (parallel rays) alike.
pub fn point_at_depth(ray: Ray, eye: Vec3, forward: Vec3, depth: f32) -> Option<Vec3> {
    let forward = forward.try_normalize()?;
    let along = ray.direction.dot(forward);

    if along.abs() <= f32::EPSILON {
        return None;
    }

    let origin_depth = (ray.origin - eye).dot(forward);
    let distance = (depth - origin_depth) / along;

    Some(ray.origin + ray.direction * distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_ray_lands_on_depth_plane() {
        let eye = Vec3::new(0., 10., 0.);
        let forward = Vec3::NEG_Y;
        let direction = Vec3::new(0.3, -1., 0.2).normalize();
        let ray = Ray {
            origin: eye + direction * 0.1,
            direction,
        };

        let point = point_at_depth(ray, eye, forward, 10.).unwrap();

        assert!(((point - eye).dot(forward) - 10.).abs() < 1e-4);
        assert!((point.y - 0.).abs() < 1e-4);
        assert!((point.x - 3.).abs() < 1e-4);
        assert!((point.z - 2.).abs() < 1e-4);
    }

    #[test]
    fn orthographic_ray_keeps_its_offset() {
        let eye = Vec3::new(0., 0., 20.);
        let ray = Ray {
            origin: Vec3::new(5., -2., 20.),
            direction: Vec3::NEG_Z,
        };

        let point = point_at_depth(ray, eye, Vec3::NEG_Z, 10.).unwrap();

        assert_eq!(point, Vec3::new(5., -2., 10.));
    }

    #[test]
    fn ray_parallel_to_depth_plane_is_unresolved() {
        let ray = Ray {
            origin: Vec3::ZERO,
            direction: Vec3::X,
        };

        assert_eq!(point_at_depth(ray, Vec3::ZERO, Vec3::NEG_Z, 10.), None);
    }

    #[test]
    fn inactive_cameras_are_skipped() {
        let inactive = Camera {
            is_active: false,
            ..Default::default()
        };
        let active = Camera::default();
        let transform = GlobalTransform::default();

        assert!(ViewportProjector::active([(&inactive, &transform)]).is_none());

        let picked =
            ViewportProjector::active([(&inactive, &transform), (&active, &transform)]).unwrap();
        assert!(picked.camera.is_active);
    }
}
