use crate::contact::Contact;
use crate::force::ForceField;
use crate::layer::Layer;
use glam::Vec2;

/// Advance every point of `layer` by one tick.
///
/// Per point: forces are added to the velocity, the velocity is damped by the
/// layer viscosity, then added to the position. Damping therefore also
/// shrinks this tick's force contribution.
///
/// `jitter` is called once per point and offsets the rest target for the
/// restoring force.
pub fn integrate(
    layer: &mut Layer,
    field: &ForceField,
    contacts: &[Contact],
    jitter: &mut impl FnMut() -> Vec2,
) {
    let settings = layer.settings;
    for point in layer.points_mut() {
        let mut velocity = point.velocity + field.restoring(point, jitter());
        for contact in contacts {
            velocity += field.pointer(point.position, contact, &settings);
        }
        velocity *= settings.viscosity;
        point.velocity = velocity;
        point.position += velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Bounds;
    use crate::layer::LayerSettings;

    fn field() -> ForceField {
        ForceField {
            force_factor: 0.2,
            hover_factor: 0.1,
            bounds: Bounds {
                min: Vec2::splat(40.0),
                max: Vec2::new(240.0, 90.0),
            },
        }
    }

    #[test]
    fn matches_hand_computed_step() {
        let mut layer = Layer::new(LayerSettings::new(0.5, 100.0, 2.0));
        layer.init_origins(&[Vec2::new(0.0, 0.0)]);
        {
            let p = &mut layer.points_mut()[0];
            p.position = Vec2::new(3.0, 4.0);
            p.velocity = Vec2::new(1.0, 0.0);
        }
        // contact outside the interior, 10 px left of the point
        let contacts = [Contact::new(Vec2::new(-7.0, 4.0), 1.0)];
        integrate(&mut layer, &field(), &contacts, &mut || Vec2::ZERO);

        // restoring: (-3,-4) * 0.2 = (-0.6,-0.8)
        // pointer:   100 / 10 = 10, clamped to 2, pointing +x -> (2,0)
        // velocity:  ((-0.6,-0.8) + (2,0) + (1,0)) * 0.5 = (1.2,-0.4)
        let p = &layer.points()[0];
        assert!((p.velocity - Vec2::new(1.2, -0.4)).length() < 1e-5, "{:?}", p.velocity);
        assert!((p.position - Vec2::new(4.2, 3.6)).length() < 1e-5, "{:?}", p.position);
    }

    #[test]
    fn point_at_rest_stays_put() {
        let mut layer = Layer::new(LayerSettings::new(0.8, 150.0, 3.0));
        layer.init_origins(&[Vec2::new(50.0, 40.0), Vec2::new(60.0, 40.0)]);
        integrate(&mut layer, &field(), &[], &mut || Vec2::ZERO);
        for p in layer.points() {
            assert_eq!(p.position, p.rest());
            assert_eq!(p.velocity, Vec2::ZERO);
        }
    }

    #[test]
    fn jitter_is_drawn_once_per_point() {
        let mut layer = Layer::new(LayerSettings::default());
        layer.init_origins(&[Vec2::ZERO, Vec2::X, Vec2::Y]);
        let mut calls = 0;
        integrate(&mut layer, &field(), &[], &mut || {
            calls += 1;
            Vec2::ZERO
        });
        assert_eq!(calls, 3);
    }
}
