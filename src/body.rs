//! Shared circular-body capability.
//!
//! Every game entity is a circle moving with constant velocity between
//! frames.  [`Body`] carries that state; each entity kind embeds one and
//! exposes it through [`Circular`], which supplies the collision test.

use bevy::math::Vec2;

/// Position, velocity and radius of a moving circle (screen space, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(position: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            position,
            velocity: Vec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance position by `velocity * dt`.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Multiply velocity by `friction`, then integrate.
    #[inline]
    pub fn drift(&mut self, dt: f32, friction: f32) {
        self.velocity *= friction;
        self.integrate(dt);
    }

    /// Circles touch when the centre distance is at most the radius sum.
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        self.position.distance(other.position) <= self.radius + other.radius
    }

    /// `true` once the whole circle, padded by `margin`, has left the
    /// `width × height` viewport.
    pub fn is_beyond_viewport(&self, width: f32, height: f32, margin: f32) -> bool {
        let reach = self.radius + margin;
        self.position.x < -reach
            || self.position.x > width + reach
            || self.position.y < -reach
            || self.position.y > height + reach
    }
}

/// Anything that owns a [`Body`].
pub trait Circular {
    fn body(&self) -> &Body;

    #[inline]
    fn position(&self) -> Vec2 {
        self.body().position
    }

    #[inline]
    fn radius(&self) -> f32 {
        self.body().radius
    }

    /// Symmetric circle-circle overlap test.
    fn collides_with<T: Circular + ?Sized>(&self, other: &T) -> bool {
        self.body().overlaps(other.body())
    }
}

impl Circular for Body {
    fn body(&self) -> &Body {
        self
    }
}

/// Rotate `v` counter-clockwise by `degrees`.
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_circles_collide() {
        let a = Body::new(Vec2::new(0.0, 0.0), 10.0);
        let b = Body::new(Vec2::new(15.0, 0.0), 5.0);
        assert!(a.collides_with(&b), "distance 15 == radius sum 15 must collide");
    }

    #[test]
    fn separated_circles_do_not_collide() {
        let a = Body::new(Vec2::new(0.0, 0.0), 10.0);
        let b = Body::new(Vec2::new(15.1, 0.0), 5.0);
        assert!(!a.collides_with(&b));
    }

    #[test]
    fn collision_test_is_symmetric() {
        let bodies = [
            Body::new(Vec2::new(0.0, 0.0), 20.0),
            Body::new(Vec2::new(25.0, 5.0), 8.0),
            Body::new(Vec2::new(-40.0, 12.0), 15.0),
            Body::new(Vec2::new(300.0, 300.0), 5.0),
        ];
        for a in &bodies {
            for b in &bodies {
                assert_eq!(a.collides_with(b), b.collides_with(a));
            }
        }
    }

    #[test]
    fn drift_applies_friction_before_moving() {
        let mut body = Body::new(Vec2::ZERO, 1.0).with_velocity(Vec2::new(100.0, 0.0));
        body.drift(1.0, 0.5);
        assert_eq!(body.velocity, Vec2::new(50.0, 0.0));
        assert_eq!(body.position, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn viewport_check_waits_for_full_exit() {
        let mut body = Body::new(Vec2::new(-10.0, 100.0), 10.0);
        assert!(!body.is_beyond_viewport(800.0, 600.0, 0.0), "exactly on the edge");
        body.position.x = -10.5;
        assert!(body.is_beyond_viewport(800.0, 600.0, 0.0));
        assert!(!body.is_beyond_viewport(800.0, 600.0, 5.0), "margin keeps it alive");
    }

    #[test]
    fn rotate_quarter_turn() {
        let v = rotate_degrees(Vec2::X, 90.0);
        assert!((v - Vec2::Y).length() < 1e-5);
    }
}
