/// Particle and network node types with their spawn constructors.

use crate::core::config;
use crate::core::types::Vec2;
use rand::Rng;
use std::f64::consts::PI;

/// Particle category. Ambient particles live forever and pulse; the other
/// kinds are transients that expire when their lifetime runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    Ambient,
    PointerTrail,
    Burst,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub kind: ParticleKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
    pub opacity: f64,
    // Pulse state, meaningful for Ambient only
    pub base_opacity: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
    // Remaining/total lifetime in frames, meaningful for transients only
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    /// A long-lived drifting particle placed randomly on the canvas.
    pub fn ambient<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let base_opacity = rng.gen::<f64>() * 0.6 + 0.2;
        Self {
            kind: ParticleKind::Ambient,
            pos: Vec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height),
            vel: Vec2::new(
                (rng.gen::<f64>() - 0.5) * config::AMBIENT_SPEED * 2.0,
                (rng.gen::<f64>() - 0.5) * config::AMBIENT_SPEED * 2.0,
            ),
            radius: rng.gen::<f64>() * 2.0 + 1.0,
            opacity: base_opacity,
            base_opacity,
            pulse_phase: rng.gen::<f64>() * PI * 2.0,
            pulse_speed: 0.02 + rng.gen::<f64>() * 0.02,
            life: 0,
            max_life: 0,
        }
    }

    /// A short trail particle scattered around the pointer position.
    pub fn trail<R: Rng>(rng: &mut R, pointer: Vec2) -> Self {
        Self::transient(
            ParticleKind::PointerTrail,
            Vec2::new(
                pointer.x + (rng.gen::<f64>() - 0.5) * 20.0,
                pointer.y + (rng.gen::<f64>() - 0.5) * 20.0,
            ),
            Vec2::new((rng.gen::<f64>() - 0.5) * 2.0, (rng.gen::<f64>() - 0.5) * 2.0),
            rng.gen::<f64>() * 2.0 + 1.0,
            0.8,
            config::TRAIL_LIFE,
        )
    }

    /// A burst particle with explicit kinematics, used by the interaction
    /// spawners.
    pub fn transient(
        kind: ParticleKind,
        pos: Vec2,
        vel: Vec2,
        radius: f64,
        opacity: f64,
        life: u32,
    ) -> Self {
        Self {
            kind,
            pos,
            vel,
            radius,
            opacity,
            base_opacity: opacity,
            pulse_phase: 0.0,
            pulse_speed: 0.0,
            life,
            max_life: life,
        }
    }

    pub fn is_transient(&self) -> bool {
        self.kind != ParticleKind::Ambient
    }
}

/// A persistent decorative node: fewer, larger, and slower than particles.
/// Nodes bounce off the canvas edges instead of wrapping.
#[derive(Debug, Clone)]
pub struct NetworkNode {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
    pub opacity: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
}

impl NetworkNode {
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            pos: Vec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height),
            vel: Vec2::new(
                (rng.gen::<f64>() - 0.5) * config::NODE_SPEED * 2.0,
                (rng.gen::<f64>() - 0.5) * config::NODE_SPEED * 2.0,
            ),
            radius: rng.gen::<f64>() * 4.0 + 3.0,
            opacity: 0.7,
            pulse_phase: rng.gen::<f64>() * PI * 2.0,
            pulse_speed: 0.015 + rng.gen::<f64>() * 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ambient_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let p = Particle::ambient(&mut rng, 800.0, 600.0);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.vel.x.abs() <= config::AMBIENT_SPEED);
            assert!(p.vel.y.abs() <= config::AMBIENT_SPEED);
            assert!(p.radius >= 1.0 && p.radius < 3.0);
            assert!(p.base_opacity >= 0.2 && p.base_opacity < 0.8);
            assert!(p.pulse_speed >= 0.02 && p.pulse_speed < 0.04);
            assert!(!p.is_transient());
        }
    }

    #[test]
    fn test_node_spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..200 {
            let n = NetworkNode::spawn(&mut rng, 800.0, 600.0);
            assert!(n.radius >= 3.0 && n.radius < 7.0);
            assert!(n.vel.x.abs() <= config::NODE_SPEED);
            assert!(n.vel.y.abs() <= config::NODE_SPEED);
            assert_eq!(n.opacity, 0.7);
            assert!(n.pulse_speed >= 0.015 && n.pulse_speed < 0.025);
        }
    }

    #[test]
    fn test_trail_particles_expire() {
        let mut rng = StdRng::seed_from_u64(13);
        let p = Particle::trail(&mut rng, Vec2::new(100.0, 100.0));
        assert_eq!(p.kind, ParticleKind::PointerTrail);
        assert_eq!(p.life, config::TRAIL_LIFE);
        assert_eq!(p.max_life, config::TRAIL_LIFE);
        assert!(p.is_transient());
        assert!((p.pos.x - 100.0).abs() <= 10.0);
        assert!((p.pos.y - 100.0).abs() <= 10.0);
    }
}
