/// Background network animation: drifting particles, pulsing nodes,
/// proximity connections, pointer attraction, and interaction bursts.

use crate::core::config;
use crate::core::types::{Color, UiEvent, Vec2};
use crate::network::particle::{NetworkNode, Particle, ParticleKind};
use crate::platform::renderer::Renderer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

pub struct NetworkAnimation {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    nodes: Vec<NetworkNode>,
    pointer: Option<Vec2>,
    rng: StdRng,
    running: bool,
}

impl NetworkAnimation {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, StdRng::from_entropy())
    }

    fn with_rng(width: f64, height: f64, rng: StdRng) -> Self {
        let mut anim = Self {
            width,
            height,
            particles: Vec::new(),
            nodes: Vec::new(),
            pointer: None,
            rng,
            running: true,
        };
        anim.populate();
        anim
    }

    /// Ambient population scales with area, one particle per 12k square units.
    pub fn ambient_count_for(width: f64, height: f64) -> usize {
        (width * height / config::PARTICLE_AREA_DIVISOR) as usize
    }

    /// Node population scales with area on top of a fixed floor.
    pub fn node_count_for(width: f64, height: f64) -> usize {
        (width * height / config::NODE_AREA_DIVISOR) as usize + config::NODE_BASE_COUNT
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Regenerate both populations for new canvas dimensions. In-flight
    /// transients do not survive a resize.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        if !self.running {
            return;
        }
        self.pointer = Some(pos);
        if self.rng.gen::<f64>() < config::TRAIL_CHANCE {
            let trail = Particle::trail(&mut self.rng, pos);
            self.particles.push(trail);
        }
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Spawn the burst shape for one interaction event.
    pub fn apply(&mut self, event: UiEvent) {
        if !self.running {
            return;
        }
        match event {
            UiEvent::CardHover(center) => self.spawn_hover_ring(center),
            UiEvent::CardClick(center) => self.spawn_click_ripple(center),
            UiEvent::ButtonPress(center) => self.spawn_button_burst(center),
            UiEvent::FormSubmit => self.spawn_submit_wave(),
        }
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        if !self.running {
            return;
        }

        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;

        self.particles.retain_mut(|p| {
            p.pos += p.vel;

            if p.is_transient() {
                p.life -= 1;
                if p.life == 0 {
                    return false;
                }
                p.opacity = (p.life as f64 / p.max_life as f64) * 0.8;
            } else {
                p.pulse_phase += p.pulse_speed;
                p.opacity = p.base_opacity + p.pulse_phase.sin() * config::PULSE_AMPLITUDE;
            }

            if let Some(ptr) = pointer {
                let delta = ptr - p.pos;
                let dist = delta.length();
                if dist < config::POINTER_RADIUS && dist > 0.0 {
                    let force = (config::POINTER_RADIUS - dist) / config::POINTER_RADIUS;
                    p.vel += delta.normalized() * (force * config::POINTER_PULL);
                    p.opacity = (p.opacity + force * config::POINTER_GLOW).min(1.0);
                }
            }

            // Wrap-around at canvas edges
            if p.pos.x < 0.0 {
                p.pos.x = w;
            } else if p.pos.x > w {
                p.pos.x = 0.0;
            }
            if p.pos.y < 0.0 {
                p.pos.y = h;
            } else if p.pos.y > h {
                p.pos.y = 0.0;
            }

            p.vel = p.vel * config::VELOCITY_DAMPING;
            p.opacity = p.opacity.clamp(0.0, 1.0);
            true
        });

        for node in &mut self.nodes {
            node.pos += node.vel;
            node.pulse_phase += node.pulse_speed;
            node.opacity =
                (0.7 + node.pulse_phase.sin() * config::PULSE_AMPLITUDE).clamp(0.0, 1.0);

            // Reflect at canvas edges, then clamp back inside
            if node.pos.x < 0.0 || node.pos.x > w {
                node.vel.x = -node.vel.x;
            }
            if node.pos.y < 0.0 || node.pos.y > h {
                node.vel.y = -node.vel.y;
            }
            node.pos.x = node.pos.x.clamp(0.0, w);
            node.pos.y = node.pos.y.clamp(0.0, h);
        }
    }

    pub fn render(&self, renderer: &dyn Renderer) {
        self.render_connections(renderer);
        self.render_nodes(renderer);
        self.render_particles(renderer);
    }

    /// Stop simulating and drop all state. Events arriving afterwards are
    /// ignored.
    pub fn shutdown(&mut self) {
        self.running = false;
        self.particles.clear();
        self.nodes.clear();
        self.pointer = None;
    }

    // ===== Spawning =====

    fn populate(&mut self) {
        let ambient = Self::ambient_count_for(self.width, self.height);
        self.particles.clear();
        for _ in 0..ambient {
            let p = Particle::ambient(&mut self.rng, self.width, self.height);
            self.particles.push(p);
        }

        let nodes = Self::node_count_for(self.width, self.height);
        self.nodes.clear();
        for _ in 0..nodes {
            let n = NetworkNode::spawn(&mut self.rng, self.width, self.height);
            self.nodes.push(n);
        }
    }

    fn spawn_hover_ring(&mut self, center: Vec2) {
        for i in 0..config::HOVER_BURST_COUNT {
            let angle = i as f64 / config::HOVER_BURST_COUNT as f64 * PI * 2.0;
            let dir = Vec2::new(angle.cos(), angle.sin());
            self.particles.push(Particle::transient(
                ParticleKind::Burst,
                center + dir * config::HOVER_BURST_RING,
                dir * 2.0,
                self.rng.gen::<f64>() * 2.0 + 1.0,
                0.8,
                config::HOVER_BURST_LIFE,
            ));
        }
    }

    fn spawn_click_ripple(&mut self, center: Vec2) {
        for i in 0..config::CLICK_BURST_COUNT {
            let angle = i as f64 / config::CLICK_BURST_COUNT as f64 * PI * 2.0;
            let dir = Vec2::new(angle.cos(), angle.sin());
            self.particles.push(Particle::transient(
                ParticleKind::Burst,
                center,
                dir * 4.0,
                self.rng.gen::<f64>() * 2.0 + 1.0,
                1.0,
                config::CLICK_BURST_LIFE,
            ));
        }
    }

    fn spawn_button_burst(&mut self, center: Vec2) {
        for _ in 0..config::BUTTON_BURST_COUNT {
            let angle = self.rng.gen::<f64>() * PI * 2.0;
            let speed = self.rng.gen::<f64>() * 5.0 + 2.0;
            self.particles.push(Particle::transient(
                ParticleKind::Burst,
                center,
                Vec2::new(angle.cos(), angle.sin()) * speed,
                self.rng.gen::<f64>() * 3.0 + 1.0,
                1.0,
                config::BUTTON_BURST_LIFE,
            ));
        }
    }

    fn spawn_submit_wave(&mut self) {
        for _ in 0..config::SUBMIT_WAVE_COUNT {
            self.particles.push(Particle::transient(
                ParticleKind::Burst,
                Vec2::new(self.rng.gen::<f64>() * self.width, self.height + 50.0),
                Vec2::new(
                    (self.rng.gen::<f64>() - 0.5) * 4.0,
                    -(self.rng.gen::<f64>() * 6.0 + 2.0),
                ),
                self.rng.gen::<f64>() * 3.0 + 2.0,
                0.9,
                config::SUBMIT_WAVE_LIFE,
            ));
        }
    }

    // ===== Drawing =====

    fn render_connections(&self, renderer: &dyn Renderer) {
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let a = &self.nodes[i];
                let b = &self.nodes[j];
                let dist = a.pos.distance_to(b.pos);
                if dist < config::NODE_LINK_DIST {
                    let alpha = link_alpha(dist, config::NODE_LINK_DIST, config::NODE_LINK_ALPHA);
                    renderer.draw_line(
                        a.pos.x,
                        a.pos.y,
                        b.pos.x,
                        b.pos.y,
                        Color::from_hex(config::LINK_NODE, alpha),
                        1.0,
                    );
                }
            }
        }

        for p in &self.particles {
            for n in &self.nodes {
                let dist = p.pos.distance_to(n.pos);
                if dist < config::PARTICLE_LINK_DIST {
                    let alpha =
                        link_alpha(dist, config::PARTICLE_LINK_DIST, config::PARTICLE_LINK_ALPHA);
                    renderer.draw_line(
                        p.pos.x,
                        p.pos.y,
                        n.pos.x,
                        n.pos.y,
                        Color::from_hex(config::LINK_PARTICLE, alpha),
                        0.5,
                    );
                }
            }
        }
    }

    fn render_nodes(&self, renderer: &dyn Renderer) {
        for node in &self.nodes {
            renderer.fill_glow_circle(
                node.pos.x,
                node.pos.y,
                node.radius,
                Color::from_hex(config::NODE_FILL, node.opacity),
                config::GLOW_NODE,
            );
            // Inner glow core
            renderer.fill_circle(
                node.pos.x,
                node.pos.y,
                node.radius * 0.6,
                Color::from_hex(config::NODE_CORE, node.opacity * 0.5),
            );
        }
    }

    fn render_particles(&self, renderer: &dyn Renderer) {
        for p in &self.particles {
            let (hex, glow) = match p.kind {
                ParticleKind::PointerTrail => (config::PARTICLE_TRAIL, config::GLOW_TRAIL),
                ParticleKind::Burst => (config::PARTICLE_BURST, config::GLOW_BURST),
                ParticleKind::Ambient => (config::PARTICLE_AMBIENT, config::GLOW_AMBIENT),
            };
            renderer.fill_glow_circle(p.pos.x, p.pos.y, p.radius, Color::from_hex(hex, p.opacity), glow);
        }
    }
}

/// Linear distance-opacity law shared by both connection kinds: `base` at
/// distance zero, fading to zero at `max_dist`.
fn link_alpha(dist: f64, max_dist: f64, base: f64) -> f64 {
    (max_dist - dist) / max_dist * base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: f64, height: f64, seed: u64) -> NetworkAnimation {
        NetworkAnimation::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_population_at_reference_viewport() {
        let anim = seeded(1200.0, 800.0, 1);
        assert_eq!(anim.particle_count(), 80);
        assert_eq!(anim.node_count(), 20);
    }

    #[test]
    fn test_node_floor_on_tiny_canvas() {
        let anim = seeded(100.0, 100.0, 2);
        assert_eq!(anim.particle_count(), 0);
        assert_eq!(anim.node_count(), config::NODE_BASE_COUNT);
    }

    #[test]
    fn test_population_monotonic_in_area() {
        let small_p = NetworkAnimation::ambient_count_for(800.0, 600.0);
        let large_p = NetworkAnimation::ambient_count_for(1600.0, 900.0);
        assert!(large_p >= small_p);

        let small_n = NetworkAnimation::node_count_for(800.0, 600.0);
        let large_n = NetworkAnimation::node_count_for(1600.0, 900.0);
        assert!(large_n >= small_n);
        assert!(small_n >= config::NODE_BASE_COUNT);
    }

    #[test]
    fn test_opacity_stays_in_unit_interval() {
        let mut anim = seeded(400.0, 300.0, 3);
        anim.apply(UiEvent::CardHover(Vec2::new(200.0, 150.0)));
        anim.apply(UiEvent::CardClick(Vec2::new(100.0, 100.0)));
        anim.apply(UiEvent::ButtonPress(Vec2::new(300.0, 200.0)));
        anim.apply(UiEvent::FormSubmit);
        anim.pointer_moved(Vec2::new(200.0, 150.0));

        for _ in 0..300 {
            anim.step();
            for p in &anim.particles {
                assert!(p.opacity >= 0.0 && p.opacity <= 1.0, "particle opacity {}", p.opacity);
            }
            for n in &anim.nodes {
                assert!(n.opacity >= 0.0 && n.opacity <= 1.0, "node opacity {}", n.opacity);
            }
        }
    }

    #[test]
    fn test_transient_expires_after_exact_lifetime() {
        // 60x60 canvas seeds no ambient particles
        let mut anim = seeded(60.0, 60.0, 4);
        assert_eq!(anim.particle_count(), 0);

        anim.particles.push(Particle::transient(
            ParticleKind::Burst,
            Vec2::new(30.0, 30.0),
            Vec2::default(),
            2.0,
            1.0,
            10,
        ));

        for _ in 0..9 {
            anim.step();
        }
        assert_eq!(anim.particle_count(), 1);
        anim.step();
        assert_eq!(anim.particle_count(), 0);
    }

    #[test]
    fn test_link_alpha_law() {
        assert!((link_alpha(0.0, 150.0, 0.5) - 0.5).abs() < 1e-12);
        assert!((link_alpha(75.0, 150.0, 0.5) - 0.25).abs() < 1e-12);
        assert!(link_alpha(150.0, 150.0, 0.5).abs() < 1e-12);
        assert!((link_alpha(40.0, 80.0, 0.3) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_burst_shapes_per_event() {
        let mut anim = seeded(60.0, 60.0, 5);

        anim.apply(UiEvent::CardHover(Vec2::new(30.0, 30.0)));
        assert_eq!(anim.particle_count(), config::HOVER_BURST_COUNT);
        assert!(anim
            .particles
            .iter()
            .all(|p| p.kind == ParticleKind::Burst && p.life == config::HOVER_BURST_LIFE));
        anim.particles.clear();

        anim.apply(UiEvent::CardClick(Vec2::new(30.0, 30.0)));
        assert_eq!(anim.particle_count(), config::CLICK_BURST_COUNT);
        assert!(anim.particles.iter().all(|p| p.opacity == 1.0 && p.life == config::CLICK_BURST_LIFE));
        anim.particles.clear();

        anim.apply(UiEvent::ButtonPress(Vec2::new(30.0, 30.0)));
        assert_eq!(anim.particle_count(), config::BUTTON_BURST_COUNT);
        assert!(anim.particles.iter().all(|p| p.life == config::BUTTON_BURST_LIFE));
        anim.particles.clear();

        anim.apply(UiEvent::FormSubmit);
        assert_eq!(anim.particle_count(), config::SUBMIT_WAVE_COUNT);
        for p in &anim.particles {
            assert_eq!(p.life, config::SUBMIT_WAVE_LIFE);
            assert_eq!(p.pos.y, 60.0 + 50.0);
            assert!(p.vel.y <= -2.0 && p.vel.y > -8.0);
            assert_eq!(p.opacity, 0.9);
        }
    }

    #[test]
    fn test_pointer_pulls_and_brightens() {
        let mut anim = seeded(60.0, 60.0, 6);
        anim.particles.push(Particle::transient(
            ParticleKind::Burst,
            Vec2::new(30.0, 30.0),
            Vec2::default(),
            2.0,
            1.0,
            1000,
        ));
        anim.pointer = Some(Vec2::new(50.0, 30.0));
        anim.step();

        let p = &anim.particles[0];
        assert!(p.vel.x > 0.0, "expected pull toward pointer");
        assert_eq!(p.opacity, 1.0);
    }

    #[test]
    fn test_trail_spawn_rate_roughly_thirty_percent() {
        let mut anim = seeded(60.0, 60.0, 7);
        for _ in 0..1000 {
            anim.pointer_moved(Vec2::new(30.0, 30.0));
        }
        let trails = anim
            .particles
            .iter()
            .filter(|p| p.kind == ParticleKind::PointerTrail)
            .count();
        assert!(trails > 200 && trails < 400, "got {} trails", trails);
    }

    #[test]
    fn test_resize_regenerates_and_drops_transients() {
        let mut anim = seeded(1200.0, 800.0, 8);
        anim.apply(UiEvent::CardClick(Vec2::new(600.0, 400.0)));
        assert!(anim.particle_count() > 80);

        anim.resize(600.0, 400.0);
        assert_eq!(anim.particle_count(), NetworkAnimation::ambient_count_for(600.0, 400.0));
        assert_eq!(anim.node_count(), NetworkAnimation::node_count_for(600.0, 400.0));
        assert!(anim.particles.iter().all(|p| !p.is_transient()));
    }

    #[test]
    fn test_shutdown_ignores_further_events() {
        let mut anim = seeded(400.0, 300.0, 9);
        anim.shutdown();
        assert_eq!(anim.particle_count(), 0);
        assert_eq!(anim.node_count(), 0);

        anim.apply(UiEvent::FormSubmit);
        anim.pointer_moved(Vec2::new(10.0, 10.0));
        anim.step();
        assert_eq!(anim.particle_count(), 0);
    }

    #[test]
    fn test_nodes_stay_in_bounds() {
        let mut anim = seeded(300.0, 200.0, 10);
        for _ in 0..2000 {
            anim.step();
        }
        for n in &anim.nodes {
            assert!(n.pos.x >= 0.0 && n.pos.x <= 300.0);
            assert!(n.pos.y >= 0.0 && n.pos.y <= 200.0);
        }
    }
}
