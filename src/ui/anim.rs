/// Animation utilities for card expansion, staggered reveals, and scrolling.

#[derive(Debug, Clone)]
pub struct Animation {
    // Negative while waiting out a start delay
    elapsed: f64,
    duration: f64,
    active: bool,
}

impl Animation {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            duration: 200.0,
            active: false,
        }
    }

    pub fn start(&mut self, duration_ms: f64) {
        self.elapsed = 0.0;
        self.duration = duration_ms;
        self.active = true;
    }

    /// Start after an initial hold. Progress stays at zero until the delay
    /// has elapsed, which staggers grid reveals.
    pub fn start_after(&mut self, delay_ms: f64, duration_ms: f64) {
        self.elapsed = -delay_ms;
        self.duration = duration_ms;
        self.active = true;
    }

    pub fn update(&mut self, dt_ms: f64) {
        if self.active {
            self.elapsed += dt_ms;
            if self.elapsed >= self.duration {
                self.elapsed = self.duration;
                self.active = false;
            }
        }
    }

    /// Returns eased progress (0.0..=1.0) with ease-out cubic.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        ease_out(t)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_complete(&self) -> bool {
        !self.active && self.elapsed >= self.duration
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new()
    }
}

/// Ease-out cubic: 1 - (1 - t)^3
fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linear interpolation between two values.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Smooth interpolation for hover effects (approaches target over time).
pub fn smooth_towards(current: f64, target: f64, dt_ms: f64, speed: f64) -> f64 {
    let factor = 1.0 - (-speed * dt_ms / 1000.0).exp();
    current + (target - current) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_to_completion() {
        let mut anim = Animation::new();
        anim.start(100.0);
        assert!(anim.is_active());
        assert_eq!(anim.progress(), 0.0);

        anim.update(50.0);
        assert!(anim.progress() > 0.0 && anim.progress() < 1.0);

        anim.update(60.0);
        assert!(!anim.is_active());
        assert!(anim.is_complete());
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_delayed_start_holds_at_zero() {
        let mut anim = Animation::new();
        anim.start_after(100.0, 200.0);

        anim.update(50.0);
        assert_eq!(anim.progress(), 0.0);
        anim.update(50.0);
        assert_eq!(anim.progress(), 0.0);

        anim.update(100.0);
        assert!(anim.progress() > 0.0);
        anim.update(200.0);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut anim = Animation::new();
        anim.start(300.0);
        let mut last = 0.0;
        for _ in 0..30 {
            anim.update(16.0);
            let p = anim.progress();
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
    }

    #[test]
    fn test_smooth_towards_converges() {
        let mut v = 0.0;
        for _ in 0..200 {
            v = smooth_towards(v, 1.0, 16.0, 10.0);
        }
        assert!((v - 1.0).abs() < 1e-6);
    }
}
