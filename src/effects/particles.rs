//! Background particle field.
//!
//! Particles drift, bounce off the canvas edges and are pulled gently
//! toward the pointer. Pairs closer than the link distance are joined by
//! a line whose opacity fades with distance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::config::ParticleConfig;

/// Pointer position used while the pointer is outside the canvas.
pub const POINTER_AWAY: (f32, f32) = (-1000.0, -1000.0);

const LINK_MAX_OPACITY: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub size: f32,
    pub opacity: f32,
}

/// Line between particles `a` and `b` (`a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

#[derive(Debug)]
pub struct ParticleSystem {
    config: ParticleConfig,
    width: f32,
    height: f32,
    pointer: (f32, f32),
    particles: Vec<Particle>,
    rng: StdRng,
}

/// `min(floor(w*h / area), max)`.
pub fn particle_count(config: &ParticleConfig, width: f32, height: f32) -> usize {
    if config.area_per_particle <= 0.0 || width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let n = (width * height / config.area_per_particle).floor() as usize;
    n.min(config.max_particles)
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, StdRng::from_entropy())
    }

    /// Deterministic field for a fixed seed.
    pub fn seeded(config: ParticleConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ParticleConfig, width: f32, height: f32, rng: StdRng) -> Self {
        let mut system = Self {
            config,
            width,
            height,
            pointer: POINTER_AWAY,
            particles: Vec::new(),
            rng,
        };
        system.seed();
        system
    }

    fn seed(&mut self) {
        let n = particle_count(&self.config, self.width, self.height);
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..n)
            .map(|_| Particle {
                x: rng.gen_range(0.0..=w),
                y: rng.gen_range(0.0..=h),
                vx: rng.gen_range(-0.25..0.25),
                vy: rng.gen_range(-0.25..0.25),
                size: rng.gen_range(1.0..3.0),
                opacity: rng.gen_range(0.2..0.7),
            })
            .collect();
        log::debug!("seeded {} particles for {}x{}", n, w, h);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    /// Canvas resized: the field is re-seeded for the new area.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.seed();
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = (x, y);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = POINTER_AWAY;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        let (px, py) = self.pointer;
        let cfg = self.config;
        // NaN or negative caps collapse to zero.
        let vmax = cfg.max_velocity.max(0.0);

        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, w);
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, h);
            }

            let dx = px - p.x;
            let dy = py - p.y;
            let d = (dx * dx + dy * dy).sqrt();
            if d < cfg.pointer_radius {
                let force = (cfg.pointer_radius - d) / cfg.pointer_radius;
                p.vx += dx * force * cfg.pointer_strength;
                p.vy += dy * force * cfg.pointer_strength;
            }

            p.vx = p.vx.clamp(-vmax, vmax);
            p.vy = p.vy.clamp(-vmax, vmax);
        }
    }

    /// Pairs within the link distance. Rows are scanned in parallel; the
    /// result is ordered by `(a, b)`.
    pub fn links(&self) -> Vec<Link> {
        let ps = &self.particles;
        let max = self.config.link_distance;
        (0..ps.len())
            .into_par_iter()
            .flat_map_iter(|a| {
                let pa = ps[a];
                ps[a + 1..].iter().enumerate().filter_map(move |(off, pb)| {
                    let dx = pa.x - pb.x;
                    let dy = pa.y - pb.y;
                    let d = (dx * dx + dy * dy).sqrt();
                    (d < max).then(|| Link {
                        a,
                        b: a + 1 + off,
                        opacity: link_opacity(d, max),
                    })
                })
            })
            .collect()
    }

    #[cfg(test)]
    fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[inline]
pub fn link_opacity(distance: f32, max: f32) -> f32 {
    (max - distance) / max * LINK_MAX_OPACITY
}
