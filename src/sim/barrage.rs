//! Deterministic bullet barrage
//!
//! Emitters on the arena rim fire rings of bullets toward the middle while a
//! target orbits the center. Every frame the whole population is swept
//! against the target with a flat scan.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f64::consts::TAU;

use super::body::Body;
use crate::collision::collides_all;
use crate::error::InvalidCircleError;
use crate::polar_to_cartesian;
use crate::settings::ScanSettings;

/// Target orbit radius as a fraction of the arena radius
const TARGET_ORBIT_FRACTION: f64 = 0.3;
/// Emitter placement radius as a fraction of the arena radius
const EMITTER_RING_FRACTION: f64 = 0.85;
/// Upper bound on the bullet buffer reserved up front
const MAX_PREALLOC: usize = 1 << 16;

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// Bullets alive during the scan
    pub live: usize,
    /// IDs of bullets that hit the target, in scan order
    pub hits: Vec<u32>,
}

/// A field of bullets plus the target they are aimed at
#[derive(Debug, Clone)]
pub struct Barrage {
    pub bullets: Vec<Body>,
    pub target: Body,
    pub frame: u64,
    emitters: Vec<DVec2>,
    settings: ScanSettings,
    rng: Pcg32,
    next_id: u32,
    orbit_angle: f64,
}

impl Barrage {
    pub fn new(settings: ScanSettings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let emitter_r = settings.arena_radius * EMITTER_RING_FRACTION;
        let emitters = (0..settings.emitters)
            .map(|_| polar_to_cartesian(emitter_r, rng.random_range(0.0..TAU)))
            .collect();

        let orbit_r = settings.arena_radius * TARGET_ORBIT_FRACTION;
        let target = Body::new(0, polar_to_cartesian(orbit_r, 0.0), settings.target_radius);

        Self {
            bullets: Vec::with_capacity(settings.peak_bullets().min(MAX_PREALLOC)),
            target,
            frame: 0,
            emitters,
            settings,
            rng,
            next_id: 1,
            orbit_angle: 0.0,
        }
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    pub fn emitters(&self) -> &[DVec2] {
        &self.emitters
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire one ring from every emitter. New bullets start at rest history
    /// (`prev == pos`) and move from the next frame on.
    pub fn fire_rings(&mut self) {
        let count = self.settings.bullets_per_ring.max(1);
        let step = TAU / count as f64;

        for e in 0..self.emitters.len() {
            let origin = self.emitters[e];
            let phase = self.rng.random_range(0.0..step);
            for i in 0..count {
                let id = self.next_entity_id();
                let vel = polar_to_cartesian(self.settings.bullet_speed, phase + step * i as f64);
                self.bullets
                    .push(Body::new(id, origin, self.settings.bullet_radius).with_velocity(vel));
            }
        }
    }

    /// Move the target and every bullet by one frame, firing new rings on
    /// schedule
    pub fn advance(&mut self) {
        self.frame += 1;

        let orbit_r = self.settings.arena_radius * TARGET_ORBIT_FRACTION;
        if orbit_r > 0.0 {
            self.orbit_angle = (self.orbit_angle + self.settings.target_speed / orbit_r) % TAU;
        }
        self.target.move_to(polar_to_cartesian(orbit_r, self.orbit_angle));

        for bullet in &mut self.bullets {
            bullet.step();
        }

        let interval = self.settings.ring_interval.max(1) as u64;
        if self.frame % interval == 1 || interval == 1 {
            self.fire_rings();
        }
    }

    /// Bullets that hit the target during the last frame
    pub fn scan(&self) -> Result<Vec<&Body>, InvalidCircleError> {
        collides_all(&self.target, &self.bullets)
    }

    /// Drop bullets whose last step was entirely outside the arena
    pub fn cull(&mut self) -> usize {
        let before = self.bullets.len();
        let limit = self.settings.arena_radius;
        self.bullets.retain(|b| !b.is_outside(limit));
        before - self.bullets.len()
    }

    /// Advance, scan and cull one frame
    pub fn tick(&mut self) -> Result<FrameReport, InvalidCircleError> {
        self.advance();

        let live = self.bullets.len();
        let hits: Vec<u32> = self.scan()?.into_iter().map(|b| b.id).collect();
        if !hits.is_empty() {
            log::debug!("Frame {}: {} of {} bullets hit", self.frame, hits.len(), live);
        }

        let culled = self.cull();
        if culled > 0 {
            log::trace!("Frame {}: culled {} bullets", self.frame, culled);
        }

        Ok(FrameReport {
            frame: self.frame,
            live,
            hits,
        })
    }
}
