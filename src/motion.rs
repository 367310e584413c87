// src/motion.rs
//! Damped-spring animation driven from the frame loop.
//!
//! Springs have no duration; they run until displacement and velocity
//! fall under the rest thresholds, then snap onto the target. State is
//! UI-only and polled each frame after `tick(dt)`, never pushed
//! through callbacks.

use crate::config::consts::{
    ENTRANCE_DAMPING, ENTRANCE_OFFSET_Y, ENTRANCE_SCALE, ENTRANCE_STAGGER_SECS,
    ENTRANCE_STIFFNESS, HOVER_DAMPING, HOVER_SCALE, HOVER_STIFFNESS, SPRING_MASS,
};

/// Largest step fed to the integrator. Longer frames (window drags,
/// debugger stops) advance the spring by this much instead of blowing
/// up the integration.
const MAX_DT: f32 = 1.0 / 30.0;

// Rest thresholds: both must hold before a spring snaps to its target.
const REST_DELTA: f32 = 0.001;
const REST_SPEED: f32 = 0.01;

/// One animated scalar under a damped spring.
#[derive(Clone, Debug)]
pub struct Spring {
    current: f32,
    target: f32,
    velocity: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl Spring {
    pub fn new(value: f32, stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            current: value,
            target: value,
            velocity: 0.0,
            stiffness,
            damping,
            mass,
        }
    }

    /// Begin animating toward `target` from wherever the spring is now,
    /// keeping its momentum.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Reset to `from` and animate toward `to`.
    pub fn restart(&mut self, from: f32, to: f32) {
        self.current = from;
        self.velocity = 0.0;
        self.target = to;
    }

    /// Advance by `dt` seconds (semi-implicit Euler).
    pub fn tick(&mut self, dt: f32) {
        if !self.is_animating() {
            return;
        }
        let dt = dt.min(MAX_DT);

        let displacement = self.current - self.target;
        let spring_force = -self.stiffness * displacement;
        let damping_force = -self.damping * self.velocity;
        let acceleration = (spring_force + damping_force) / self.mass;

        self.velocity += acceleration * dt;
        self.current += self.velocity * dt;

        // Close enough on both axes: snap, so is_animating goes false
        // instead of micro-oscillating forever.
        if (self.current - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED {
            self.current = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        (self.current - self.target).abs() >= REST_DELTA || self.velocity.abs() >= REST_SPEED
    }
}

/// Animation state for one card: three entrance springs gated behind a
/// stagger delay, plus an independent hover spring. Owned by the card's
/// slot in the results view, so replacing the results drops any motion
/// still in flight with it.
#[derive(Clone, Debug)]
pub struct CardMotion {
    delay: f32,
    rise: Spring,  // vertical offset, px
    grow: Spring,  // entrance scale
    fade: Spring,  // opacity
    hover: Spring, // hover scale, multiplied onto grow
    hovered: bool,
}

impl CardMotion {
    /// Motion state for a card that is already in place.
    pub fn at_rest() -> Self {
        Self {
            delay: 0.0,
            rise: Spring::new(0.0, ENTRANCE_STIFFNESS, ENTRANCE_DAMPING, SPRING_MASS),
            grow: Spring::new(1.0, ENTRANCE_STIFFNESS, ENTRANCE_DAMPING, SPRING_MASS),
            fade: Spring::new(1.0, ENTRANCE_STIFFNESS, ENTRANCE_DAMPING, SPRING_MASS),
            hover: Spring::new(1.0, HOVER_STIFFNESS, HOVER_DAMPING, SPRING_MASS),
            hovered: false,
        }
    }

    /// Snap to the entrance pose (dropped down, shrunk, invisible) and
    /// start the run-in. Card `index` holds that pose until its stagger
    /// window has elapsed, so cards animate in visual sequence.
    pub fn begin_entrance(&mut self, index: usize) {
        self.delay = index as f32 * ENTRANCE_STAGGER_SECS;
        self.rise.restart(ENTRANCE_OFFSET_Y, 0.0);
        self.grow.restart(ENTRANCE_SCALE, 1.0);
        self.fade.restart(0.0, 1.0);
    }

    /// Pointer enter/leave. Edge-triggered: retargets the hover spring
    /// from wherever it currently is, so a mid-flight grow just turns
    /// around instead of restarting.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.hover.set_target(if hovered { HOVER_SCALE } else { 1.0 });
    }

    /// Advance by `dt` seconds. The stagger delay burns real frame
    /// time; the springs themselves clamp their integration step.
    pub fn tick(&mut self, dt: f32) {
        if self.delay > 0.0 {
            self.delay -= dt;
        } else {
            self.rise.tick(dt);
            self.grow.tick(dt);
            self.fade.tick(dt);
        }
        self.hover.tick(dt);
    }

    pub fn offset_y(&self) -> f32 {
        self.rise.value()
    }

    /// Entrance and hover scales compose multiplicatively.
    pub fn scale(&self) -> f32 {
        self.grow.value() * self.hover.value()
    }

    /// Clamped: the underdamped fade overshoots 1.0 before settling.
    pub fn opacity(&self) -> f32 {
        self.fade.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.delay > 0.0
            || self.rise.is_animating()
            || self.grow.is_animating()
            || self.fade.is_animating()
            || self.hover.is_animating()
    }
}
