// Tunables for the particle field. Defaults reproduce the portfolio hero background.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Velocities are drawn from [-max_speed, max_speed] in pixels per frame
    pub max_speed: f64,
    pub size_range: (f64, f64),
    pub opacity_range: (f64, f64),
    // Pairs closer than this (strictly) get a connecting line
    pub link_distance: f64,
    // Line alpha at distance zero, on the 0-255 scale
    pub link_alpha: f64,
    pub stroke_weight: f64,
    pub color: Color,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 50;
    // Upper bound for counts coming in from JS, the link pass is O(n^2)
    pub const MAX_PARTICLES: usize = 2000;
    pub const MAX_SPEED: f64 = 0.5;
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const LINK_ALPHA: f64 = 50.0;

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count.min(FieldConfig::MAX_PARTICLES);
        self
    }

    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_link_distance(mut self, link_distance: f64) -> Self {
        self.link_distance = link_distance;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    // Alpha of the line joining two particles `distance` apart
    pub fn link_alpha_at(&self, distance: f64) -> f64 {
        (1.0 - distance / self.link_distance) * self.link_alpha
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            max_speed: FieldConfig::MAX_SPEED,
            size_range: (2.0, 6.0),
            opacity_range: (0.3, 0.8),
            link_distance: FieldConfig::LINK_DISTANCE,
            link_alpha: FieldConfig::LINK_ALPHA,
            stroke_weight: 1.0,
            color: Color::WHITE,
        }
    }
}
