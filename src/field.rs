// The particle field: a fixed set of drifting particles inside the canvas bounds,
// joined by fading lines when they come close to each other.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::random::RandomSource;
use crate::surface::Surface;
use nalgebra_glm as glm;

/// A connection between two particles in the abstract model, one per unordered pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

pub struct ParticleField {
    config: FieldConfig,
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Seeds `config.particle_count` particles spread uniformly over a `width` x `height` surface.
    ///
    /// A zero sized surface is accepted and puts every particle at the origin.
    pub fn seed(
        config: FieldConfig,
        width: u32,
        height: u32,
        rng: &mut dyn RandomSource,
    ) -> ParticleField {
        let mut particles = Vec::new();
        let (min_size, max_size) = config.size_range;
        let (min_opacity, max_opacity) = config.opacity_range;
        for _ in 0..config.particle_count {
            let pos_x = rng.uniform(0.0, width as f64);
            let pos_y = rng.uniform(0.0, height as f64);
            let vel_x = rng.uniform(-config.max_speed, config.max_speed);
            let vel_y = rng.uniform(-config.max_speed, config.max_speed);
            let size = rng.uniform(min_size, max_size);
            let opacity = rng.uniform(min_opacity, max_opacity);
            particles.push(Particle::new(pos_x, pos_y, vel_x, vel_y, size, opacity));
        }
        ParticleField {
            config,
            width,
            height,
            particles,
        }
    }

    pub fn from_particles(
        config: FieldConfig,
        width: u32,
        height: u32,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            config,
            width,
            height,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Only the bounds change, particles keep drifting from where they are
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn update(&mut self) {
        let width = self.width as f64;
        let height = self.height as f64;
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let color = self.config.color;
        surface.clear();
        for p in &self.particles {
            surface.fill(color.with_alpha(p.opacity() * 255.0));
            surface.no_stroke();
            surface.circle(p.x(), p.y(), p.size());
        }

        // Every ordered pair, self pairs included, so each connection is stroked twice
        for p in &self.particles {
            for other in &self.particles {
                let d = distance(p, other);
                if d < self.config.link_distance {
                    surface.stroke(color.with_alpha(self.config.link_alpha_at(d)));
                    surface.stroke_weight(self.config.stroke_weight);
                    surface.line(p.x(), p.y(), other.x(), other.y());
                }
            }
        }
    }

    // One frame: move everything, then redraw
    pub fn step(&mut self, surface: &mut dyn Surface) {
        self.update();
        self.draw(surface);
    }

    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (a, p) in self.particles.iter().enumerate() {
            for (b, other) in self.particles.iter().enumerate().skip(a + 1) {
                let d = distance(p, other);
                if d < self.config.link_distance {
                    links.push(Link {
                        a,
                        b,
                        distance: d,
                        alpha: self.config.link_alpha_at(d),
                    });
                }
            }
        }
        links
    }
}

fn distance(p: &Particle, other: &Particle) -> f64 {
    glm::distance(&glm::vec2(p.x(), p.y()), &glm::vec2(other.x(), other.y()))
}
