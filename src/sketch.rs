//! Setup / frame / resize hooks and the host that drives them.
//!
//! A [`Host`] owns one sketch and the surface it draws on. The browser render
//! loop feeds it animation frames and resize events, tests feed it by hand.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::random::RandomSource;
use crate::surface::Surface;

pub trait Sketch {
    /// Called once when the drawing surface is ready.
    fn on_setup(&mut self, width: u32, height: u32, rng: &mut dyn RandomSource);
    /// Called once per display refresh.
    fn on_frame(&mut self, surface: &mut dyn Surface);
    /// Called after the surface has been resized to the container's new size.
    fn on_resize(&mut self, width: u32, height: u32);
}

pub struct ParticleSketch {
    config: FieldConfig,
    field: Option<ParticleField>,
}

impl ParticleSketch {
    pub fn new(config: FieldConfig) -> Self {
        ParticleSketch {
            config,
            field: None,
        }
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }
}

impl Default for ParticleSketch {
    fn default() -> Self {
        ParticleSketch::new(FieldConfig::default())
    }
}

impl Sketch for ParticleSketch {
    fn on_setup(&mut self, width: u32, height: u32, rng: &mut dyn RandomSource) {
        self.field = Some(ParticleField::seed(self.config, width, height, rng));
    }

    fn on_frame(&mut self, surface: &mut dyn Surface) {
        if let Some(field) = self.field.as_mut() {
            field.step(surface);
        }
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(field) = self.field.as_mut() {
            field.resize(width, height);
        }
    }
}

pub struct Host<S: Sketch, D: Surface> {
    sketch: S,
    pub surface: D,
    mounted: bool,
    frames: u64,
}

impl<S: Sketch, D: Surface> Host<S, D> {
    /// Runs the setup hook when a container size is known. Without a container
    /// the host stays unmounted and every later frame is a no-op.
    pub fn mount(
        container: Option<(u32, u32)>,
        mut sketch: S,
        mut surface: D,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let mounted = match container {
            Some((width, height)) => {
                surface.resize(width, height);
                sketch.on_setup(width, height, rng);
                true
            }
            None => false,
        };
        Host {
            sketch,
            surface,
            mounted,
            frames: 0,
        }
    }

    pub fn frame(&mut self) {
        if !self.mounted {
            return;
        }
        self.sketch.on_frame(&mut self.surface);
        self.frames += 1;
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if !self.mounted {
            return;
        }
        self.surface.resize(width, height);
        self.sketch.on_resize(width, height);
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sketch(&self) -> &S {
        &self.sketch
    }
}
