// Shared helpers for the native integration tests

#![allow(dead_code)]

use portfolio_particles::{Color, RandomSource, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Fill(Color),
    NoStroke,
    Stroke(Color),
    StrokeWeight(f64),
    Circle(f64, f64, f64),
    Line(f64, f64, f64, f64),
    Resize(u32, u32),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn lines(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Line(..)))
            .collect()
    }

    pub fn circles(&self) -> Vec<&Call> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Circle(..)))
            .collect()
    }

    pub fn strokes(&self) -> Vec<Color> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Stroke(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(Call::Fill(color));
    }

    fn no_stroke(&mut self) {
        self.calls.push(Call::NoStroke);
    }

    fn stroke(&mut self, color: Color) {
        self.calls.push(Call::Stroke(color));
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.calls.push(Call::StrokeWeight(weight));
    }

    fn circle(&mut self, x: f64, y: f64, diameter: f64) {
        self.calls.push(Call::Circle(x, y, diameter));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.calls.push(Call::Line(x1, y1, x2, y2));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.calls.push(Call::Resize(width, height));
    }
}

// Random source that answers the same value every time, clamped into the range
pub struct FixedSource(pub f64);

impl RandomSource for FixedSource {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.0.max(min).min(max)
    }
}
