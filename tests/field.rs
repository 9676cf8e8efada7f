mod common;

use common::{Call, FixedSource, RecordingSurface};
use portfolio_particles::{Color, FieldConfig, Particle, ParticleField, RngSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(width: u32, height: u32, seed: u64) -> ParticleField {
    let mut rng = RngSource::new(StdRng::seed_from_u64(seed));
    ParticleField::seed(FieldConfig::default(), width, height, &mut rng)
}

#[test]
fn seeding_respects_attribute_ranges() {
    for seed in 0..20 {
        let field = seeded(640, 360, seed);
        assert_eq!(field.len(), 50);
        for p in field.particles() {
            assert!(p.size() >= 2.0 && p.size() <= 6.0, "size {}", p.size());
            assert!(p.opacity() >= 0.3 && p.opacity() <= 0.8, "opacity {}", p.opacity());
            assert!(p.vel[0] >= -0.5 && p.vel[0] <= 0.5);
            assert!(p.vel[1] >= -0.5 && p.vel[1] <= 0.5);
            assert!(p.x() >= 0.0 && p.x() < 640.0);
            assert!(p.y() >= 0.0 && p.y() < 360.0);
        }
    }
}

#[test]
fn zero_sized_surface_puts_particles_at_origin() {
    let field = seeded(0, 0, 3);
    assert_eq!(field.len(), 50);
    assert!(field.particles().iter().all(|p| p.pos == [0.0, 0.0]));
}

#[test]
fn particle_count_is_configurable() {
    let config = FieldConfig::default().with_particle_count(7);
    let field = ParticleField::seed(config, 100, 100, &mut FixedSource(1.0));
    assert_eq!(field.len(), 7);
}

#[test]
fn wrap_snaps_to_edges() {
    let config = FieldConfig::default();
    let mut field = ParticleField::from_particles(
        config,
        200,
        200,
        vec![
            Particle::new(0.2, 100.0, -0.5, 0.0, 3.0, 0.5),
            Particle::new(199.9, 100.0, 0.3, 0.0, 3.0, 0.5),
        ],
    );
    field.update();
    // -0.3 lands on the far edge, 200.2 lands on zero
    assert_eq!(field.particles()[0].x(), 200.0);
    assert_eq!(field.particles()[1].x(), 0.0);
}

#[test]
fn slow_particles_stay_in_bounds() {
    let mut field = seeded(300, 300, 11);
    for _ in 0..5_000 {
        field.update();
        for p in field.particles() {
            assert!(p.x() >= 0.0 && p.x() <= 300.0);
            assert!(p.y() >= 0.0 && p.y() <= 300.0);
        }
    }
}

#[test]
fn clustered_particles_all_connect_at_full_alpha() {
    let particles = (0..50)
        .map(|_| Particle::new(250.0, 250.0, 0.1, 0.1, 4.0, 0.5))
        .collect();
    let mut field = ParticleField::from_particles(FieldConfig::default(), 500, 500, particles);
    let mut surface = RecordingSurface::default();
    field.step(&mut surface);

    for p in field.particles() {
        assert!((p.x() - 250.1).abs() < 1e-9);
        assert!((p.y() - 250.1).abs() < 1e-9);
    }
    // Ordered pairs including self pairs
    assert_eq!(surface.lines().len(), 50 * 50);
    assert!(surface.strokes().iter().all(|c| *c == Color::WHITE.with_alpha(50.0)));

    let links = field.links();
    assert_eq!(links.len(), 50 * 49 / 2);
    assert!(links.iter().all(|l| l.distance == 0.0 && l.alpha == 50.0));
}

#[test]
fn draw_clears_then_fills_each_particle() {
    let field = ParticleField::from_particles(
        FieldConfig::default(),
        400,
        400,
        vec![
            Particle::new(10.0, 10.0, 0.0, 0.0, 4.0, 0.5),
            Particle::new(300.0, 300.0, 0.0, 0.0, 2.0, 0.4),
        ],
    );
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface);

    assert_eq!(surface.calls[0], Call::Clear);
    assert_eq!(
        &surface.calls[1..4],
        &[
            Call::Fill(Color::WHITE.with_alpha(0.5 * 255.0)),
            Call::NoStroke,
            Call::Circle(10.0, 10.0, 4.0),
        ]
    );
    assert_eq!(surface.circles().len(), 2);
    // Far apart, so only the two zero length self lines
    assert_eq!(
        surface.lines(),
        vec![
            &Call::Line(10.0, 10.0, 10.0, 10.0),
            &Call::Line(300.0, 300.0, 300.0, 300.0),
        ]
    );
    assert!(surface.calls.contains(&Call::StrokeWeight(1.0)));
}

#[test]
fn link_at_exact_threshold_is_not_drawn() {
    let field = ParticleField::from_particles(
        FieldConfig::default(),
        400,
        400,
        vec![
            Particle::new(0.0, 0.0, 0.0, 0.0, 4.0, 0.5),
            Particle::new(60.0, 80.0, 0.0, 0.0, 4.0, 0.5),
        ],
    );
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface);
    assert_eq!(surface.lines().len(), 2);
    assert!(field.links().is_empty());
}

#[test]
fn resize_changes_only_wrap_bounds() {
    let particles = vec![
        Particle::new(400.0, 400.0, 0.1, 0.1, 4.0, 0.5),
        Particle::new(100.0, 100.0, 0.1, 0.1, 4.0, 0.5),
    ];
    let mut field = ParticleField::from_particles(FieldConfig::default(), 500, 500, particles);
    let before: Vec<_> = field.particles().iter().map(|p| p.pos).collect();
    field.resize(300, 300);
    let after: Vec<_> = field.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);

    field.update();
    assert_eq!(field.particles()[0].pos, [0.0, 0.0]);
    assert!((field.particles()[1].x() - 100.1).abs() < 1e-9);
}
