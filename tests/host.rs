mod common;

use common::{Call, FixedSource, RecordingSurface};
use portfolio_particles::{FieldConfig, Host, ParticleSketch, RngSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn missing_container_never_draws() {
    let mut host = Host::mount(
        None,
        ParticleSketch::default(),
        RecordingSurface::default(),
        &mut FixedSource(0.0),
    );
    assert!(!host.is_mounted());
    assert!(host.sketch().field().is_none());

    for _ in 0..10 {
        host.frame();
    }
    host.resize(300, 300);
    assert!(host.surface.calls.is_empty());
    assert_eq!(host.frames(), 0);
}

#[test]
fn mount_sizes_surface_and_seeds_field() {
    let mut rng = RngSource::new(StdRng::seed_from_u64(42));
    let host = Host::mount(
        Some((800, 600)),
        ParticleSketch::default(),
        RecordingSurface::default(),
        &mut rng,
    );
    assert!(host.is_mounted());
    assert_eq!(host.surface.calls, vec![Call::Resize(800, 600)]);

    let field = host.sketch().field().unwrap();
    assert_eq!(field.len(), 50);
    assert_eq!((field.width(), field.height()), (800, 600));
}

#[test]
fn each_frame_clears_and_redraws() {
    let mut rng = RngSource::new(StdRng::seed_from_u64(1));
    let mut host = Host::mount(
        Some((500, 500)),
        ParticleSketch::new(FieldConfig::default().with_particle_count(5)),
        RecordingSurface::default(),
        &mut rng,
    );
    host.surface.calls.clear();

    host.frame();
    host.frame();
    assert_eq!(host.frames(), 2);
    let clears = host.surface.calls.iter().filter(|c| **c == Call::Clear).count();
    assert_eq!(clears, 2);
    assert_eq!(host.surface.circles().len(), 10);
}

#[test]
fn resize_reaches_surface_and_field_without_moving_particles() {
    let mut rng = RngSource::new(StdRng::seed_from_u64(9));
    let mut host = Host::mount(
        Some((500, 500)),
        ParticleSketch::default(),
        RecordingSurface::default(),
        &mut rng,
    );
    let before: Vec<_> = host
        .sketch()
        .field()
        .unwrap()
        .particles()
        .iter()
        .map(|p| p.pos)
        .collect();

    host.resize(300, 300);
    assert_eq!(host.surface.calls.last(), Some(&Call::Resize(300, 300)));

    let field = host.sketch().field().unwrap();
    assert_eq!((field.width(), field.height()), (300, 300));
    let after: Vec<_> = field.particles().iter().map(|p| p.pos).collect();
    assert_eq!(before, after);
}
