// Host-side tests for the particle field.

use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};
use robot_head::core::{AnimationConfig, Particle, ParticleField, ParticleIntegration};

fn field(seed: u64) -> ParticleField {
    ParticleField::new(&AnimationConfig::default(), StdRng::seed_from_u64(seed))
}

fn single(config: &AnimationConfig, position: Vec3, velocity: Vec3) -> ParticleField {
    ParticleField::from_particles(
        config,
        vec![Particle { position, velocity }],
        StdRng::seed_from_u64(5),
    )
}

#[test]
fn initial_particles_fill_the_spawn_volume() {
    let f = field(1);
    assert_eq!(f.len(), 200);
    assert!(!f.is_empty());
    for p in f.particles() {
        let (pos, vel) = (p.position, p.velocity);
        assert!((-10.0..=10.0).contains(&pos.x), "x {}", pos.x);
        assert!((-7.5..=7.5).contains(&pos.y), "y {}", pos.y);
        assert!((-10.0..=0.0).contains(&pos.z), "z {}", pos.z);
        assert!((-0.0025..=0.0025).contains(&vel.x), "vx {}", vel.x);
        assert!((-0.0025..=0.0025).contains(&vel.z), "vz {}", vel.z);
        assert!((0.002..=0.012).contains(&vel.y), "vy {}", vel.y);
    }
}

#[test]
fn count_is_conserved_and_ceiling_is_never_exceeded() {
    let mut f = field(2);
    for _ in 0..10_000 {
        f.step(1.0 / 60.0);
        assert_eq!(f.len(), 200);
        assert!(f.particles().iter().all(|p| p.position.y <= 8.0));
    }
}

#[test]
fn velocities_survive_resets() {
    let mut f = field(3);
    let before: Vec<Vec3> = f.particles().iter().map(|p| p.velocity).collect();
    let mut resets = 0;
    for _ in 0..10_000 {
        let prev: Vec<f32> = f.particles().iter().map(|p| p.position.y).collect();
        f.step(1.0 / 60.0);
        resets += f
            .particles()
            .iter()
            .zip(&prev)
            .filter(|(p, y)| p.position.y < **y)
            .count();
    }
    assert!(resets > 100, "only {resets} resets");
    let after: Vec<Vec3> = f.particles().iter().map(|p| p.velocity).collect();
    assert_eq!(before, after);
}

#[test]
fn reset_boundary_is_strict() {
    let config = AnimationConfig::default();
    let mut f = single(&config, Vec3::new(1.0, 7.75, -3.0), Vec3::new(0.0, 0.25, 0.0));

    // Landing exactly on the ceiling is not past it
    f.step(1.0 / 60.0);
    let p = f.particles()[0];
    assert_eq!(p.position, Vec3::new(1.0, 8.0, -3.0));

    f.step(1.0 / 60.0);
    let p = f.particles()[0];
    assert_eq!(p.position.y, -8.0);
    assert!((-10.0..10.0).contains(&p.position.x));
    assert!((-10.0..0.0).contains(&p.position.z));
    assert_eq!(p.velocity, Vec3::new(0.0, 0.25, 0.0));
}

#[test]
fn horizontal_drift_is_unbounded_between_resets() {
    let config = AnimationConfig::default();
    let mut f = single(&config, Vec3::new(9.9, -8.0, -1.0), Vec3::new(0.5, 0.001, 0.5));
    for _ in 0..10 {
        f.step(1.0 / 60.0);
    }
    let p = f.particles()[0].position;
    assert!(p.x > 10.0 && p.z > 0.0);
}

#[test]
fn per_frame_integration_ignores_delta() {
    let config = AnimationConfig::default();
    let mut a = single(&config, Vec3::ZERO, Vec3::new(0.0, 0.25, 0.0));
    let mut b = single(&config, Vec3::ZERO, Vec3::new(0.0, 0.25, 0.0));
    a.step(1.0 / 144.0);
    b.step(0.5);
    assert_eq!(a.particles()[0].position.y, 0.25);
    assert_eq!(b.particles()[0].position.y, 0.25);
}

#[test]
fn delta_scaled_integration_matches_reference_rate() {
    let config = AnimationConfig {
        particle_integration: ParticleIntegration::DeltaScaled { reference_hz: 60.0 },
        ..AnimationConfig::default()
    };
    let mut f = single(&config, Vec3::ZERO, Vec3::new(0.0, 0.25, 0.0));
    f.step(1.0 / 60.0);
    assert!((f.particles()[0].position.y - 0.25).abs() < 1e-5);
    f.step(1.0 / 30.0);
    assert!((f.particles()[0].position.y - 0.75).abs() < 1e-5);

    // zero and backwards deltas do not move anything
    f.step(0.0);
    f.step(-1.0);
    assert!((f.particles()[0].position.y - 0.75).abs() < 1e-5);
}

#[test]
fn seeded_fields_are_reproducible() {
    let mut a = field(77);
    let mut b = field(77);
    let mut c = field(78);
    for _ in 0..2_000 {
        a.step(1.0 / 60.0);
        b.step(1.0 / 60.0);
        c.step(1.0 / 60.0);
    }
    assert_eq!(a.particles(), b.particles());
    assert_ne!(a.particles(), c.particles());
}
