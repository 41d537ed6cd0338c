// Host-side tests for the composed per-frame animation.

use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};
use robot_head::core::breathing;
use robot_head::core::lighting::{eye_glow, key_intensity, rim_intensity};
use robot_head::core::{
    build_scene, AnimationConfig, AnimationState, BlinkController, BlinkState, CameraRig,
    ConfigError, FrameClock, FrameTime, HeadAnimator, ParticleField, ParticleIntegration,
    PointerState, PointerTracker, SceneWrites, CAMERA_LOOK_AT, LEFT_PUPIL_REST,
    RIGHT_PUPIL_REST,
};

const FPS: f64 = 60.0;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn tracker_at(x: f32, y: f32) -> PointerTracker {
    let mut t = PointerTracker::default();
    t.set(PointerState::new(x, y));
    t
}

fn frame_time(i: usize) -> FrameTime {
    FrameTime {
        elapsed: i as f64 / FPS,
        delta: (1.0 / FPS) as f32,
    }
}

#[test]
fn first_frame_toward_corner_moves_five_percent() {
    let config = AnimationConfig::default();
    let mut head = HeadAnimator::new(&config, StdRng::seed_from_u64(1));
    let pointer = PointerState::new(1.0, 1.0);
    let pose = head.update(pointer, pointer.proximity(), 0.0);
    assert!(approx(pose.yaw, 0.02, 1e-7), "yaw {}", pose.yaw);
    assert!(approx(pose.pitch, -0.0125, 1e-7), "pitch {}", pose.pitch);
    // Eyes use the faster factor
    assert!(approx(pose.eye_offset.x, 0.15 * 0.15, 1e-7));
    assert!(approx(pose.eye_offset.y, 0.10 * 0.15, 1e-7));
}

#[test]
fn centered_pointer_settles_head_and_maximizes_glow() {
    let mut anim = AnimationState::default();
    let (_, nodes) = build_scene();
    let mut writes = SceneWrites::default();

    let corner = tracker_at(1.0, -1.0);
    for i in 0..60 {
        anim.frame(frame_time(i), corner, &nodes, &mut writes);
    }
    let center = tracker_at(0.0, 0.0);
    let mut out = None;
    for i in 60..(60 + 6 * 60) {
        out = Some(anim.frame(frame_time(i), center, &nodes, &mut writes));
    }
    let out = out.unwrap();
    assert!(out.pose.yaw.abs() < 1e-5, "yaw {}", out.pose.yaw);
    assert!(out.pose.pitch.abs() < 1e-5, "pitch {}", out.pose.pitch);
    assert!(out.pose.eye_offset.length() < 1e-5);
    assert_eq!(out.pose.eye_glow, 3.0);
    assert_eq!(out.key_light, 2.0);
}

#[test]
fn glow_and_light_ranges() {
    for i in 0..=100 {
        let prox = i as f32 / 100.0;
        let g = eye_glow(prox);
        assert!((1.5..=3.0).contains(&g));
        let k = key_intensity(prox);
        assert!((1.5..=2.0).contains(&k));
    }
    assert_eq!(eye_glow(0.0), 3.0);
    assert_eq!(eye_glow(1.0), 1.5);
    assert_eq!(rim_intensity(0.0), 2.0);
    for i in 0..1000 {
        let r = rim_intensity(i as f64 * 0.05);
        assert!((1.7 - 1e-6..=2.3 + 1e-6).contains(&r));
    }
}

#[test]
fn breathing_is_a_pure_periodic_function() {
    let b = breathing::sample(0.0);
    assert_eq!(b.bob, 0.0);
    assert_eq!(b.scale, 1.0);

    let peak = std::f64::consts::FRAC_PI_2 / 0.8;
    assert!(approx(breathing::bob(peak), 0.01, 1e-7));
    assert!(approx(breathing::scale_pulse(peak), 1.005, 1e-6));

    let period = std::f64::consts::TAU / 0.8;
    for i in 0..50 {
        let t = i as f64 * 0.37;
        let a = breathing::sample(t);
        let b = breathing::sample(t + period);
        assert!(approx(a.bob, b.bob, 1e-6));
        assert!(approx(a.scale, b.scale, 1e-6));
    }
}

#[test]
fn camera_rig_smooths_position_and_snaps_orientation() {
    let mut rig = CameraRig::new(0.02);
    let pointer = PointerState::new(1.0, 1.0);
    let cam = *rig.update(pointer);
    assert!(approx(cam.eye.x, 0.006, 1e-7));
    assert!(approx(cam.eye.y, 0.004, 1e-7));
    assert_eq!(cam.eye.z, 6.0);
    assert_eq!(cam.target, CAMERA_LOOK_AT);

    for _ in 0..2_000 {
        rig.update(pointer);
    }
    assert!((rig.camera.eye - Vec3::new(0.3, 0.2, 6.0)).length() < 1e-4);
    assert_eq!(rig.camera.target, CAMERA_LOOK_AT);

    rig.set_aspect(1920, 1080);
    assert!(approx(rig.camera.aspect, 16.0 / 9.0, 1e-6));
    rig.set_aspect(800, 0);
    assert!(rig.camera.aspect.is_finite());
}

#[test]
fn frame_writes_land_on_the_scene() {
    let mut anim = AnimationState::default();
    let (mut scene, nodes) = build_scene();
    let mut writes = SceneWrites::default();
    let pointer = tracker_at(0.5, -0.5);

    let mut out = None;
    for i in 0..30 {
        out = Some(anim.frame(frame_time(i), pointer, &nodes, &mut writes));
        writes.apply(&mut scene);
    }
    let out = out.unwrap();

    let head = scene.node(nodes.head).transform;
    assert_eq!(head.rotation, out.pose.rotation());
    assert_eq!(head.translation, Vec3::new(0.0, out.pose.bob, 0.0));
    assert_eq!(head.scale, Vec3::splat(out.pose.scale));

    let offset = out.pose.eye_offset;
    assert!(offset.x > 0.0 && offset.y < 0.0);
    assert_eq!(
        scene.node(nodes.left_pupil).transform.translation,
        LEFT_PUPIL_REST + offset.extend(0.0)
    );
    assert_eq!(
        scene.node(nodes.right_pupil).transform.translation,
        RIGHT_PUPIL_REST + offset.extend(0.0)
    );
    let lid = scene.node(nodes.left_eyelid).transform.scale;
    assert_eq!(lid, Vec3::new(1.0, out.pose.eyelid_scale_y, 1.0));
    assert_eq!(scene.node(nodes.right_eyelid).transform.scale, lid);

    assert_eq!(
        scene.material(nodes.eye_material).emissive_intensity,
        out.pose.eye_glow
    );
    assert_eq!(scene.light(nodes.rim_light).intensity, out.rim_light);
    assert_eq!(scene.light(nodes.key_light).intensity, out.key_light);
    assert_eq!(writes.camera.as_ref(), Some(&out.camera));
    assert_eq!(anim.camera(), &out.camera);
}

#[test]
fn mid_blink_squashes_both_eyelids() {
    let config = AnimationConfig::default();
    let blink = BlinkController::with_state(
        &config,
        StdRng::seed_from_u64(8),
        BlinkState {
            last_blink_time: 10.0,
            next_blink_delay: 4.0,
        },
    );
    let head = HeadAnimator::with_blink(&config, blink);
    let particles = ParticleField::new(&config, StdRng::seed_from_u64(9));
    let mut anim = AnimationState::from_parts(config, head, particles);
    let (mut scene, nodes) = build_scene();
    let mut writes = SceneWrites::default();

    let at = |elapsed: f64| FrameTime {
        elapsed,
        delta: (1.0 / FPS) as f32,
    };
    let out = anim.frame(at(10.075), PointerTracker::default(), &nodes, &mut writes);
    writes.apply(&mut scene);
    assert!(approx(out.pose.blink_closure, 1.0, 1e-6));
    assert!(approx(out.pose.eyelid_scale_y, 1.0 - 0.9, 1e-5));
    for lid in [nodes.left_eyelid, nodes.right_eyelid] {
        let scale = scene.node(lid).transform.scale;
        assert!(approx(scale.y, 0.1, 1e-5), "lid scale {scale}");
        assert_eq!((scale.x, scale.z), (1.0, 1.0));
    }

    // envelope over: lids reopen
    let out = anim.frame(at(10.2), PointerTracker::default(), &nodes, &mut writes);
    writes.apply(&mut scene);
    assert_eq!(out.pose.eyelid_scale_y, 1.0);
    assert_eq!(scene.node(nodes.left_eyelid).transform.scale, Vec3::ONE);
}

#[test]
fn eyes_lead_the_head() {
    let mut anim = AnimationState::default();
    let (_, nodes) = build_scene();
    let mut writes = SceneWrites::default();
    let out = anim.frame(frame_time(0), tracker_at(1.0, 0.0), &nodes, &mut writes);
    let head_progress = out.pose.yaw / 0.4;
    let eye_progress = out.pose.eye_offset.x / 0.15;
    assert!(eye_progress > head_progress);
    assert_eq!(out.pose.eye_offset.y, 0.0);
}

#[test]
fn frame_steps_particles_once() {
    let mut anim = AnimationState::default();
    let (_, nodes) = build_scene();
    let mut writes = SceneWrites::default();
    let before: Vec<f32> = anim.particles().particles().iter().map(|p| p.position.y).collect();
    anim.frame(frame_time(0), PointerTracker::default(), &nodes, &mut writes);
    for (p, y) in anim.particles().particles().iter().zip(before) {
        let expected = y + p.velocity.y;
        if expected <= 8.0 {
            assert!(approx(p.position.y, expected, 1e-6));
        }
    }
}

#[test]
fn same_seed_same_animation() {
    let (_, nodes) = build_scene();
    let run = |seed: u64| {
        let config = AnimationConfig {
            seed,
            ..AnimationConfig::default()
        };
        let mut anim = AnimationState::new(config).unwrap();
        let mut writes = SceneWrites::default();
        let mut closures = Vec::new();
        for i in 0..(20 * 60) {
            let out = anim.frame(frame_time(i), tracker_at(0.2, 0.4), &nodes, &mut writes);
            closures.push(out.pose.blink_closure);
        }
        (closures, anim.particles().particles().to_vec())
    };
    assert_eq!(run(5), run(5));
    assert_ne!(run(5).1, run(6).1);
}

#[test]
fn frame_clock_starts_at_zero_and_never_runs_backwards() {
    let mut clock = FrameClock::default();
    assert_eq!(
        clock.tick(10.0),
        FrameTime {
            elapsed: 0.0,
            delta: 0.0
        }
    );
    assert_eq!(
        clock.tick(10.5),
        FrameTime {
            elapsed: 0.5,
            delta: 0.5
        }
    );
    let back = clock.tick(10.25);
    assert_eq!(back.elapsed, 0.5);
    assert_eq!(back.delta, 0.0);
    let next = clock.tick(11.0);
    assert_eq!(next.elapsed, 1.0);
    assert_eq!(next.delta, 0.5);
}

#[test]
fn default_config_is_valid() {
    assert_eq!(AnimationConfig::default().validate(), Ok(()));
    assert!(AnimationState::new(AnimationConfig::default()).is_ok());
}

#[test]
fn invalid_configs_are_rejected() {
    let base = AnimationConfig::default();
    let cases = [
        (
            AnimationConfig {
                head_smoothing: 0.0,
                ..base.clone()
            },
            ConfigError::SmoothingOutOfRange {
                channel: "head",
                value: 0.0,
            },
        ),
        (
            AnimationConfig {
                eye_smoothing: 1.5,
                ..base.clone()
            },
            ConfigError::SmoothingOutOfRange {
                channel: "eye",
                value: 1.5,
            },
        ),
        (
            AnimationConfig {
                blink_duration_secs: 0.0,
                ..base.clone()
            },
            ConfigError::BlinkDuration(0.0),
        ),
        (
            AnimationConfig {
                blink_interval_secs: (5.0, 3.0),
                ..base.clone()
            },
            ConfigError::BlinkInterval { min: 5.0, max: 3.0 },
        ),
        (
            AnimationConfig {
                particle_count: 0,
                ..base.clone()
            },
            ConfigError::NoParticles,
        ),
        (
            AnimationConfig {
                particle_integration: ParticleIntegration::DeltaScaled { reference_hz: 0.0 },
                ..base.clone()
            },
            ConfigError::ReferenceRate(0.0),
        ),
    ];
    for (config, expected) in cases {
        assert_eq!(config.validate(), Err(expected));
        assert!(AnimationState::new(config).is_err());
    }

    let mut inverted = base.clone();
    inverted.particle_bounds.ceiling_y = -9.0;
    assert_eq!(
        inverted.validate(),
        Err(ConfigError::ParticleBounds {
            floor: -8.0,
            ceiling: -9.0
        })
    );

    let snappy = AnimationConfig {
        camera_smoothing: 1.0,
        ..base
    };
    assert_eq!(snappy.validate(), Ok(()));
}
