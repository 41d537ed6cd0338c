//! Declarative robot scene: geometry, materials and the light rig.
//!
//! Built once at mount. Only the nodes listed in [`RobotNodes`] are touched
//! by the animation afterwards.

use super::constants::{EYE_GLOW_BASE, LEFT_PUPIL_REST, RIGHT_PUPIL_REST};
use super::scene::*;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_6};

pub const BACKGROUND: u32 = 0x050a15;
pub const FOG_NEAR: f32 = 8.0;
pub const FOG_FAR: f32 = 25.0;

/// `0xRRGGBB` to linear-ish `Vec3` in `[0, 1]`.
#[inline]
pub fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Handles of everything the frame loop writes to.
#[derive(Clone, Copy, Debug)]
pub struct RobotNodes {
    pub head: NodeHandle,
    pub left_eyelid: NodeHandle,
    pub right_eyelid: NodeHandle,
    pub left_pupil: NodeHandle,
    pub right_pupil: NodeHandle,
    pub eye_material: MaterialHandle,
    pub rim_light: LightHandle,
    pub key_light: LightHandle,
}

struct Palette {
    metal: MaterialHandle,
    dark_metal: MaterialHandle,
    eye_glow: MaterialHandle,
    pupil: MaterialHandle,
    accent: MaterialHandle,
}

fn palette(scene: &mut SceneGraph) -> Palette {
    Palette {
        metal: scene.add_material(Material::metal(rgb(0x4a5568), 0.9, 0.2)),
        dark_metal: scene.add_material(Material::metal(rgb(0x2d3748), 0.95, 0.15)),
        eye_glow: scene.add_material(
            Material::metal(rgb(0x00d4ff), 0.1, 0.1).glowing(rgb(0x00d4ff), EYE_GLOW_BASE),
        ),
        pupil: scene.add_material(Material::metal(rgb(0x001122), 0.9, 0.1)),
        accent: scene.add_material(
            Material::metal(rgb(0x00a8cc), 0.8, 0.2).glowing(rgb(0x00a8cc), 0.5),
        ),
    }
}

fn cuboid(scene: &mut SceneGraph, x: f32, y: f32, z: f32) -> GeometryHandle {
    scene.add_geometry(Primitive::Cuboid {
        size: Vec3::new(x, y, z),
    })
}

fn cylinder(scene: &mut SceneGraph, top: f32, bottom: f32, height: f32) -> GeometryHandle {
    scene.add_geometry(Primitive::Cylinder {
        radius_top: top,
        radius_bottom: bottom,
        height,
    })
}

fn light_rig(scene: &mut SceneGraph) -> (LightHandle, LightHandle) {
    let light = |kind, position: Vec3, color: u32, intensity| Light {
        kind,
        position,
        target: Vec3::ZERO,
        color: rgb(color),
        intensity,
    };
    scene.add_light(light(LightKind::Ambient, Vec3::ZERO, 0x0a1628, 0.1));
    let key = scene.add_light(light(
        LightKind::Spot {
            angle: 0.4,
            penumbra: 0.8,
        },
        Vec3::new(0.0, 2.0, 8.0),
        0xffffff,
        1.5,
    ));
    scene.add_light(light(LightKind::Point, Vec3::new(-5.0, 1.0, 3.0), 0x00a8cc, 0.4));
    scene.add_light(light(LightKind::Point, Vec3::new(5.0, 1.0, 3.0), 0x00a8cc, 0.4));
    let rim = scene.add_light(light(LightKind::Point, Vec3::new(-3.0, 2.0, -3.0), 0x00d4ff, 2.0));
    scene.add_light(light(LightKind::Point, Vec3::new(3.0, 2.0, -3.0), 0x00d4ff, 2.0));
    scene.add_light(light(
        LightKind::Spot {
            angle: 0.6,
            penumbra: 1.0,
        },
        Vec3::new(0.0, 8.0, 0.0),
        0x1a2a4a,
        0.8,
    ));
    scene.add_light(light(LightKind::Point, Vec3::new(0.0, -4.0, 2.0), 0x00d4ff, 0.3));
    (rim, key)
}

pub fn build_scene() -> (SceneGraph, RobotNodes) {
    let mut scene = SceneGraph::new(rgb(BACKGROUND));
    scene.fog = Some(Fog {
        color: rgb(BACKGROUND),
        near: FOG_NEAR,
        far: FOG_FAR,
    });
    let m = palette(&mut scene);
    let (rim_light, key_light) = light_rig(&mut scene);

    let head = scene.add_group("head", None, Transform::IDENTITY);
    let root = Some(head);

    let body = cuboid(&mut scene, 1.8, 2.2, 1.8);
    scene.add_mesh("skull", root, Transform::IDENTITY, body, m.metal);
    let dome = scene.add_geometry(Primitive::Sphere { radius: 0.9 });
    scene.add_mesh("dome", root, Transform::at(0.0, 1.1, 0.0), dome, m.metal);
    let forehead = cuboid(&mut scene, 1.4, 0.5, 0.05);
    scene.add_mesh("forehead", root, Transform::at(0.0, 0.8, 0.91), forehead, m.dark_metal);

    // Eyes: socket, lid group (scaled by blinks) holding the glowing disc, pupil.
    let sockets = scene.add_group("eye_sockets", root, Transform::at(0.0, 0.2, 0.85));
    let socket = cylinder(&mut scene, 0.32, 0.32, 0.2);
    let disc = cylinder(&mut scene, 0.25, 0.25, 0.05);
    let pupil = cylinder(&mut scene, 0.08, 0.08, 0.02);
    let facing = Transform::IDENTITY.rotated(FRAC_PI_2, 0.0, 0.0);

    scene.add_mesh("", Some(sockets), Transform::at(-0.45, 0.0, 0.0), socket, m.dark_metal);
    scene.add_mesh("", Some(sockets), Transform::at(0.45, 0.0, 0.0), socket, m.dark_metal);
    let left_eyelid = scene.add_group("left_eyelid", Some(sockets), Transform::at(-0.45, 0.0, 0.08));
    let right_eyelid = scene.add_group("right_eyelid", Some(sockets), Transform::at(0.45, 0.0, 0.08));
    scene.add_mesh("left_eye", Some(left_eyelid), facing, disc, m.eye_glow);
    scene.add_mesh("right_eye", Some(right_eyelid), facing, disc, m.eye_glow);
    let at = |p: Vec3| Transform::at(p.x, p.y, p.z).rotated(FRAC_PI_2, 0.0, 0.0);
    let left_pupil = scene.add_mesh("left_pupil", Some(sockets), at(LEFT_PUPIL_REST), pupil, m.pupil);
    let right_pupil =
        scene.add_mesh("right_pupil", Some(sockets), at(RIGHT_PUPIL_REST), pupil, m.pupil);

    let nose = cuboid(&mut scene, 0.15, 0.6, 0.1);
    scene.add_mesh("nose", root, Transform::at(0.0, -0.1, 0.92), nose, m.metal);
    let mouth = cuboid(&mut scene, 0.9, 0.25, 0.05);
    scene.add_mesh("mouth", root, Transform::at(0.0, -0.65, 0.91), mouth, m.dark_metal);
    let grill = cuboid(&mut scene, 0.02, 0.15, 0.02);
    for x in [-0.3, -0.15, 0.0, 0.15, 0.3] {
        scene.add_mesh("", root, Transform::at(x, -0.65, 0.94), grill, m.accent);
    }

    let cheek = cuboid(&mut scene, 0.1, 1.5, 0.8);
    scene.add_mesh("", root, Transform::at(-0.91, 0.0, 0.3).rotated(0.0, FRAC_PI_6, 0.0), cheek, m.metal);
    scene.add_mesh("", root, Transform::at(0.91, 0.0, 0.3).rotated(0.0, -FRAC_PI_6, 0.0), cheek, m.metal);
    let side_light = cuboid(&mut scene, 0.02, 0.4, 0.1);
    scene.add_mesh("", root, Transform::at(-0.92, 0.3, 0.5), side_light, m.accent);
    scene.add_mesh("", root, Transform::at(0.92, 0.3, 0.5), side_light, m.accent);

    let jaw = cuboid(&mut scene, 1.6, 0.4, 1.5);
    scene.add_mesh("jaw", root, Transform::at(0.0, -1.0, 0.0), jaw, m.metal);

    let neck = scene.add_group("neck", root, Transform::at(0.0, -1.5, 0.0));
    let neck_core = cylinder(&mut scene, 0.5, 0.6, 0.8);
    scene.add_mesh("", Some(neck), Transform::IDENTITY, neck_core, m.dark_metal);
    for (y, radius) in [(0.2, 0.52), (0.0, 0.55), (-0.2, 0.58)] {
        let ring = scene.add_geometry(Primitive::Torus { radius, tube: 0.02 });
        scene.add_mesh("", Some(neck), Transform::at(0.0, y, 0.0), ring, m.accent);
    }

    let shoulder = scene.add_geometry(Primitive::Sphere { radius: 0.4 });
    scene.add_mesh("", root, Transform::at(-1.2, -2.1, 0.0), shoulder, m.metal);
    scene.add_mesh("", root, Transform::at(1.2, -2.1, 0.0), shoulder, m.metal);
    let torso = cuboid(&mut scene, 2.2, 0.6, 1.2);
    scene.add_mesh("torso", root, Transform::at(0.0, -2.3, 0.0), torso, m.dark_metal);

    let nodes = RobotNodes {
        head,
        left_eyelid,
        right_eyelid,
        left_pupil,
        right_pupil,
        eye_material: m.eye_glow,
        rim_light,
        key_light,
    };
    (scene, nodes)
}
