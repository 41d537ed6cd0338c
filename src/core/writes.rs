use super::camera::Camera;
use super::scene::{LightHandle, MaterialHandle, NodeHandle, SceneGraph};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

/// Partial transform update; `None` fields keep the node's current value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformWrite {
    pub node: NodeHandle,
    pub translation: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub scale: Option<Vec3>,
}

impl TransformWrite {
    pub fn new(node: NodeHandle) -> Self {
        Self {
            node,
            translation: None,
            rotation: None,
            scale: None,
        }
    }

    pub fn translation(self, t: Vec3) -> Self {
        Self {
            translation: Some(t),
            ..self
        }
    }

    pub fn rotation(self, r: Quat) -> Self {
        Self {
            rotation: Some(r),
            ..self
        }
    }

    pub fn scale(self, s: Vec3) -> Self {
        Self {
            scale: Some(s),
            ..self
        }
    }
}

/// Writes produced by one animation frame, committed before the draw.
#[derive(Clone, Debug, Default)]
pub struct SceneWrites {
    pub transforms: SmallVec<[TransformWrite; 8]>,
    pub emissive: SmallVec<[(MaterialHandle, f32); 2]>,
    pub lights: SmallVec<[(LightHandle, f32); 4]>,
    pub camera: Option<Camera>,
}

impl SceneWrites {
    pub fn clear(&mut self) {
        self.transforms.clear();
        self.emissive.clear();
        self.lights.clear();
        self.camera = None;
    }

    pub fn apply(&self, scene: &mut SceneGraph) {
        for w in &self.transforms {
            let t = scene.transform_mut(w.node);
            if let Some(v) = w.translation {
                t.translation = v;
            }
            if let Some(r) = w.rotation {
                t.rotation = r;
            }
            if let Some(s) = w.scale {
                t.scale = s;
            }
        }
        for &(material, intensity) in &self.emissive {
            scene.material_mut(material).emissive_intensity = intensity;
        }
        for &(light, intensity) in &self.lights {
            scene.light_mut(light).intensity = intensity;
        }
    }
}
