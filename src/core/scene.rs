//! Retained scene graph.
//!
//! The graph is declared once at mount. Per-frame animation only rewrites
//! transforms, material intensities and light intensities through stable
//! handles; the node hierarchy itself never changes after construction.

use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialHandle(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryHandle(usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightHandle(usize);

impl NodeHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl MaterialHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl GeometryHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl LightHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    /// Same transform with an XYZ Euler rotation (radians).
    pub fn rotated(self, x: f32, y: f32, z: f32) -> Self {
        Self {
            rotation: Quat::from_euler(glam::EulerRot::XYZ, x, y, z),
            ..self
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Geometric primitives understood by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Cuboid { size: Vec3 },
    Sphere { radius: f32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32 },
    Torus { radius: f32, tube: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn metal(color: Vec3, metalness: f32, roughness: f32) -> Self {
        Self {
            color,
            emissive: Vec3::ZERO,
            emissive_intensity: 0.0,
            metalness,
            roughness,
        }
    }

    pub fn glowing(self, emissive: Vec3, intensity: f32) -> Self {
        Self {
            emissive,
            emissive_intensity: intensity,
            ..self
        }
    }

    /// Emitted radiance (emissive color scaled by intensity).
    pub fn emission(&self) -> Vec3 {
        self.emissive * self.emissive_intensity
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Point,
    /// Cone around the direction to `Light::target`; `angle` is the half-angle.
    Spot { angle: f32, penumbra: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub target: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub parent: Option<NodeHandle>,
    pub transform: Transform,
    pub mesh: Option<(GeometryHandle, MaterialHandle)>,
}

/// Linear distance fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

/// One mesh instance ready for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub geometry: GeometryHandle,
    pub material: MaterialHandle,
    pub world: Mat4,
}

#[derive(Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    materials: Vec<Material>,
    geometries: Vec<Primitive>,
    lights: Vec<Light>,
    names: FnvHashMap<String, NodeHandle>,
    pub background: Vec3,
    pub fog: Option<Fog>,
}

impl SceneGraph {
    pub fn new(background: Vec3) -> Self {
        Self {
            nodes: Vec::new(),
            materials: Vec::new(),
            geometries: Vec::new(),
            lights: Vec::new(),
            names: FnvHashMap::default(),
            background,
            fog: None,
        }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialHandle {
        self.materials.push(material);
        MaterialHandle(self.materials.len() - 1)
    }

    pub fn add_geometry(&mut self, primitive: Primitive) -> GeometryHandle {
        self.geometries.push(primitive);
        GeometryHandle(self.geometries.len() - 1)
    }

    pub fn add_light(&mut self, light: Light) -> LightHandle {
        self.lights.push(light);
        LightHandle(self.lights.len() - 1)
    }

    fn push_node(&mut self, node: Node) -> NodeHandle {
        // parents always precede children so one forward pass resolves world transforms
        debug_assert!(node.parent.map_or(true, |p| p.0 < self.nodes.len()));
        let handle = NodeHandle(self.nodes.len());
        if !node.name.is_empty() {
            self.names.insert(node.name.clone(), handle);
        }
        self.nodes.push(node);
        handle
    }

    pub fn add_group(
        &mut self,
        name: &str,
        parent: Option<NodeHandle>,
        transform: Transform,
    ) -> NodeHandle {
        self.push_node(Node {
            name: name.to_string(),
            parent,
            transform,
            mesh: None,
        })
    }

    pub fn add_mesh(
        &mut self,
        name: &str,
        parent: Option<NodeHandle>,
        transform: Transform,
        geometry: GeometryHandle,
        material: MaterialHandle,
    ) -> NodeHandle {
        self.push_node(Node {
            name: name.to_string(),
            parent,
            transform,
            mesh: Some((geometry, material)),
        })
    }

    pub fn find(&self, name: &str) -> Option<NodeHandle> {
        self.names.get(name).copied()
    }

    pub fn node(&self, handle: NodeHandle) -> &Node {
        &self.nodes[handle.0]
    }

    pub fn transform_mut(&mut self, handle: NodeHandle) -> &mut Transform {
        &mut self.nodes[handle.0].transform
    }

    pub fn material(&self, handle: MaterialHandle) -> &Material {
        &self.materials[handle.0]
    }

    pub fn material_mut(&mut self, handle: MaterialHandle) -> &mut Material {
        &mut self.materials[handle.0]
    }

    pub fn light(&self, handle: LightHandle) -> &Light {
        &self.lights[handle.0]
    }

    pub fn light_mut(&mut self, handle: LightHandle) -> &mut Light {
        &mut self.lights[handle.0]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn geometries(&self) -> &[Primitive] {
        &self.geometries
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// World matrix for every node, indexed like [`SceneGraph::nodes`].
    pub fn world_transforms(&self) -> Vec<Mat4> {
        let mut world: Vec<Mat4> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.transform.matrix();
            let m = match node.parent {
                Some(p) => world[p.0] * local,
                None => local,
            };
            world.push(m);
        }
        world
    }

    pub fn world_transform(&self, handle: NodeHandle) -> Mat4 {
        let mut m = self.nodes[handle.0].transform.matrix();
        let mut parent = self.nodes[handle.0].parent;
        while let Some(p) = parent {
            m = self.nodes[p.0].transform.matrix() * m;
            parent = self.nodes[p.0].parent;
        }
        m
    }

    pub fn draw_list(&self) -> Vec<DrawItem> {
        let world = self.world_transforms();
        self.nodes
            .iter()
            .zip(world)
            .filter_map(|(node, world)| {
                node.mesh.map(|(geometry, material)| DrawItem {
                    geometry,
                    material,
                    world,
                })
            })
            .collect()
    }
}
