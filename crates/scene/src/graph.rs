use crate::light::{AmbientLight, DirectionalLight};
use crate::objects::Primitive;
use glam::Mat4;
use spinview_common::{Color, Transform};
use std::collections::BTreeMap;

/// Unique identifier for a node in the scene graph.
///
/// Ids are assigned monotonically by the owning `Scene` and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Errors from scene-graph operations.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("node {0:?} not found")]
    NodeNotFound(NodeId),
}

/// A renderable (or empty) transform node.
///
/// Parent and child links are managed by the `Scene`; constructors produce
/// detached nodes that only carry a transform and a primitive payload.
#[derive(Debug, Clone)]
pub struct Node {
    pub transform: Transform,
    pub primitive: Primitive,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(primitive: Primitive) -> Self {
        Self {
            transform: Transform::default(),
            primitive,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The root container of everything to be rendered.
///
/// Holds the node tree, the background color, and at most one ambient and
/// one directional light. Uses BTreeMap storage so draw-list construction
/// iterates nodes in a deterministic order.
#[derive(Debug, Default)]
pub struct Scene {
    pub background: Color,
    pub ambient: Option<AmbientLight>,
    pub directional: Option<DirectionalLight>,
    nodes: BTreeMap<NodeId, Node>,
    roots: Vec<NodeId>,
    next_id: u64,
}

impl Scene {
    /// Create an empty scene with a black background and no lights.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Read-only access to all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Add a detached node at the scene root. Returns its id.
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = self.insert(node);
        self.roots.push(id);
        id
    }

    /// Add a detached node as a child of `parent`.
    ///
    /// The child's transform stays purely local; its world transform becomes
    /// the parent's world transform composed with it.
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> Result<NodeId, SceneError> {
        if !self.nodes.contains_key(&parent) {
            return Err(SceneError::NodeNotFound(parent));
        }
        let id = self.insert(node);
        // parent presence checked above; id was just inserted
        self.nodes.get_mut(&id).unwrap().parent = Some(parent);
        self.nodes.get_mut(&parent).unwrap().children.push(id);
        Ok(id)
    }

    /// World transform of a node: parent world transform * local transform,
    /// recursively up to the root. Returns `None` for an unknown id.
    pub fn world_transform(&self, id: NodeId) -> Option<Mat4> {
        let node = self.nodes.get(&id)?;
        let local = node.transform.local_matrix();
        match node.parent {
            Some(parent) => Some(self.world_transform(parent)? * local),
            None => Some(local),
        }
    }

    fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn empty_node() -> Node {
        Node::new(Primitive::Empty)
    }

    #[test]
    fn scene_starts_empty() {
        let scene = Scene::new();
        assert_eq!(scene.node_count(), 0);
        assert!(scene.roots().is_empty());
        assert_eq!(scene.background, Color::BLACK);
        assert!(scene.ambient.is_none());
    }

    #[test]
    fn add_assigns_monotonic_ids() {
        let mut scene = Scene::new();
        let a = scene.add(empty_node());
        let b = scene.add(empty_node());
        assert!(a < b);
        assert_eq!(scene.node_count(), 2);
    }

    #[test]
    fn add_child_links_both_directions() {
        let mut scene = Scene::new();
        let parent = scene.add(empty_node());
        let child = scene.add_child(parent, empty_node()).unwrap();

        assert_eq!(scene.get(child).unwrap().parent(), Some(parent));
        assert_eq!(scene.get(parent).unwrap().children(), &[child]);
        // Children are not scene roots
        assert_eq!(scene.roots(), &[parent]);
    }

    #[test]
    fn add_child_to_missing_parent_fails() {
        let mut scene = Scene::new();
        let err = scene.add_child(NodeId(99), empty_node());
        assert!(matches!(err, Err(SceneError::NodeNotFound(NodeId(99)))));
        assert_eq!(scene.node_count(), 0);
    }

    #[test]
    fn world_transform_composes_parent_then_local() {
        let mut scene = Scene::new();
        let parent = scene.add(empty_node());
        scene.get_mut(parent).unwrap().transform.rotation =
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);

        let mut child_node = empty_node();
        child_node.transform.position = Vec3::new(-0.15, 0.35, 0.3);
        let child = scene.add_child(parent, child_node).unwrap();

        let parent_world = scene.world_transform(parent).unwrap();
        let child_local = scene.get(child).unwrap().transform.local_matrix();
        let expected = parent_world * child_local;
        let got = scene.world_transform(child).unwrap();
        for i in 0..4 {
            assert!((got.col(i) - expected.col(i)).length() < 1e-6);
        }
    }

    #[test]
    fn child_world_position_inherits_parent_rotation() {
        let mut scene = Scene::new();
        let parent = scene.add(empty_node());
        // Quarter turn about Y maps +X to -Z
        scene.get_mut(parent).unwrap().transform.rotation =
            Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);

        let mut child_node = empty_node();
        child_node.transform.position = Vec3::new(1.0, 0.0, 0.0);
        let child = scene.add_child(parent, child_node).unwrap();

        let world = scene.world_transform(child).unwrap();
        let pos = world.col(3).truncate();
        assert!((pos - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn world_transform_of_unknown_node_is_none() {
        let scene = Scene::new();
        assert!(scene.world_transform(NodeId(0)).is_none());
    }
}
