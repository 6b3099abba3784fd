//! Per-frame rotation animation.
//!
//! The loop is modeled as explicit state rather than a self-scheduling
//! callback: the host (the desktop app, or a test) calls `FrameLoop::frame`
//! once per frame, and a shared `LoopHandle` can stop it at any point.
//!
//! # Invariants
//! - Rotation increments are per-invocation, not time-scaled; perceived
//!   speed tracks the host's real frame rate.
//! - Accumulation is unbounded: after N frames a target's rotation is
//!   exactly (N * 0.005, N * 0.007), no wraparound.
//! - Absent targets (`None`, or an id no longer in the scene) are skipped
//!   without fault.

use spinview_scene::{NodeId, Scene};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Radians added to rotation.x each frame.
pub const ROT_STEP_X: f32 = 0.005;
/// Radians added to rotation.y each frame.
pub const ROT_STEP_Y: f32 = 0.007;

/// Applies the fixed rotation step to an ordered list of target nodes.
#[derive(Debug, Clone)]
pub struct Spinner {
    targets: Vec<Option<NodeId>>,
}

impl Spinner {
    pub fn new(targets: Vec<Option<NodeId>>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[Option<NodeId>] {
        &self.targets
    }

    /// Advance every present target by one rotation step.
    pub fn advance(&self, scene: &mut Scene) {
        for target in self.targets.iter().flatten() {
            if let Some(node) = scene.get_mut(*target) {
                node.transform.rotation.x += ROT_STEP_X;
                node.transform.rotation.y += ROT_STEP_Y;
            }
        }
    }
}

/// Shared stop flag for a running frame loop.
///
/// Cloneable so the owner of the loop can hand out stop capability; the flag
/// only ever transitions from running to stopped.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if self.running.swap(false, Ordering::Relaxed) {
            tracing::debug!("frame loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

/// The animation loop state: a spinner plus its stop flag.
///
/// There is no scheduler in here. The host re-requests the next frame before
/// calling `frame`, mirroring the reschedule-first ordering of a recursive
/// frame callback, and a plain `for` loop serves as the frame pump in tests.
#[derive(Debug)]
pub struct FrameLoop {
    spinner: Spinner,
    running: Arc<AtomicBool>,
}

impl FrameLoop {
    pub fn new(spinner: Spinner) -> Self {
        Self {
            spinner,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// A handle that can stop this loop.
    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            running: self.running.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }

    /// Run one frame of animation. Returns false without touching the scene
    /// once the loop has been stopped.
    pub fn frame(&mut self, scene: &mut Scene) -> bool {
        if !self.is_running() {
            return false;
        }
        self.spinner.advance(scene);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinview_common::Color;
    use spinview_scene::{create_cube, create_sphere};

    fn scene_with_cube() -> (Scene, NodeId) {
        let mut scene = Scene::new();
        let cube = scene.add(create_cube());
        (scene, cube)
    }

    #[test]
    fn one_frame_adds_exact_step() {
        let (mut scene, cube) = scene_with_cube();
        let spinner = Spinner::new(vec![Some(cube)]);

        spinner.advance(&mut scene);

        let rot = scene.get(cube).unwrap().transform.rotation;
        assert_eq!(rot.x, ROT_STEP_X);
        assert_eq!(rot.y, ROT_STEP_Y);
        assert_eq!(rot.z, 0.0);
    }

    #[test]
    fn accumulation_is_linear_and_unbounded() {
        let (mut scene, cube) = scene_with_cube();
        let spinner = Spinner::new(vec![Some(cube)]);

        let n = 10_000;
        for _ in 0..n {
            spinner.advance(&mut scene);
        }

        let rot = scene.get(cube).unwrap().transform.rotation;
        assert!((rot.x - n as f32 * ROT_STEP_X).abs() < 1e-2);
        assert!((rot.y - n as f32 * ROT_STEP_Y).abs() < 1e-2);
        // Well past a full turn, never wrapped
        assert!(rot.y > std::f32::consts::TAU * 10.0);
    }

    #[test]
    fn none_targets_are_skipped() {
        let (mut scene, cube) = scene_with_cube();
        let spinner = Spinner::new(vec![None, Some(cube), None]);
        // The target list keeps its order and placeholders
        assert_eq!(spinner.targets(), &[None, Some(cube), None]);

        spinner.advance(&mut scene);

        let rot = scene.get(cube).unwrap().transform.rotation;
        assert_eq!(rot.x, ROT_STEP_X);
    }

    #[test]
    fn stale_target_id_is_skipped() {
        let (mut scene, _cube) = scene_with_cube();
        let spinner = Spinner::new(vec![Some(NodeId(999))]);
        // Must not panic or mutate anything
        spinner.advance(&mut scene);
    }

    #[test]
    fn children_are_never_directly_mutated() {
        let mut scene = Scene::new();
        let cube = scene.add(create_cube());
        let sphere = scene
            .add_child(cube, create_sphere(Color::from_hex(0x0000ff)))
            .unwrap();
        let spinner = Spinner::new(vec![Some(cube)]);

        for _ in 0..5 {
            spinner.advance(&mut scene);
        }

        // The child's own transform is untouched; its motion comes only
        // from world-transform composition with the rotated parent.
        let child = scene.get(sphere).unwrap();
        assert_eq!(child.transform.rotation, glam::Vec3::ZERO);
        let parent_world = scene.world_transform(cube).unwrap();
        let expected = parent_world * child.transform.local_matrix();
        let got = scene.world_transform(sphere).unwrap();
        for i in 0..4 {
            assert!((got.col(i) - expected.col(i)).length() < 1e-6);
        }
    }

    #[test]
    fn frame_loop_advances_until_stopped() {
        let (mut scene, cube) = scene_with_cube();
        let mut frame_loop = FrameLoop::new(Spinner::new(vec![Some(cube)]));
        let handle = frame_loop.handle();

        assert!(frame_loop.frame(&mut scene));
        assert!(frame_loop.frame(&mut scene));
        handle.stop();
        assert!(!frame_loop.frame(&mut scene));
        assert!(!handle.is_running());

        // Rotation stops accumulating once the loop is stopped
        let rot = scene.get(cube).unwrap().transform.rotation;
        assert_eq!(rot.x, 2.0 * ROT_STEP_X);
        assert_eq!(rot.y, 2.0 * ROT_STEP_Y);
    }
}
