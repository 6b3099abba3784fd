use glam::Vec3;
use spinview_anim::{FrameLoop, LoopHandle, Spinner};
use spinview_common::Color;
use spinview_render_wgpu::SceneRenderer;
use spinview_scene::{
    create_cube, create_sphere, create_sphere_with_radius, AmbientLight, DirectionalLight,
    NodeId, PerspectiveCamera, Scene, SceneError,
};
use std::sync::Arc;
use winit::window::Window;

/// Camera vantage point chosen for the framing of the scene.
const CAMERA_POSITION: Vec3 = Vec3::new(1.5, 1.3, 2.8);

const BLUE: u32 = 0x0000ff;
const MAROON: u32 = 0x800000;

/// Startup failure modes. Each aborts initialization before any further
/// side effect; there is no retry path.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),
    #[error("failed to create render surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("scene assembly failed: {0}")]
    Scene(#[from] SceneError),
}

/// Node ids of the fixed scene content.
pub struct SceneContents {
    pub cube: NodeId,
    pub blue_sphere: NodeId,
    pub maroon_sphere: NodeId,
}

/// Assemble the fixed scene: a green wireframe cube at the root with the
/// two colored spheres parented under it, plus one ambient and one
/// directional light. Only the cube is ever animated; the spheres move
/// purely by inheriting its rotation.
pub fn build_scene() -> Result<(Scene, SceneContents), SceneError> {
    let mut scene = Scene::new();
    scene.background = Color::BLACK;
    scene.ambient = Some(AmbientLight::new(Color::WHITE, 0.6));
    scene.directional = Some(DirectionalLight::new(
        Color::WHITE,
        1.0,
        Vec3::new(5.0, 10.0, 7.5),
    ));

    let cube = scene.add(create_cube());

    // Local offsets relative to the cube center; the unit cube's faces
    // sit at +-0.5.
    let mut blue = create_sphere(Color::from_hex(BLUE));
    blue.transform.position = Vec3::new(-0.15, 0.35, 0.3);
    let blue_sphere = scene.add_child(cube, blue)?;

    let mut maroon = create_sphere_with_radius(Color::from_hex(MAROON), 0.25);
    maroon.transform.position = Vec3::new(0.3, -0.05, 0.35);
    let maroon_sphere = scene.add_child(cube, maroon)?;

    Ok((
        scene,
        SceneContents {
            cube,
            blue_sphere,
            maroon_sphere,
        },
    ))
}

/// Build the viewing camera aimed at the origin with the aspect ratio of
/// the initial surface size.
pub fn build_camera(width: u32, height: u32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(
        75.0_f32.to_radians(),
        width as f32 / height.max(1) as f32,
        0.1,
        1000.0,
    );
    camera.position = CAMERA_POSITION;
    camera.look_at(Vec3::ZERO);
    camera
}

/// Owned handle over everything the viewer needs per frame: GPU state,
/// scene, camera, and the animation loop. Dropping it releases all GPU
/// resources, giving deterministic teardown.
pub struct Viewer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: SceneRenderer,
    scene: Scene,
    camera: PerspectiveCamera,
    frame_loop: FrameLoop,
}

impl Viewer {
    /// Build the whole viewer against a window: surface, adapter, device,
    /// renderer, scene, camera, animation loop.
    pub fn initialize(window: Arc<Window>) -> Result<Self, InitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(InitError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("spinview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = SceneRenderer::new(&device, surface_format, config.width, config.height);

        let (scene, contents) = build_scene()?;
        let camera = build_camera(config.width, config.height);
        let frame_loop = FrameLoop::new(Spinner::new(vec![Some(contents.cube)]));

        tracing::info!(
            "viewer initialized with {} backend, {} nodes",
            adapter.get_info().backend.to_str(),
            scene.node_count()
        );
        tracing::debug!(
            "scene nodes: cube={:?} blue={:?} maroon={:?}",
            contents.cube,
            contents.blue_sphere,
            contents.maroon_sphere
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            scene,
            camera,
            frame_loop,
        })
    }

    /// A handle that can stop the animation loop from outside.
    pub fn handle(&self) -> LoopHandle {
        self.frame_loop.handle()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// The resize path: reconfigure the surface, re-establish the camera
    /// aspect invariant, and resize the depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.camera.set_aspect(self.config.width, self.config.height);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    /// Run one animation frame: advance rotations, then render the scene
    /// through the camera. A lost or outdated surface is reconfigured and
    /// the frame skipped; other surface errors drop the frame.
    pub fn frame(&mut self) {
        if !self.frame_loop.frame(&mut self.scene) {
            return;
        }

        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .render(&self.device, &self.queue, &view, &self.scene, &self.camera);

        output.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinview_anim::{ROT_STEP_X, ROT_STEP_Y};
    use spinview_scene::Primitive;

    #[test]
    fn scene_contents_match_fixture() {
        let (scene, contents) = build_scene().unwrap();
        assert_eq!(scene.node_count(), 3);
        assert_eq!(scene.roots(), &[contents.cube]);
        assert!(scene.ambient.is_some());
        assert!(scene.directional.is_some());

        // Both spheres hang under the cube
        let cube = scene.get(contents.cube).unwrap();
        assert_eq!(
            cube.children(),
            &[contents.blue_sphere, contents.maroon_sphere]
        );
    }

    #[test]
    fn sphere_radii_and_offsets() {
        let (scene, contents) = build_scene().unwrap();

        let blue = scene.get(contents.blue_sphere).unwrap();
        assert_eq!(blue.transform.position, Vec3::new(-0.15, 0.35, 0.3));
        match blue.primitive {
            Primitive::Sphere { radius, .. } => assert_eq!(radius, 0.2),
            ref other => panic!("expected sphere, got {other:?}"),
        }

        let maroon = scene.get(contents.maroon_sphere).unwrap();
        assert_eq!(maroon.transform.position, Vec3::new(0.3, -0.05, 0.35));
        match maroon.primitive {
            Primitive::Sphere { radius, .. } => assert_eq!(radius, 0.25),
            ref other => panic!("expected sphere, got {other:?}"),
        }
    }

    #[test]
    fn camera_framing() {
        let camera = build_camera(1280, 720);
        assert_eq!(camera.position, Vec3::new(1.5, 1.3, 2.8));
        assert_eq!(camera.target, Vec3::ZERO);
        assert!((camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
        assert!((camera.fov_y - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn animating_cube_carries_spheres() {
        let (mut scene, contents) = build_scene().unwrap();
        let spinner = Spinner::new(vec![Some(contents.cube)]);

        for _ in 0..3 {
            spinner.advance(&mut scene);
        }

        let cube_rot = scene.get(contents.cube).unwrap().transform.rotation;
        assert!((cube_rot.x - 3.0 * ROT_STEP_X).abs() < 1e-6);
        assert!((cube_rot.y - 3.0 * ROT_STEP_Y).abs() < 1e-6);

        // Sphere transforms untouched; world transforms rotate with the cube
        for id in [contents.blue_sphere, contents.maroon_sphere] {
            let node = scene.get(id).unwrap();
            assert_eq!(node.transform.rotation, Vec3::ZERO);
            let expected =
                scene.world_transform(contents.cube).unwrap() * node.transform.local_matrix();
            let got = scene.world_transform(id).unwrap();
            for i in 0..4 {
                assert!((got.col(i) - expected.col(i)).length() < 1e-6);
            }
        }
    }
}
