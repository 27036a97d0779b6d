use std::sync::mpsc::Receiver;
use std::sync::Arc;

use anyhow::{Context, Result};
use glam::Vec2;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use physics::{FrameClock, PointerEvent, RigConfig, RigPose, RigSim};

use crate::camera::{cursor_to_ndc, OrthoCamera};
use crate::gpu_types::CameraUniform;
use crate::mesh::SceneMesh;
use crate::pipeline;

/// Gravity change per key press
const GRAVITY_STEP: f32 = 0.05;

/// Background colour (#a1ffcb)
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0xa1 as f64 / 255.0,
    g: 1.0,
    b: 0xcb as f64 / 255.0,
    a: 1.0,
};

pub struct State {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    num_vertices: u32,
    camera: OrthoCamera,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    mesh: SceneMesh,
    sim: RigSim,
    rig_config: RigConfig,
    rebuild_pending: bool,
    config_updates: Option<Receiver<RigConfig>>,
    clock: FrameClock,
    cursor: PhysicalPosition<f64>,
    show_markers: bool,
}

impl State {
    pub async fn new(
        window: Arc<Window>,
        rig_config: RigConfig,
        config_updates: Option<Receiver<RigConfig>>,
    ) -> Result<Self> {
        let sim = RigSim::from_config(&rig_config)?;

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to get adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Renderer Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no formats")?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let logical = size.to_logical::<f32>(window.scale_factor());
        let camera = OrthoCamera::new(
            logical.width,
            logical.height,
            rig_config.pixels_to_world,
            rig_config.camera_distance,
        );

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj(&camera);

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = pipeline::create_bind_group_layout(&device);
        let bind_group = pipeline::create_bind_group(&device, &bind_group_layout, &camera_buffer);
        let pipeline = pipeline::create_render_pipeline(&device, &bind_group_layout, format);

        let mesh = SceneMesh::new(rig_config.rest_length);
        let vertex_capacity = mesh.max_vertices();
        let vertex_buffer = pipeline::create_vertex_buffer(&device, vertex_capacity);

        tracing::info!(
            "Renderer ready: {}x{} surface, {:?}",
            config.width,
            config.height,
            format
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity,
            num_vertices: 0,
            camera,
            camera_uniform,
            camera_buffer,
            bind_group,
            mesh,
            sim,
            rig_config,
            rebuild_pending: false,
            config_updates,
            clock: FrameClock::new(),
            cursor: PhysicalPosition::new(0.0, 0.0),
            show_markers: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            let logical = new_size.to_logical::<f32>(self.window.scale_factor());
            self.camera.resize(logical.width, logical.height);
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn pointer_ndc(&self) -> Vec2 {
        cursor_to_ndc(self.cursor, self.window.inner_size())
    }

    fn pointer(&mut self, event: PointerEvent) {
        if self.sim.handle_pointer(event, &self.camera) {
            tracing::debug!("Pointer {:?} -> {:?}", event, self.sim.get_debug_info());
        }
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.key_pressed(*code),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let event = match state {
                    ElementState::Pressed => PointerEvent::Down(self.pointer_ndc()),
                    ElementState::Released => PointerEvent::Up,
                };
                self.pointer(event);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = *position;
                self.pointer(PointerEvent::Move(self.pointer_ndc()));
                true
            }
            _ => false,
        }
    }

    fn key_pressed(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::BracketRight | KeyCode::ArrowUp => self.nudge_gravity(GRAVITY_STEP),
            KeyCode::BracketLeft | KeyCode::ArrowDown => self.nudge_gravity(-GRAVITY_STEP),
            KeyCode::KeyR => self.reset_rig(),
            KeyCode::KeyM => {
                self.show_markers = !self.show_markers;
                tracing::info!("Particle markers {}", if self.show_markers { "on" } else { "off" });
            }
            _ => return false,
        }
        true
    }

    fn nudge_gravity(&mut self, step: f32) {
        self.sim.gravity.nudge(step);
        tracing::info!("Gravity set to {:.3}", self.sim.gravity.get());
    }

    fn reset_rig(&mut self) {
        if !self.rebuild_pending {
            self.sim.reset();
            return;
        }
        let gravity = self.sim.gravity;
        match RigSim::from_config(&self.rig_config) {
            Ok(mut sim) => {
                sim.gravity = gravity;
                self.sim = sim;
                self.mesh = SceneMesh::new(self.rig_config.rest_length);
                self.rebuild_pending = false;
            }
            Err(e) => {
                tracing::warn!("Cannot rebuild rig from reloaded config: {e}");
                self.sim.reset();
            }
        }
    }

    /// Apply config reloads pushed by the file watcher.
    fn drain_config_updates(&mut self) {
        let Some(updates) = &self.config_updates else {
            return;
        };
        let Some(latest) = updates.try_iter().last() else {
            return;
        };
        self.sim.gravity.set(latest.gravity);
        self.camera.scale = latest.pixels_to_world;
        self.camera.distance = latest.camera_distance;
        self.rebuild_pending = !self.sim.matches_shape(&latest);
        if self.rebuild_pending {
            tracing::info!("Rig shape changed; press R to rebuild");
        }
        tracing::info!("Applied reloaded config, gravity {:.3}", self.sim.gravity.get());
        self.rig_config = latest;
    }

    pub fn update(&mut self) {
        self.drain_config_updates();
        let delta = self.clock.tick();
        let was_frozen = self.sim.pose().frozen;
        let pose = self.sim.tick(delta, &self.camera.bounds());
        if pose.frozen && !was_frozen {
            tracing::info!("Sword left the view; click its hilt to pick it up again");
        }
        self.update_vertices(&pose);
    }

    fn update_vertices(&mut self, pose: &RigPose) {
        let vertices = self.mesh.vertices(pose, self.show_markers);
        if vertices.len() > self.vertex_capacity {
            self.vertex_buffer.destroy();
            self.vertex_buffer = pipeline::create_vertex_buffer(&self.device, vertices.len());
            self.vertex_capacity = vertices.len();
        }
        if !vertices.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
        self.num_vertices = u32::try_from(vertices.len()).unwrap_or(u32::MAX);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.camera_uniform.update_view_proj(&self.camera);
        self.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.draw(0..self.num_vertices, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}
