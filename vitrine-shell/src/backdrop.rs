//! The live backdrop: three spinning grid planes behind the sections.
//!
//! Backdrop owns the scene session for one mount — the camera/plane model
//! from vitrine-core plus every GPU buffer it allocates. Allocations are
//! recorded in a registry (`planes`) and teardown() releases exactly that
//! registry, so disposal never re-derives ownership by walking a scene
//! graph and cannot miss a resource.
//!
//! Lifecycle: built on mount, advanced+drawn each frame while `running`,
//! torn down on unmount. teardown() is idempotent and tolerates a
//! backdrop that never drew a frame.

use wgpu::util::DeviceExt;
use wgpu::{BufferUsages, Device, Queue, RenderPass, TextureFormat};

use vitrine_core::scene::SceneState;

use crate::gfx::{GridPipeline, GridUniforms};

/// GPU resources for one grid plane.
struct PlaneEntry {
    vertices: wgpu::Buffer,
    vertex_count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub struct Backdrop {
    pipeline: GridPipeline,
    scene: SceneState,
    /// Registry of every plane's GPU buffers; drained on teardown.
    planes: Vec<PlaneEntry>,
    running: bool,
}

impl Backdrop {
    pub fn new(device: &Device, format: TextureFormat, aspect: f32) -> Self {
        let pipeline = GridPipeline::new(device, format);
        let scene = SceneState::new(aspect);

        let shared_vertices = SceneState::plane_vertices();
        let planes = (0..scene.planes.len())
            .map(|i| {
                let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("grid-plane-vb"),
                    contents: bytemuck::cast_slice(&shared_vertices),
                    usage: BufferUsages::VERTEX,
                });
                let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("grid-plane-ub"),
                    size: std::mem::size_of::<GridUniforms>() as u64,
                    usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("grid-plane-bg"),
                    layout: pipeline.bind_group_layout(),
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniforms.as_entire_binding(),
                    }],
                });
                tracing::debug!(plane = i, "grid plane buffers created");
                PlaneEntry {
                    vertices,
                    vertex_count: shared_vertices.len() as u32,
                    uniforms,
                    bind_group,
                }
            })
            .collect();

        Self {
            pipeline,
            scene,
            planes,
            running: true,
        }
    }

    /// True until teardown. The frame chain checks this before
    /// rescheduling itself.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Keep the camera's projection in sync with the viewport. Called
    /// synchronously from the resize handler.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.scene.camera.set_aspect(width, height);
    }

    /// Advance every plane's spin. Runs once per frame before encode(),
    /// so the render always observes a fully-updated scene.
    pub fn advance_frame(&mut self) {
        if self.running {
            self.scene.advance_frame();
        }
    }

    /// Write this frame's uniforms and record the draw calls.
    pub fn encode(&self, queue: &Queue, pass: &mut RenderPass<'_>) {
        if !self.running || self.planes.is_empty() {
            return;
        }

        let camera = &self.scene.camera;
        let view_proj = camera.view_proj().to_cols_array_2d();
        let fog = &self.scene.fog;

        for (entry, plane) in self.planes.iter().zip(self.scene.planes.iter()) {
            let uniforms = GridUniforms {
                view_proj,
                model: plane.model_matrix().to_cols_array_2d(),
                camera_pos: [camera.position.x, camera.position.y, camera.position.z, 1.0],
                fog_color: fog.color.to_array(),
                fog_range: [fog.near, fog.far, 0.0, 0.0],
            };
            queue.write_buffer(&entry.uniforms, 0, bytemuck::bytes_of(&uniforms));
        }

        pass.set_pipeline(self.pipeline.pipeline());
        for entry in &self.planes {
            pass.set_bind_group(0, &entry.bind_group, &[]);
            pass.set_vertex_buffer(0, entry.vertices.slice(..));
            pass.draw(0..entry.vertex_count, 0..1);
        }
    }

    /// Stop the frame chain and release every registered GPU buffer.
    /// Safe to call repeatedly or before the first frame.
    pub fn teardown(&mut self) {
        self.running = false;
        for entry in self.planes.drain(..) {
            entry.vertices.destroy();
            entry.uniforms.destroy();
        }
        tracing::debug!("backdrop torn down");
    }
}
