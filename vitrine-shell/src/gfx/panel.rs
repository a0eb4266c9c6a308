//! Colored rectangle pipeline for the section panels.
//!
//! Draws alpha-blended rectangles in pixel coordinates over the backdrop.
//! The compositor pushes a fresh instance list each frame; render()
//! uploads the expanded triangle list and draws it in one call.

use wgpu::util::DeviceExt;
use wgpu::{Buffer, BufferUsages, Device, Queue, RenderPass, RenderPipeline, TextureFormat};

use vitrine_core::Rgba;

use super::renderer::DEPTH_FORMAT;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct PanelVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl PanelVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ScreenUniform {
    resolution: [f32; 2],
    _pad: [f32; 2],
}

/// A single rectangle to draw. Coordinates in pixels, y-down.
#[derive(Debug, Clone, Copy)]
pub struct PanelInstance {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: Rgba,
}

pub struct PanelPipeline {
    pipeline: RenderPipeline,
    screen_buffer: Buffer,
    screen_bind_group: wgpu::BindGroup,
    vertices: Vec<PanelVertex>,
}

impl PanelPipeline {
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("panel.wgsl"),
            source: wgpu::ShaderSource::Wgsl(include_str!("panel.wgsl").into()),
        });

        let screen_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("panel-screen"),
            size: std::mem::size_of::<ScreenUniform>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("panel-bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("panel-bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("panel-pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("panel-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PanelVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            // Panels draw over the grid regardless of depth, without
            // disturbing the depth buffer.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            screen_buffer,
            screen_bind_group,
            vertices: Vec::new(),
        }
    }

    /// Queue a rectangle for this frame.
    pub fn push(&mut self, panel: PanelInstance) {
        let c = panel.color.to_array();
        let x0 = panel.x;
        let y0 = panel.y;
        let x1 = panel.x + panel.w;
        let y1 = panel.y + panel.h;

        // Two triangles per rectangle.
        self.vertices.push(PanelVertex { pos: [x0, y0], color: c });
        self.vertices.push(PanelVertex { pos: [x1, y0], color: c });
        self.vertices.push(PanelVertex { pos: [x0, y1], color: c });

        self.vertices.push(PanelVertex { pos: [x1, y0], color: c });
        self.vertices.push(PanelVertex { pos: [x1, y1], color: c });
        self.vertices.push(PanelVertex { pos: [x0, y1], color: c });
    }

    /// Drop all queued rectangles.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Number of queued rectangles.
    pub fn panel_count(&self) -> usize {
        self.vertices.len() / 6
    }

    /// Draw everything queued since the last clear().
    pub fn render(
        &self,
        pass: &mut RenderPass<'_>,
        device: &Device,
        queue: &Queue,
        viewport: [u32; 2],
    ) {
        if self.vertices.is_empty() {
            return;
        }

        let screen = ScreenUniform {
            resolution: [viewport[0] as f32, viewport[1] as f32],
            _pad: [0.0; 2],
        };
        queue.write_buffer(&self.screen_buffer, 0, bytemuck::bytes_of(&screen));

        let vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("panel-vb"),
            contents: bytemuck::cast_slice(&self.vertices),
            usage: BufferUsages::VERTEX,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.screen_bind_group, &[]);
        pass.set_vertex_buffer(0, vb.slice(..));
        pass.draw(0..self.vertices.len() as u32, 0..1);
    }
}
