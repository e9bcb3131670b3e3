//! Per-instance attributes: one record per live body

use gravity_physics::Body;

/// Instance data for one rendered body.
///
/// The vertex stage places each unit-circle vertex at
/// `radius * vertex + center` in clip space, so this struct is the
/// entire CPU→GPU contract for a body: 24 bytes, tightly packed.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CircleInstance {
    /// Circle center in clip space
    pub center: [f32; 2],
    /// Circle radius in clip units
    pub radius: f32,
    /// Body color, fixed at spawn
    pub color: [f32; 3],
}

impl CircleInstance {
    /// Vertex buffer layout for the instanced attributes.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            // center: vec2<f32> at location 2
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
            // radius: f32 at location 3
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 3,
                format: wgpu::VertexFormat::Float32,
            },
            // color: vec3<f32> at location 4
            wgpu::VertexAttribute {
                offset: (std::mem::size_of::<[f32; 2]>() + std::mem::size_of::<f32>())
                    as wgpu::BufferAddress,
                shader_location: 4,
                format: wgpu::VertexFormat::Float32x3,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CircleInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: ATTRIBUTES,
        }
    }
}

impl From<&Body> for CircleInstance {
    fn from(body: &Body) -> Self {
        Self {
            center: body.position.to_array(),
            radius: body.radius,
            color: body.color,
        }
    }
}
