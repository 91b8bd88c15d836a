//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (RGBA, 0-255)
pub mod colors {
    pub const BACKGROUND: [u8; 4] = [20, 20, 40, 255];
    pub const PLAYER: [u8; 4] = [255, 255, 255, 255];
    pub const SHIELD_FULL: [u8; 4] = [0, 255, 255, 100];
    pub const SHIELD_HALF: [u8; 4] = [100, 200, 255, 100];
    pub const SHIELD_LOW: [u8; 4] = [150, 150, 255, 100];
    pub const SHIELD_PARTICLE: [u8; 4] = [255, 255, 255, 200];
    /// Alpha of the lines joining shield particles
    pub const SHIELD_EDGE_ALPHA: u8 = 150;
    pub const PICKUP_GLOW: [u8; 4] = [0, 255, 255, 100];
    pub const PICKUP_BODY: [u8; 4] = [0, 200, 255, 200];
    pub const PICKUP_CORE: [u8; 4] = [100, 200, 255, 255];
    pub const PICKUP_STAR: [u8; 4] = [255, 255, 255, 200];
    pub const COOLDOWN_TRACK: [u8; 4] = [50, 50, 50, 200];
    pub const COOLDOWN_FILL: [u8; 4] = [0, 200, 255, 200];
    pub const COOLDOWN_READY: [u8; 4] = [0, 255, 255, 200];
}
