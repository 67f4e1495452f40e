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
}

/// Raw bytes of a vertex slice, ready for a GPU buffer
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const BACKGROUND: [f32; 4] = rgb(12, 12, 12);
    /// Left side: paddle, score, menu accents
    pub const CYAN: [f32; 4] = rgb(0, 200, 220);
    /// Right side
    pub const MAGENTA: [f32; 4] = rgb(255, 80, 180);
    pub const GRAY: [f32; 4] = rgb(90, 90, 90);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::WHITE); 3];
        assert_eq!(as_bytes(&verts).len(), 72);
    }

    #[test]
    fn test_colors_normalized() {
        assert_eq!(colors::WHITE, [1.0, 1.0, 1.0, 1.0]);
        assert!((colors::CYAN[2] - 220.0 / 255.0).abs() < 1e-6);
    }
}
