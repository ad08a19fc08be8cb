//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Canvas-space vertex (pixels, y down) with linear RGBA colour
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

    /// Vertex at a point in canvas space
    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: point.to_array(),
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const BARRIER: [f32; 4] = [0.18, 0.77, 0.25, 1.0];
    pub const BARRIER_SHIELDED: [f32; 4] = [0.18, 0.77, 0.25, 0.4];
    pub const PICKUP: [f32; 4] = [1.0, 0.84, 0.0, 1.0];
    /// Character fallback when the habit colour cannot be parsed
    pub const CHARACTER: [f32; 4] = [0.9, 0.13, 0.18, 1.0];
    pub const SHIELD_RING: [f32; 4] = [0.35, 0.75, 1.0, 0.7];
    pub const DOUBLE_POINTS_RING: [f32; 4] = [1.0, 0.84, 0.0, 0.6];
    pub const FLASH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Parse `#rrggbb` / `#rgb` into linear RGBA; `None` for anything else
pub fn parse_hex_color(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match digits.len() {
        6 => Some([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
            1.0,
        ]),
        3 => {
            let expand = |i: usize| {
                let c = &digits[i..i + 1];
                channel(&format!("{c}{c}"))
            };
            Some([expand(0)?, expand(1)?, expand(2)?, 1.0])
        }
        _ => None,
    }
}
