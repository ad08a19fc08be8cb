//! Shape generation for 2D primitives

use std::f32::consts::TAU;

use glam::Vec2;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle (top-left origin)
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (origin.x, origin.y);
    let (x1, y1) = (origin.x + size.x, origin.y + size.y);
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Point on a circle of `radius` around `center` at segment `i` of `segments`
fn rim(center: Vec2, radius: f32, i: u32, segments: u32) -> Vec2 {
    let theta = (i as f32 / segments as f32) * TAU;
    center + Vec2::from_angle(theta) * radius
}

/// Triangle fan for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    (0..segments)
        .flat_map(|i| {
            [
                center,
                rim(center, radius, i, segments),
                rim(center, radius, i + 1, segments),
            ]
        })
        .map(|p| Vertex::at(p, color))
        .collect()
}

/// Triangle strip (as a list) for a hollow circle
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    (0..segments)
        .flat_map(|i| {
            let inner1 = rim(center, inner_radius, i, segments);
            let outer1 = rim(center, outer_radius, i, segments);
            let inner2 = rim(center, inner_radius, i + 1, segments);
            let outer2 = rim(center, outer_radius, i + 1, segments);
            [inner1, outer1, inner2, inner2, outer1, outer2]
        })
        .map(|p| Vertex::at(p, color))
        .collect()
}
