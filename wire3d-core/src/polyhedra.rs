/// Vertex and edge tables for the five Platonic solids
///
/// Every generator is a pure function of `size`. Zero or negative sizes give
/// degenerate or mirrored solids, never an error.
use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;
use crate::geometry::{vertex, Edge, Mesh, Vertex};

/// The golden ratio
pub const PHI: f32 = 1.618_034;

/// The five solids the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Tetrahedron,
    Octahedron,
    Cube,
    Icosahedron,
    Dodecahedron,
}

impl SolidKind {
    pub const ALL: [SolidKind; 5] = [
        SolidKind::Tetrahedron,
        SolidKind::Octahedron,
        SolidKind::Cube,
        SolidKind::Icosahedron,
        SolidKind::Dodecahedron,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolidKind::Tetrahedron => "tetrahedron",
            SolidKind::Octahedron => "octahedron",
            SolidKind::Cube => "cube",
            SolidKind::Icosahedron => "icosahedron",
            SolidKind::Dodecahedron => "dodecahedron",
        }
    }

    /// Build the solid with an identity transform.
    pub fn mesh(self, size: f32) -> Mesh {
        let (vertices, edges) = match self {
            SolidKind::Tetrahedron => tetrahedron(size),
            SolidKind::Octahedron => octahedron(size),
            SolidKind::Cube => cube(size),
            SolidKind::Icosahedron => icosahedron(size),
            SolidKind::Dodecahedron => dodecahedron(size),
        };
        let mesh = Mesh::from_parts(vertices, edges);
        debug_assert!(mesh.validate().is_ok(), "{} edge table out of range", self);
        mesh
    }
}

impl fmt::Display for SolidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolidKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolidKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GeometryError::UnknownSolid(s.to_string()))
    }
}

pub fn tetrahedron_mesh(size: f32) -> Mesh {
    SolidKind::Tetrahedron.mesh(size)
}

pub fn octahedron_mesh(size: f32) -> Mesh {
    SolidKind::Octahedron.mesh(size)
}

pub fn cube_mesh(size: f32) -> Mesh {
    SolidKind::Cube.mesh(size)
}

pub fn icosahedron_mesh(size: f32) -> Mesh {
    SolidKind::Icosahedron.mesh(size)
}

pub fn dodecahedron_mesh(size: f32) -> Mesh {
    SolidKind::Dodecahedron.mesh(size)
}

/// Alternating corners of a cube of side `size`
fn tetrahedron(size: f32) -> (Vec<Vertex>, Vec<Edge>) {
    let h = size / 2.0;
    let vertices = vec![
        vertex(h, h, h),
        vertex(h, -h, -h),
        vertex(-h, h, -h),
        vertex(-h, -h, h),
    ];
    let edges = vec![[0, 1], [1, 2], [2, 0], [3, 0], [3, 1], [3, 2]];
    (vertices, edges)
}

/// Poles at ±x (0 and 5), equator on the y/z axes
fn octahedron(size: f32) -> (Vec<Vertex>, Vec<Edge>) {
    let h = size / 2.0;
    let vertices = vec![
        vertex(h, 0.0, 0.0),
        vertex(0.0, h, 0.0),
        vertex(0.0, 0.0, h),
        vertex(0.0, -h, 0.0),
        vertex(0.0, 0.0, -h),
        vertex(-h, 0.0, 0.0),
    ];
    let edges = vec![
        [0, 1],
        [0, 2],
        [0, 4],
        [0, 3],
        [1, 2],
        [2, 3],
        [3, 4],
        [4, 1],
        [5, 1],
        [5, 2],
        [5, 4],
        [5, 3],
    ];
    (vertices, edges)
}

/// Two z layers of four corners, walked (-,-) (+,-) (+,+) (-,+)
fn cube(size: f32) -> (Vec<Vertex>, Vec<Edge>) {
    let h = size / 2.0;
    let mut vertices = Vec::with_capacity(8);
    for layer in 0..2 {
        for corner in 0..4usize {
            let x = -h + size * (((corner + 1) / 2) % 2) as f32;
            let y = -h + size * ((corner / 2) % 2) as f32;
            let z = -h + size * layer as f32;
            vertices.push(vertex(x, y, z));
        }
    }

    let edges = vec![
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ];
    (vertices, edges)
}

/// Three orthogonal golden rectangles
fn icosahedron(size: f32) -> (Vec<Vertex>, Vec<Edge>) {
    let h = size / 2.0;
    let hp = h * PHI;
    let vertices = vec![
        vertex(0.0, h, hp),
        vertex(0.0, -h, hp),
        vertex(hp, 0.0, h),
        vertex(h, hp, 0.0),
        vertex(-h, hp, 0.0),
        vertex(-hp, 0.0, h),
        vertex(0.0, -h, -hp),
        vertex(0.0, h, -hp),
        vertex(hp, 0.0, -h),
        vertex(h, -hp, 0.0),
        vertex(-h, -hp, 0.0),
        vertex(-hp, 0.0, -h),
    ];

    // Fan around vertex 0, fan around vertex 6, then the middle band
    let edges = vec![
        [0, 1],
        [1, 2],
        [2, 0],
        [2, 3],
        [3, 0],
        [3, 4],
        [4, 0],
        [4, 5],
        [5, 0],
        [5, 1],
        [6, 7],
        [7, 8],
        [8, 6],
        [8, 9],
        [9, 6],
        [9, 10],
        [10, 6],
        [10, 11],
        [11, 6],
        [11, 7],
        [1, 9],
        [1, 10],
        [10, 5],
        [5, 11],
        [4, 11],
        [4, 7],
        [7, 3],
        [2, 9],
        [2, 8],
        [3, 8],
    ];
    (vertices, edges)
}

/// Cube corners plus three golden rectangles with sides `s/φ` and `s·φ`
fn dodecahedron(size: f32) -> (Vec<Vertex>, Vec<Edge>) {
    let s = size / 2.0;
    let p = s * PHI;
    let i = s / PHI;
    let vertices = vec![
        vertex(s, s, s),
        vertex(s, s, -s),
        vertex(s, -s, s),
        vertex(s, -s, -s),
        vertex(-s, s, s),
        vertex(-s, s, -s),
        vertex(-s, -s, s),
        vertex(-s, -s, -s),
        vertex(0.0, i, p),
        vertex(0.0, i, -p),
        vertex(0.0, -i, p),
        vertex(0.0, -i, -p),
        vertex(i, p, 0.0),
        vertex(i, -p, 0.0),
        vertex(-i, p, 0.0),
        vertex(-i, -p, 0.0),
        vertex(p, 0.0, i),
        vertex(p, 0.0, -i),
        vertex(-p, 0.0, i),
        vertex(-p, 0.0, -i),
    ];
    let edges = vec![
        [0, 8],
        [8, 10],
        [10, 2],
        [2, 16],
        [16, 0],
        [0, 12],
        [12, 1],
        [1, 17],
        [17, 16],
        [12, 14],
        [14, 4],
        [4, 8],
        [10, 6],
        [6, 18],
        [18, 4],
        [2, 13],
        [13, 15],
        [15, 6],
        [17, 3],
        [3, 13],
        [15, 7],
        [7, 19],
        [19, 18],
        [3, 11],
        [11, 7],
        [14, 5],
        [5, 19],
        [1, 9],
        [9, 11],
        [5, 9],
    ];
    (vertices, edges)
}
