use crate::vertex::Vertex;

/// Cube corners, bottom face first.
pub const VERTICES: [Vertex; 8] = [
    Vertex { position: [-0.9, -0.9, -0.9] },
    Vertex { position: [0.9, -0.9, -0.9] },
    Vertex { position: [0.9, -0.9, 0.9] },
    Vertex { position: [-0.9, -0.9, 0.9] },
    Vertex { position: [-0.9, 0.9, -0.9] },
    Vertex { position: [0.9, 0.9, -0.9] },
    Vertex { position: [0.9, 0.9, 0.9] },
    Vertex { position: [-0.9, 0.9, 0.9] },
];

/// Twelve edges as a line list: bottom face, vertical edges, top face.
pub const INDICES: [u16; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // bottom
    0, 4, 1, 5, 2, 6, 3, 7, // verticals
    4, 5, 5, 6, 6, 7, 7, 4, // top
];
