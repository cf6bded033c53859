/// Geometry primitives for wireframe rendering
use nalgebra::Point3;
use thiserror::Error;

/// Construction failure for malformed geometry.
///
/// These are the only fatal conditions in the pipeline; everything that
/// can go wrong at render time is recovered per-frame instead.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("cube side length must be positive, got {0}")]
    NonPositiveSideLength(f64),
    #[error("edge {edge} references vertex {index}, but polygon has {vertex_count} vertices")]
    EdgeOutOfBounds {
        edge: usize,
        index: usize,
        vertex_count: usize,
    },
}

/// An ordered set of 3D vertices plus the edges drawn between them.
///
/// Vertices are stored verbatim with no geometric validation. Edges are
/// explicit vertex-index pairs; the renderer only ever connects vertices
/// within one polygon, never across polygons.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point3<f64>>,
    edges: Vec<[usize; 2]>,
}

impl Polygon {
    /// Create a polygon from vertices and an explicit edge list.
    ///
    /// Every edge index must refer to an existing vertex.
    pub fn new(vertices: Vec<Point3<f64>>, edges: Vec<[usize; 2]>) -> Result<Self, GeometryError> {
        for (edge, pair) in edges.iter().enumerate() {
            for &index in pair {
                if index >= vertices.len() {
                    return Err(GeometryError::EdgeOutOfBounds {
                        edge,
                        index,
                        vertex_count: vertices.len(),
                    });
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }
}

/// The 12 edges of a cube whose vertices are enumerated with the z offset
/// innermost, then y, then x. Each pair differs in exactly one axis offset.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    // z-axis edges
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    // y-axis edges
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    // x-axis edges
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// An axis-aligned cube: a `Polygon` of 8 corners plus the anchor and side
/// length it was built from. Composition rather than a subtype, so the
/// renderer only ever sees plain polygons.
#[derive(Debug, Clone)]
pub struct Cube {
    polygon: Polygon,
    anchor: Point3<f64>,
    side_length: f64,
}

impl Cube {
    /// Build a cube from its anchor corner and a positive side length.
    ///
    /// The 8 vertices are enumerated in a fixed order (z offset innermost,
    /// then y, then x) that `CUBE_EDGES` depends on.
    pub fn new(anchor: Point3<f64>, side_length: f64) -> Result<Self, GeometryError> {
        if !(side_length > 0.0) {
            return Err(GeometryError::NonPositiveSideLength(side_length));
        }

        let mut vertices = Vec::with_capacity(8);
        for bx in 0..2 {
            for by in 0..2 {
                for bz in 0..2 {
                    vertices.push(Point3::new(
                        anchor.x + bx as f64 * side_length,
                        anchor.y + by as f64 * side_length,
                        anchor.z + bz as f64 * side_length,
                    ));
                }
            }
        }

        let polygon = Polygon::new(vertices, CUBE_EDGES.to_vec())?;
        Ok(Self {
            polygon,
            anchor,
            side_length,
        })
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Consume the cube, keeping only its polygon.
    pub fn into_polygon(self) -> Polygon {
        self.polygon
    }

    pub fn anchor(&self) -> Point3<f64> {
        self.anchor
    }

    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}
