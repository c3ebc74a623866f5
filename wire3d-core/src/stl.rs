/// STL import as a wireframe mesh
///
/// Triangles are only used for their sides: identical corner positions are
/// welded into one vertex and each side becomes one undirected edge.
use std::collections::{HashMap, HashSet};

use nom::{
    bytes::complete::{tag, take},
    character::complete::{multispace0, multispace1, not_line_ending},
    multi::{count, many0},
    number::complete::{float, le_f32, le_u16, le_u32},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::{GeometryError, Result};
use crate::geometry::{vertex, Edge, Mesh, Vertex};

type Corner = [f32; 3];
type Facet = [Corner; 3];

const HEADER_LEN: usize = 80;
const FACET_LEN: usize = 50;

/// Detect and parse STL data (ASCII or binary)
pub fn parse_stl(data: &[u8]) -> Result<Mesh> {
    if data.starts_with(b"solid") {
        // Binary files may also start with "solid", so fall back on failure
        if let Ok(text) = std::str::from_utf8(data) {
            if let Ok(mesh) = parse_ascii_stl(text) {
                return Ok(mesh);
            }
        }
    }

    parse_binary_stl(data)
}

/// Parse a binary STL file
pub fn parse_binary_stl(data: &[u8]) -> Result<Mesh> {
    if data.len() < HEADER_LEN + 4 {
        return Err(GeometryError::Stl("file too small to be a valid STL".to_string()));
    }

    let (_, facets) = binary_facets(data)
        .map_err(|e| GeometryError::Stl(format!("truncated binary STL: {e:?}")))?;
    wireframe(&facets)
}

/// Parse an ASCII STL file
pub fn parse_ascii_stl(input: &str) -> Result<Mesh> {
    let (_, facets) = ascii_solid(input)
        .map_err(|e| GeometryError::Stl(format!("failed to parse ASCII STL: {e:?}")))?;
    wireframe(&facets)
}

/// Weld corners and collect the distinct triangle sides.
fn wireframe(facets: &[Facet]) -> Result<Mesh> {
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut welded: HashMap<[u32; 3], usize> = HashMap::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for facet in facets {
        let ids = facet.map(|corner| {
            // Adding +0.0 folds -0.0 into +0.0 so both weld together
            let [x, y, z] = corner.map(|c| c + 0.0);
            *welded
                .entry([x.to_bits(), y.to_bits(), z.to_bits()])
                .or_insert_with(|| {
                    vertices.push(vertex(x, y, z));
                    vertices.len() - 1
                })
        });

        for (a, b) in [(ids[0], ids[1]), (ids[1], ids[2]), (ids[2], ids[0])] {
            if a != b && seen.insert((a.min(b), a.max(b))) {
                edges.push([a, b]);
            }
        }
    }

    tracing::debug!(
        facets = facets.len(),
        vertices = vertices.len(),
        edges = edges.len(),
        "imported STL wireframe"
    );
    Mesh::new(vertices, edges)
}

fn binary_facets(data: &[u8]) -> IResult<&[u8], Vec<Facet>> {
    let (input, _) = take(HEADER_LEN)(data)?;
    let (input, facet_count) = le_u32(input)?;
    // Do not trust the count for the allocation size
    let available = input.len() / FACET_LEN;
    let mut facets = Vec::with_capacity((facet_count as usize).min(available));

    let mut input = input;
    for _ in 0..facet_count {
        let (rest, _normal) = binary_corner(input)?;
        let (rest, corners) = count(binary_corner, 3)(rest)?;
        let (rest, _attributes) = le_u16(rest)?;
        facets.push([corners[0], corners[1], corners[2]]);
        input = rest;
    }
    Ok((input, facets))
}

fn binary_corner(input: &[u8]) -> IResult<&[u8], Corner> {
    let (input, (x, y, z)) = tuple((le_f32, le_f32, le_f32))(input)?;
    Ok((input, [x, y, z]))
}

fn ascii_solid(input: &str) -> IResult<&str, Vec<Facet>> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    let (input, _name) = not_line_ending(input)?;
    let (input, facets) = many0(ascii_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;
    let (input, _name) = not_line_ending(input)?;
    Ok((input, facets))
}

fn ascii_facet(input: &str) -> IResult<&str, Facet> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, _normal) = ascii_triple(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v1) = ascii_vertex(input)?;
    let (input, v2) = ascii_vertex(input)?;
    let (input, v3) = ascii_vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;
    Ok((input, [v1, v2, v3]))
}

fn ascii_vertex(input: &str) -> IResult<&str, Corner> {
    preceded(preceded(multispace0, tag("vertex")), ascii_triple)(input)
}

fn ascii_triple(input: &str) -> IResult<&str, Corner> {
    let (input, x) = preceded(multispace1, float)(input)?;
    let (input, y) = preceded(multispace1, float)(input)?;
    let (input, z) = preceded(multispace1, float)(input)?;
    Ok((input, [x, y, z]))
}
