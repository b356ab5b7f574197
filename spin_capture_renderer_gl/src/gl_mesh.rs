/// GlMesh - indexed triangle mesh implementing Drawable
///
/// Vertices are interleaved `f32` attributes uploaded once into a VAO with
/// one vertex buffer and one `u32` index buffer.

use std::rc::Rc;

use glam::Vec3;
use glow::HasContext;
use spin_capture::spin::device::{Drawable, ShaderProgram};
use spin_capture::spin::{Error, Result};
use spin_capture::spin_bail;

const SOURCE: &str = "spin::gl::Mesh";

const FLOAT_SIZE: i32 = std::mem::size_of::<f32>() as i32;

/// One interleaved vertex attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader attribute location (`layout(location = N)`)
    pub location: u32,
    /// Float components (1..=4)
    pub components: i32,
}

impl VertexAttribute {
    pub const fn new(location: u32, components: i32) -> Self {
        Self { location, components }
    }
}

/// Stride in bytes and per-attribute byte offsets of an interleaved layout
pub fn vertex_layout(attributes: &[VertexAttribute]) -> (i32, Vec<i32>) {
    let mut offsets = Vec::with_capacity(attributes.len());
    let mut stride = 0;
    for attribute in attributes {
        offsets.push(stride);
        stride += attribute.components * FLOAT_SIZE;
    }
    (stride, offsets)
}

/// Unit cube centered on the origin: position (location 0) and normal (location 1)
///
/// 24 vertices (4 per face, so every face has flat normals) and 36 indices,
/// counter-clockwise when seen from outside.
pub fn cube_geometry() -> (Vec<f32>, Vec<u32>) {
    let faces = [Vec3::X, -Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, -Vec3::Z];
    let mut vertices: Vec<f32> = Vec::with_capacity(24 * 6);
    let mut indices: Vec<u32> = Vec::with_capacity(36);

    for normal in faces {
        // Two axes spanning the face, ordered so u x v points along the normal
        let up = if normal.y.abs() > 0.5 { Vec3::Z } else { Vec3::Y };
        let u = up.cross(normal);
        let v = normal.cross(u);
        let base = (vertices.len() / 6) as u32;

        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let position = (normal + u * su + v * sv) * 0.5;
            vertices.extend_from_slice(&position.to_array());
            vertices.extend_from_slice(&normal.to_array());
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// Check that `vertices` splits into whole vertices and every index is in range
///
/// Returns the vertex count.
fn validate(vertices: &[f32], indices: &[u32], attributes: &[VertexAttribute]) -> Result<usize> {
    let floats_per_vertex: usize = attributes.iter().map(|a| a.components.max(0) as usize).sum();
    if floats_per_vertex == 0 {
        spin_bail!(SOURCE, Error::BackendError, "Vertex layout has no components");
    }
    if let Some(bad) = attributes.iter().find(|a| !(1..=4).contains(&a.components)) {
        spin_bail!(
            SOURCE,
            Error::BackendError,
            "Attribute {} has {} components (expected 1..=4)",
            bad.location,
            bad.components
        );
    }
    if vertices.len() % floats_per_vertex != 0 {
        spin_bail!(
            SOURCE,
            Error::BackendError,
            "{} floats do not split into vertices of {}",
            vertices.len(),
            floats_per_vertex
        );
    }

    let vertex_count = vertices.len() / floats_per_vertex;
    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        spin_bail!(
            SOURCE,
            Error::BackendError,
            "Index {} out of range for {} vertices",
            index,
            vertex_count
        );
    }
    Ok(vertex_count)
}

/// Indexed triangle mesh on the GPU
pub struct GlMesh {
    gl: Rc<glow::Context>,
    vertex_array: glow::NativeVertexArray,
    vertex_buffer: glow::NativeBuffer,
    index_buffer: glow::NativeBuffer,
    index_count: i32,
}

impl GlMesh {
    /// Upload an interleaved vertex buffer and its triangle indices
    ///
    /// # Errors
    ///
    /// `Error::BackendError` for a malformed layout, out-of-range indices
    /// or a GL object that cannot be created.
    pub fn new(
        gl: Rc<glow::Context>,
        vertices: &[f32],
        indices: &[u32],
        attributes: &[VertexAttribute],
    ) -> Result<Self> {
        let vertex_count = validate(vertices, indices, attributes)?;
        let (stride, offsets) = vertex_layout(attributes);

        let mesh = unsafe {
            let created = (
                gl.create_vertex_array(),
                gl.create_buffer(),
                gl.create_buffer(),
            );
            match created {
                (Ok(vertex_array), Ok(vertex_buffer), Ok(index_buffer)) => Self {
                    gl: gl.clone(),
                    vertex_array,
                    vertex_buffer,
                    index_buffer,
                    index_count: indices.len() as i32,
                },
                (vertex_array, vertex_buffer, index_buffer) => {
                    if let Ok(vertex_array) = vertex_array {
                        gl.delete_vertex_array(vertex_array);
                    }
                    for buffer in [vertex_buffer, index_buffer].into_iter().flatten() {
                        gl.delete_buffer(buffer);
                    }
                    spin_bail!(SOURCE, Error::BackendError, "Failed to create mesh buffers");
                }
            }
        };

        unsafe {
            gl.bind_vertex_array(Some(mesh.vertex_array));

            gl.bind_buffer(glow::ARRAY_BUFFER, Some(mesh.vertex_buffer));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(mesh.index_buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );

            for (attribute, offset) in attributes.iter().zip(offsets) {
                gl.enable_vertex_attrib_array(attribute.location);
                gl.vertex_attrib_pointer_f32(
                    attribute.location,
                    attribute.components,
                    glow::FLOAT,
                    false,
                    stride,
                    offset,
                );
            }

            // Element buffer binding is VAO state, unbind the VAO first
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }

        spin_capture::spin_debug!(
            SOURCE,
            "Uploaded mesh: {} vertices, {} triangles",
            vertex_count,
            indices.len() / 3
        );
        Ok(mesh)
    }

    /// Unit cube from [`cube_geometry`]
    pub fn cube(gl: Rc<glow::Context>) -> Result<Self> {
        let (vertices, indices) = cube_geometry();
        Self::new(
            gl,
            &vertices,
            &indices,
            &[VertexAttribute::new(0, 3), VertexAttribute::new(1, 3)],
        )
    }

    pub fn index_count(&self) -> i32 {
        self.index_count
    }
}

impl Drawable for GlMesh {
    fn draw(&self, _shader: &dyn ShaderProgram) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vertex_array));
            self.gl
                .draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);
            self.gl.bind_vertex_array(None);
        }
    }
}

impl Drop for GlMesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vertex_array);
            self.gl.delete_buffer(self.vertex_buffer);
            self.gl.delete_buffer(self.index_buffer);
        }
    }
}

#[cfg(test)]
#[path = "gl_mesh_tests.rs"]
mod tests;
