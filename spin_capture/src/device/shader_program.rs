/// ShaderProgram trait - activate a program and upload named uniforms

use glam::Mat4;

/// Shader program capability
///
/// Uniform setters never fail: a name that does not resolve to an active
/// uniform is reported as a `UniformNotFound` warning through the logger and
/// the upload is skipped.
pub trait ShaderProgram {
    /// Make this program current
    fn use_program(&self);

    /// Upload a 4x4 matrix (column-major)
    fn set_mat4(&self, name: &str, value: &Mat4);

    /// Upload an integer (also used for sampler units)
    fn set_int(&self, name: &str, value: i32);

    /// Upload a float
    fn set_float(&self, name: &str, value: f32);

    /// Upload a boolean as an integer uniform
    fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }
}
