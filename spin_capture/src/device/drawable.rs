/// Drawable trait - anything that can issue draw calls

use crate::device::ShaderProgram;

/// Drawable capability
///
/// Called with the scene shader already active. Implementations issue their
/// draw calls using that shader's uniforms; drawing has no return value.
pub trait Drawable {
    /// Issue the draw calls for this object
    fn draw(&self, shader: &dyn ShaderProgram);
}

impl<D: Drawable + ?Sized> Drawable for &D {
    fn draw(&self, shader: &dyn ShaderProgram) {
        (**self).draw(shader);
    }
}

impl<D: Drawable> Drawable for [D] {
    fn draw(&self, shader: &dyn ShaderProgram) {
        for drawable in self {
            drawable.draw(shader);
        }
    }
}

impl<D: Drawable> Drawable for Vec<D> {
    fn draw(&self, shader: &dyn ShaderProgram) {
        self.as_slice().draw(shader);
    }
}
