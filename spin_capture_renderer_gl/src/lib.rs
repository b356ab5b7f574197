/*!
# Spin Capture - OpenGL Backend

OpenGL implementation of the spin_capture capability traits, built on `glow`.

The caller owns the window/context creation and hands a current
`glow::Context` to [`GlDevice`]. Everything created from the device shares
that context through an `Rc`, so GL objects stay on the context thread.

```no_run
use spin_capture::spin::{CaptureConfig, CaptureSequencer};
use spin_capture_renderer_gl::{GlDevice, GlMesh};

# fn run(context: glow::Context) -> spin_capture::spin::Result<()> {
let mut device = GlDevice::new(context);
let shader = device.create_shader_from_files("shaders/model.vert", "shaders/model.frag")?;
let mesh = GlMesh::cube(device.gl().clone())?;

let mut sequencer = CaptureSequencer::new(&mut device, CaptureConfig::default())?;
sequencer.render_spin(&shader, &mesh, 36, "renders/spin.png")?;
# Ok(())
# }
```
*/

mod gl_device;
mod gl_format;
mod gl_mesh;
mod gl_render_surface;
mod gl_shader_program;

pub use gl_device::GlDevice;
pub use gl_mesh::{cube_geometry, vertex_layout, GlMesh, VertexAttribute};
pub use gl_render_surface::GlRenderSurface;
pub use gl_shader_program::GlShaderProgram;
