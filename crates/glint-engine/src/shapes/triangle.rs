use crate::device::{Drawable, DeviceError, Geometry, GraphicsDevice};

use super::{finish, flat_color_pipeline};

/// Builds a validated flat-color triangle centered in clip space.
pub fn triangle<D: GraphicsDevice>(device: &D) -> Result<Drawable<D>, DeviceError> {
    let geometry = Geometry::new(
        device,
        vec![
            -0.5, -0.5, 0.0, //
            0.5, -0.5, 0.0, //
            0.0, 0.5, 0.0,
        ],
    )?;
    let pipeline = flat_color_pipeline(device)?;
    finish(device, geometry, pipeline)
}
