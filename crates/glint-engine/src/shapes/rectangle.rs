use crate::device::{Drawable, DeviceError, Geometry, GraphicsDevice};

use super::{finish, flat_color_pipeline};

/// Builds a validated flat-color rectangle: four corners, two triangles
/// sharing the diagonal edge.
pub fn rectangle<D: GraphicsDevice>(device: &D) -> Result<Drawable<D>, DeviceError> {
    let geometry = Geometry::with_indices(
        device,
        vec![
            0.5, 0.5, 0.0, //
            0.5, -0.5, 0.0, //
            -0.5, -0.5, 0.0, //
            -0.5, 0.5, 0.0,
        ],
        vec![
            0, 1, 3, //
            1, 2, 3,
        ],
    )?;
    let pipeline = flat_color_pipeline(device)?;
    finish(device, geometry, pipeline)
}
