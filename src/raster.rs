use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{DiscParameters, RenderError};

/// Fills a fresh canvas with `background` and draws the centred disc in
/// `foreground`. The disc boundary is inclusive: a pixel whose squared
/// distance from the centre is at most radius^2 belongs to the disc, so the
/// test is exact in integer arithmetic and no pixel ends up anti-aliased.
pub fn rasterise(params: &DiscParameters, background: Rgb<u8>, foreground: Rgb<u8>) -> RgbImage {
    let (cx, cy) = params.center();
    let radius = params.radius() as i64;

    let mut image_buf = RgbImage::new(params.width(), params.height());

    for iy in 0..params.height() {
        for ix in 0..params.width() {
            let dx = ix as i64 - cx as i64;
            let dy = iy as i64 - cy as i64;

            let color = if dx * dx + dy * dy <= radius * radius {
                foreground
            } else {
                background
            };

            image_buf.put_pixel(ix, iy, color);
        }
    }

    image_buf
}

/// Rasterises the disc and writes it to `path`, overwriting any existing
/// file. The encoding is chosen from the file extension.
pub fn write_to_file<P: AsRef<Path>>(
    params: &DiscParameters,
    background: Rgb<u8>,
    foreground: Rgb<u8>,
    path: P,
) -> Result<(), RenderError> {
    let image_buf = rasterise(params, background, foreground);
    image_buf.save(path)?;
    Ok(())
}
