use thiserror::Error;

pub mod raster;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("size fraction must be in (0.0, 1.0], got {0}")]
    SizeFractionOutOfRange(f64),
    #[error("disc radius {radius}px does not fit a {width}x{height} canvas")]
    DiscOutsideCanvas { radius: u32, width: u32, height: u32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Canvas size and disc proportion for a single render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscParameters {
    width: u32,
    height: u32,
    size_fraction: f64,
}

impl DiscParameters {
    /// Validates the inputs. The size fraction is the ratio of the disc
    /// diameter to the canvas width and must be in (0.0, 1.0]; the derived
    /// radius must fit inside the canvas.
    pub fn new(width: u32, height: u32, size_fraction: f64) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyCanvas { width, height });
        }
        if !(size_fraction > 0.0 && size_fraction <= 1.0) {
            return Err(RenderError::SizeFractionOutOfRange(size_fraction));
        }
        let params = Self {
            width,
            height,
            size_fraction,
        };
        let radius = params.radius();
        if radius > width.min(height) / 2 {
            return Err(RenderError::DiscOutsideCanvas {
                radius,
                width,
                height,
            });
        }
        Ok(params)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size_fraction(&self) -> f64 {
        self.size_fraction
    }

    /// Canvas centre in pixel coordinates.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Disc radius in pixels: floor(width * size_fraction / 2).
    pub fn radius(&self) -> u32 {
        (self.width as f64 * self.size_fraction / 2.0).floor() as u32
    }

    /// Width of the background margin between the disc and the nearest
    /// horizontal canvas edge.
    pub fn border_thickness(&self) -> u32 {
        (self.width - self.radius() * 2) / 2
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_geometry_for_default_canvas() {
        let params = DiscParameters::new(1024, 1024, 0.80).unwrap();
        assert_eq!(params.center(), (512, 512));
        assert_eq!(params.radius(), 409);
        assert_eq!(params.border_thickness(), 103);
    }

    #[test]
    fn test_radius_rounds_down() {
        // 1024 * 0.80 / 2 = 409.6
        assert_eq!(DiscParameters::new(1024, 1024, 0.80).unwrap().radius(), 409);
        assert_eq!(DiscParameters::new(100, 100, 0.5).unwrap().radius(), 25);
        assert_eq!(DiscParameters::new(7, 7, 1.0).unwrap().radius(), 3);
    }

    #[test]
    fn test_full_fraction_stays_inside_canvas() {
        let params = DiscParameters::new(1024, 1024, 1.0).unwrap();
        assert_eq!(params.radius(), 512);
        assert_eq!(params.border_thickness(), 0);
    }

    #[test]
    fn test_rejects_empty_canvas() {
        assert!(matches!(
            DiscParameters::new(0, 1024, 0.80),
            Err(RenderError::EmptyCanvas { .. })
        ));
        assert!(matches!(
            DiscParameters::new(1024, 0, 0.80),
            Err(RenderError::EmptyCanvas { .. })
        ));
    }

    #[test]
    fn test_rejects_size_fraction_out_of_range() {
        for fraction in [0.0, -0.5, 1.2, f64::NAN] {
            assert!(matches!(
                DiscParameters::new(1024, 1024, fraction),
                Err(RenderError::SizeFractionOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_rejects_disc_wider_than_canvas_is_tall() {
        // radius would be 460, but only 50px of vertical headroom exists
        assert!(matches!(
            DiscParameters::new(1024, 100, 0.9),
            Err(RenderError::DiscOutsideCanvas { radius: 460, .. })
        ));
    }
}
