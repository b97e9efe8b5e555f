use anyhow::Result;
use circle_raster::{raster, DiscParameters};
use image::Rgb;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 1024;
const SIZE_FRACTION: f64 = 0.80;
const OUTPUT_PATH: &str = "circle.png";

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);
const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

fn main() -> Result<()> {
    let params = DiscParameters::new(WIDTH, HEIGHT, SIZE_FRACTION)?;
    raster::write_to_file(&params, BACKGROUND, FOREGROUND, OUTPUT_PATH)?;

    println!(
        "created {} ({}x{})",
        OUTPUT_PATH,
        params.width(),
        params.height()
    );
    println!("circle radius: {}px", params.radius());
    println!("border: ~{}px", params.border_thickness());

    Ok(())
}
