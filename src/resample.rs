use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, Rgba32FImage};

const FILTER: FilterType = FilterType::Lanczos3;

/// Resize to exactly `width`x`height`, keeping the source's colour type.
///
/// Sources with an alpha channel are resampled premultiplied so colour hidden
/// under fully transparent pixels never bleeds into visible edges.
pub fn resize_exact(source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let resized = if source.color().has_alpha() {
        resize_premultiplied(source, width, height)
    } else {
        source.resize_exact(width, height, FILTER)
    };
    into_png_color(resized, source.color())
}

fn resize_premultiplied(source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let mut buf: Rgba32FImage = source.to_rgba32f();
    for p in buf.pixels_mut() {
        let a = p.0[3];
        for c in &mut p.0[..3] {
            *c *= a;
        }
    }

    let mut out = imageops::resize(&buf, width, height, FILTER);
    for p in out.pixels_mut() {
        let a = p.0[3];
        if a <= 0.0 {
            p.0 = [0.0; 4];
            continue;
        }
        for c in &mut p.0[..3] {
            *c = (*c / a).clamp(0.0, 1.0);
        }
    }

    DynamicImage::ImageRgba32F(out)
}

// PNG has no float samples; those come back as 8-bit.
fn into_png_color(img: DynamicImage, source: ColorType) -> DynamicImage {
    let target = match source {
        ColorType::Rgb32F => ColorType::Rgb8,
        ColorType::Rgba32F => ColorType::Rgba8,
        other => other,
    };
    if img.color() == target {
        return img;
    }

    match target {
        ColorType::L8 => DynamicImage::ImageLuma8(img.to_luma8()),
        ColorType::La8 => DynamicImage::ImageLumaA8(img.to_luma_alpha8()),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(img.to_rgb8()),
        ColorType::L16 => DynamicImage::ImageLuma16(img.to_luma16()),
        ColorType::La16 => DynamicImage::ImageLumaA16(img.to_luma_alpha16()),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(img.to_rgb16()),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(img.to_rgba16()),
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn opaque_sources_keep_their_colour_type() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([10, 20, 30])));
        let out = resize_exact(&rgb, 7, 9);
        assert_eq!(out.color(), ColorType::Rgb8);
        assert_eq!((out.width(), out.height()), (7, 9));
    }

    #[test]
    fn alpha_sources_keep_their_colour_type() {
        let la = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(32, 32, LumaA([128, 200])));
        assert_eq!(resize_exact(&la, 8, 8).color(), ColorType::La8);

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(32, 32, Rgba([1, 2, 3, 4])));
        assert_eq!(resize_exact(&rgba, 8, 8).color(), ColorType::Rgba8);
    }

    #[test]
    fn float_sources_come_back_as_eight_bit() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([9, 9, 9, 255])));
        let float = DynamicImage::ImageRgba32F(img.to_rgba32f());
        assert_eq!(resize_exact(&float, 4, 4).color(), ColorType::Rgba8);
    }

    #[test]
    fn hidden_colour_under_transparency_does_not_bleed() {
        let src = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([0, 0, 255, 255])
            } else {
                Rgba([255, 0, 0, 0])
            }
        });
        let out = resize_exact(&DynamicImage::ImageRgba8(src), 9, 9).to_rgba8();

        let mut saw_partial_alpha = false;
        for p in out.pixels() {
            let [r, g, b, a] = p.0;
            assert_eq!((r, g), (0, 0), "pixel {:?} picked up hidden colour", p.0);
            if a > 0 {
                assert!(b >= 254, "pixel {:?} lost its colour", p.0);
            }
            saw_partial_alpha |= a > 0 && a < 255;
        }
        assert!(saw_partial_alpha);
    }

    #[test]
    fn fully_transparent_output_is_cleared() {
        let src = RgbaImage::from_pixel(16, 16, Rgba([255, 0, 0, 0]));
        let out = resize_exact(&DynamicImage::ImageRgba8(src), 4, 4).to_rgba8();
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
