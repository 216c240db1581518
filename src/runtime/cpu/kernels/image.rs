//! Image resampling and intensity-mapping kernels

/// Number of intensity levels in an 8-bit histogram
pub const HISTOGRAM_LEVELS: usize = 256;

/// Nearest-neighbor rotation about the image center.
///
/// Each destination pixel `(x, y)` is mapped to its source through a rotation
/// by `-angle_radians` around `((width-1)/2, (height-1)/2)`:
///
/// ```text
/// sx =  cos(θ) * dx + sin(θ) * dy + cx
/// sy = -sin(θ) * dx + cos(θ) * dy + cy
/// ```
///
/// The rounded source coordinate is read if it lies inside the image,
/// otherwise the destination pixel is 0.
pub fn rotate_nearest_kernel(
    image: &[f64],
    height: usize,
    width: usize,
    angle_radians: f64,
) -> Vec<f64> {
    debug_assert_eq!(image.len(), height * width);

    let (sin, cos) = angle_radians.sin_cos();
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;

    let mut out = vec![0.0; height * width];
    for y in 0..height {
        let dy = y as f64 - cy;
        for x in 0..width {
            let dx = x as f64 - cx;
            let sx = (cos * dx + sin * dy + cx).round();
            let sy = (-sin * dx + cos * dy + cy).round();

            if sx >= 0.0 && sy >= 0.0 && sx < width as f64 && sy < height as f64 {
                out[y * width + x] = image[sy as usize * width + sx as usize];
            }
        }
    }
    out
}

/// Round and clamp a pixel into `[0, 255]`; NaN maps to 0
#[inline]
pub fn quantize_level(value: f64) -> usize {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, (HISTOGRAM_LEVELS - 1) as f64) as usize
}

/// Histogram equalization of 8-bit intensities.
///
/// ```text
/// level[p]  = clamp(round(p), 0, 255)
/// cdf[v]    = #{p : level[p] <= v}
/// cdf_min   = smallest nonzero cdf value
/// lut[v]    = round((cdf[v] - cdf_min) * 255 / (total - cdf_min))
/// ```
///
/// When `total == cdf_min` (a single level is present) the quantized pixels
/// are returned unchanged.
pub fn histogram_equalize_kernel(pixels: &[f64]) -> Vec<f64> {
    let levels: Vec<usize> = pixels.iter().map(|&p| quantize_level(p)).collect();
    let total = levels.len();

    let mut histogram = [0usize; HISTOGRAM_LEVELS];
    for &level in &levels {
        histogram[level] += 1;
    }

    let mut cdf = [0usize; HISTOGRAM_LEVELS];
    let mut running = 0;
    for (c, &h) in cdf.iter_mut().zip(histogram.iter()) {
        running += h;
        *c = running;
    }

    let cdf_min = match cdf.iter().copied().find(|&c| c > 0) {
        Some(c) => c,
        None => return Vec::new(),
    };

    if total == cdf_min {
        return levels.into_iter().map(|l| l as f64).collect();
    }

    let scale = (HISTOGRAM_LEVELS - 1) as f64 / (total - cdf_min) as f64;
    let mut lut = [0.0f64; HISTOGRAM_LEVELS];
    for (entry, &c) in lut.iter_mut().zip(cdf.iter()) {
        // Levels below the first occupied bin are never looked up
        *entry = (c.saturating_sub(cdf_min) as f64 * scale).round();
    }

    levels.into_iter().map(|l| lut[l]).collect()
}
