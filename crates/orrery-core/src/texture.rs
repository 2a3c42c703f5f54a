//! Procedural surface textures.
//!
//! Planet surfaces are a diagonal gradient of three HSL stops sharing the
//! body's base hue, overlaid with soft white blotches for surface variation.
//! The sun is a radial yellow-to-red gradient. Output is tightly packed
//! RGBA8, ready for a texture upload.

use rand::prelude::*;

use crate::bodies::BodyConfig;
use crate::constants::{BLOTCH_COUNT, TEXTURE_HEIGHT, TEXTURE_WIDTH};

pub struct TexturePixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl TexturePixels {
    #[inline]
    pub fn byte_len(&self) -> usize {
        (self.width * self.height * 4) as usize
    }
}

/// Hue of an RGB color, in [0, 1).
pub fn rgb_hue(rgb: [f32; 3]) -> f32 {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }
    let d = max - min;
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

fn hue_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL to RGB, all components in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

#[inline]
fn lerp3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

fn quantize(rgb: &[[f32; 3]], width: u32, height: u32) -> TexturePixels {
    let mut data = Vec::with_capacity(rgb.len() * 4);
    for px in rgb {
        data.push((px[0].clamp(0.0, 1.0) * 255.0) as u8);
        data.push((px[1].clamp(0.0, 1.0) * 255.0) as u8);
        data.push((px[2].clamp(0.0, 1.0) * 255.0) as u8);
        data.push(255);
    }
    TexturePixels {
        width,
        height,
        data,
    }
}

/// Banded gradient surface for one planet. Seeded per body, so the same seed
/// reproduces the same surface.
pub fn planet_pixels(config: &BodyConfig, seed: u64) -> TexturePixels {
    let (w, h) = (TEXTURE_WIDTH, TEXTURE_HEIGHT);
    let hue = rgb_hue(config.color_rgb());
    let stops = [
        hsl_to_rgb(hue, 0.70, 0.30),
        hsl_to_rgb(hue, 0.80, 0.50),
        hsl_to_rgb(hue, 0.60, 0.20),
    ];

    // Gradient runs along the image diagonal.
    let axis_sq = (w * w + h * h) as f32;
    let mut rgb = vec![[0.0f32; 3]; (w * h) as usize];
    for y in 0..h {
        for x in 0..w {
            let t = (x * w + y * h) as f32 / axis_sq;
            let px = if t < 0.5 {
                lerp3(stops[0], stops[1], t * 2.0)
            } else {
                lerp3(stops[1], stops[2], (t - 0.5) * 2.0)
            };
            rgb[(y * w + x) as usize] = px;
        }
    }

    // Soft white blotches, blended with an overlay-style operator.
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..BLOTCH_COUNT {
        let cx = rng.gen::<f32>() * w as f32;
        let cy = rng.gen::<f32>() * h as f32;
        let radius = rng.gen::<f32>() * 20.0 + 5.0;
        let alpha = rng.gen::<f32>() * 0.3 + 0.1;

        let x0 = (cx - radius).floor().max(0.0) as u32;
        let x1 = ((cx + radius).ceil() as u32).min(w - 1);
        let y0 = (cy - radius).floor().max(0.0) as u32;
        let y1 = ((cy + radius).ceil() as u32).min(h - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let d_sq = dx * dx + dy * dy;
                if d_sq >= radius * radius {
                    continue;
                }
                let cover = alpha * (1.0 - d_sq / (radius * radius));
                let px = &mut rgb[(y * w + x) as usize];
                for c in px.iter_mut() {
                    // overlay against a white blend layer
                    let ov = if *c < 0.5 { 2.0 * *c } else { 1.0 };
                    *c += (ov - *c) * cover;
                }
            }
        }
    }

    quantize(&rgb, w, h)
}

/// Radial yellow-orange-red gradient for the sun.
pub fn sun_pixels() -> TexturePixels {
    let (w, h) = (TEXTURE_WIDTH, TEXTURE_HEIGHT);
    let stops: [(f32, [f32; 3]); 4] = [
        (0.0, [1.0, 1.0, 0.0]),
        (0.3, [1.0, 0.667, 0.0]),
        (0.6, [1.0, 0.4, 0.0]),
        (1.0, [1.0, 0.0, 0.0]),
    ];
    let (cx, cy) = (w as f32 / 2.0, h as f32 / 2.0);
    let radius = w as f32 / 2.0;

    let mut rgb = vec![[0.0f32; 3]; (w * h) as usize];
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
            let mut px = stops[stops.len() - 1].1;
            for pair in stops.windows(2) {
                let (t0, c0) = pair[0];
                let (t1, c1) = pair[1];
                if t <= t1 {
                    px = lerp3(c0, c1, (t - t0) / (t1 - t0));
                    break;
                }
            }
            rgb[(y * w + x) as usize] = px;
        }
    }
    quantize(&rgb, w, h)
}

/// Single opaque white pixel; bound where a pipeline expects a texture but a
/// mesh is flat-colored.
pub fn white_pixel() -> TexturePixels {
    TexturePixels {
        width: 1,
        height: 1,
        data: vec![255, 255, 255, 255],
    }
}

/// Per-body texture seed derived from a base seed, so bodies can be
/// regenerated independently.
#[inline]
pub fn body_seed(base: u64, index: usize) -> u64 {
    base ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
