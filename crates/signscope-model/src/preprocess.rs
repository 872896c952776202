//! Image normalization into the model's fixed input tensor.
//!
//! Any JPEG/PNG upload is decoded, resized to 32x32 with deterministic
//! bilinear resampling, scaled from [0, 255] to [0.0, 1.0], and given a
//! leading batch dimension, yielding shape (1, 32, 32, channels). Grayscale
//! sources stay single-channel; everything else is reduced to RGB.

use candle_core::{Device, Tensor};
use image::{imageops::FilterType, DynamicImage};
use signscope_core::{Error, Result};

/// Spatial resolution the model expects
pub const INPUT_SIZE: usize = 32;

/// Decode raw upload bytes and normalize them into the input tensor
pub fn preprocess(bytes: &[u8]) -> Result<Tensor> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| Error::image(format!("failed to decode image: {e}")))?;
    preprocess_image(&img)
}

/// Normalize an already-decoded image into the input tensor
pub fn preprocess_image(img: &DynamicImage) -> Result<Tensor> {
    let side = INPUT_SIZE as u32;
    let resized = img.resize_exact(side, side, FilterType::Triangle);

    let (data, channels) = match img.color().channel_count() {
        1 | 2 => {
            let gray = resized.to_luma8();
            let data: Vec<f32> = gray.into_raw().iter().map(|&v| v as f32 / 255.0).collect();
            (data, 1)
        }
        _ => {
            let rgb = resized.to_rgb8();
            let data: Vec<f32> = rgb.into_raw().iter().map(|&v| v as f32 / 255.0).collect();
            (data, 3)
        }
    };

    Tensor::from_vec(data, (1, INPUT_SIZE, INPUT_SIZE, channels), &Device::Cpu)
        .map_err(|e| Error::image(format!("failed to build input tensor: {e}")))
}
