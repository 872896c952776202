//! Candle-based predictor for the pretrained traffic-sign CNN.
//!
//! The network shape is fixed by the trained artifact: two conv/pool blocks
//! over a 32x32 RGB input, two dense layers, 43-way softmax output.

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{conv2d, linear, Conv2d, Conv2dConfig, Linear, Module, VarBuilder};
use signscope_core::{Error, Result, NUM_CLASSES};
use std::path::Path;

use crate::preprocess::INPUT_SIZE;

/// Number of color channels the trained model expects
pub const INPUT_CHANNELS: usize = 3;

// 32x32 -> conv5 -> 28x28 -> pool -> 14x14 -> conv3 -> 12x12 -> pool -> 6x6
const FLATTENED: usize = 64 * 6 * 6;
const HIDDEN: usize = 256;

#[derive(Debug)]
struct SignNet {
    conv1: Conv2d,
    conv2: Conv2d,
    fc1: Linear,
    fc2: Linear,
}

impl SignNet {
    fn new(vb: VarBuilder) -> candle_core::Result<Self> {
        let cfg = Conv2dConfig::default();
        let conv1 = conv2d(INPUT_CHANNELS, 32, 5, cfg, vb.pp("conv1"))?;
        let conv2 = conv2d(32, 64, 3, cfg, vb.pp("conv2"))?;
        let fc1 = linear(FLATTENED, HIDDEN, vb.pp("fc1"))?;
        let fc2 = linear(HIDDEN, NUM_CLASSES, vb.pp("fc2"))?;
        Ok(Self {
            conv1,
            conv2,
            fc1,
            fc2,
        })
    }

    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        let xs = xs.apply(&self.conv1)?.relu()?.max_pool2d(2)?;
        let xs = xs.apply(&self.conv2)?.relu()?.max_pool2d(2)?;
        let xs = xs.flatten_from(1)?;
        let xs = xs.apply(&self.fc1)?.relu()?;
        xs.apply(&self.fc2)
    }
}

/// In-memory predictor mapping a (1, 32, 32, 3) tensor to 43 class scores.
///
/// Constructed once per process by [`crate::loader::ModelHandle`] and reused
/// for every request; never mutated after construction.
#[derive(Debug)]
pub struct SignPredictor {
    net: SignNet,
}

impl SignPredictor {
    /// Deserialize the predictor from a SafeTensors artifact on disk
    pub fn load(path: &Path) -> Result<Self> {
        let device = Device::Cpu;
        let tensors = candle_core::safetensors::load(path, &device).map_err(|e| {
            Error::invalid_artifact(format!("failed to read {}: {e}", path.display()))
        })?;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &device);
        Self::from_var_builder(vb)
    }

    /// Build the predictor from already-loaded weights
    pub fn from_var_builder(vb: VarBuilder) -> Result<Self> {
        let net = SignNet::new(vb)
            .map_err(|e| Error::invalid_artifact(format!("missing or misshapen weights: {e}")))?;
        Ok(Self { net })
    }

    /// Run the forward pass on a (1, 32, 32, 3) NHWC tensor.
    ///
    /// Returns the 43-entry softmax probability vector, indexed by the class
    /// label table.
    pub fn predict(&self, input: &Tensor) -> Result<Vec<f32>> {
        let dims = input.dims();
        if dims.len() != 4 || dims[0] != 1 || dims[1] != INPUT_SIZE || dims[2] != INPUT_SIZE {
            return Err(Error::inference(format!(
                "expected input of shape (1, {INPUT_SIZE}, {INPUT_SIZE}, channels), got {dims:?}"
            )));
        }
        if dims[3] != INPUT_CHANNELS {
            return Err(Error::inference(format!(
                "model expects {INPUT_CHANNELS}-channel input, got {} channel(s)",
                dims[3]
            )));
        }

        let nchw = input
            .permute((0, 3, 1, 2))
            .map_err(|e| Error::inference(format!("failed to reorder input tensor: {e}")))?;
        let logits = self
            .net
            .forward(&nchw)
            .map_err(|e| Error::inference(format!("forward pass failed: {e}")))?;
        let probs = candle_nn::ops::softmax(&logits, D::Minus1)
            .map_err(|e| Error::inference(format!("softmax failed: {e}")))?;
        let probs = probs
            .squeeze(0)
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(|e| Error::inference(format!("failed to extract scores: {e}")))?;
        Ok(probs)
    }
}
