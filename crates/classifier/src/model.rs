//! Model seam and device selection

use candle_core::Device;

use crate::ClassifierError;

/// A raw (label, score) pair exactly as the checkpoint vocabulary emits
/// it, before normalization into the fixed 3-class schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub label: String,
    pub score: f64,
}

/// Opaque classification seam.
///
/// `predict` is the base inference call (top class only); its failure is
/// fatal to the request. `predict_scores` is the per-class pass; its
/// failure is recovered by the analyzer's fixed-split fallback.
pub trait SentimentModel: Send + Sync {
    fn predict(&self, text: &str) -> Result<RawPrediction, ClassifierError>;

    fn predict_scores(&self, text: &str) -> Result<Vec<RawPrediction>, ClassifierError>;
}

/// Prefer an available accelerator, fall back to CPU.
pub fn select_device() -> Device {
    match Device::cuda_if_available(0) {
        Ok(device) => {
            if device.is_cuda() {
                tracing::info!("running inference on CUDA device 0");
            } else {
                tracing::info!("running inference on CPU");
            }
            device
        }
        Err(error) => {
            tracing::warn!(%error, "CUDA initialization failed, using CPU");
            Device::Cpu
        }
    }
}
