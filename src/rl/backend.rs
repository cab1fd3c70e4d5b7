//! Backend type aliases and device management
//!
//! The gridworld state space and network are small, so the CPU NdArray
//! backend is sufficient for both training and inference.

use burn::backend::{
    Autodiff,
    ndarray::{NdArray, NdArrayDevice},
};

/// Backend type for training (with autodiff)
pub type TrainingBackend = Autodiff<NdArray<f32>>;

/// Backend type for inference (without autodiff)
pub type InferenceBackend = NdArray<f32>;

/// Get the default device for computation
pub fn default_device() -> NdArrayDevice {
    NdArrayDevice::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device() {
        let device = default_device();
        let _device_copy = device.clone();
    }
}
