//! Policy-value network for the gridworld agent
//!
//! A small fully-connected network with two heads:
//! - **Actor head**: action probabilities for the 4 movement options
//! - **Critic head**: scalar value estimate for the input state
//!
//! # Architecture
//!
//! ```text
//! Input: [batch, 2] (row, col)
//!   ↓ Linear(2 → 64) + ReLU
//!   ↓ Linear(64 → 32) + ReLU
//!   ↓ Split
//!   ├─→ Actor: Linear(32 → 4) → Softmax → Action probabilities
//!   └─→ Critic: Linear(32 → 1) → Value estimate
//! ```
//!
//! The trunk is owned once by the module; both heads consume its output
//! features, so an optimizer built from this module's gradients sees every
//! shared parameter exactly once.

use burn::{
    module::Module,
    nn::{Linear, LinearConfig},
    tensor::{
        Tensor,
        activation::{relu, softmax},
        backend::Backend,
    },
};

use crate::grid::NUM_ACTIONS;

/// Configuration for the policy-value network
#[derive(Debug, Clone)]
pub struct PolicyValueConfig {
    /// Input dimension (default: 2, the row/col coordinates)
    pub input_dim: usize,

    /// Widths of the two shared hidden layers (default: [64, 32])
    pub hidden_dims: [usize; 2],

    /// Number of actions the policy can output (default: 4)
    pub num_actions: usize,
}

impl PolicyValueConfig {
    pub fn new() -> Self {
        Self {
            input_dim: 2,
            hidden_dims: [64, 32],
            num_actions: NUM_ACTIONS,
        }
    }

    /// Initialize the network from this configuration
    pub fn init<B: Backend>(&self, device: &B::Device) -> PolicyValueNetwork<B> {
        PolicyValueNetwork {
            fc1: LinearConfig::new(self.input_dim, self.hidden_dims[0]).init(device),
            fc2: LinearConfig::new(self.hidden_dims[0], self.hidden_dims[1]).init(device),
            actor_head: LinearConfig::new(self.hidden_dims[1], self.num_actions).init(device),
            critic_head: LinearConfig::new(self.hidden_dims[1], 1).init(device),
        }
    }
}

impl Default for PolicyValueConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Actor-critic network with a shared feature trunk
///
/// Generic over the Burn backend, so the same module runs on a plain backend
/// for inference and an `Autodiff` backend for training.
#[derive(Module, Debug)]
pub struct PolicyValueNetwork<B: Backend> {
    /// First shared layer: 2 → 64
    fc1: Linear<B>,
    /// Second shared layer: 64 → 32
    fc2: Linear<B>,
    /// Actor head: action probabilities
    actor_head: Linear<B>,
    /// Critic head: value estimate
    critic_head: Linear<B>,
}

impl<B: Backend> PolicyValueNetwork<B> {
    /// Forward pass through the network
    ///
    /// # Arguments
    ///
    /// * `position` - Tensor with shape `[batch, 2]` of real-valued (row, col)
    ///   coordinates
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - `policy`: `[batch, num_actions]` action probabilities (non-negative,
    ///   each row sums to 1)
    /// - `value`: `[batch, 1]` state-value estimates, unconstrained in sign
    pub fn forward(&self, position: Tensor<B, 2>) -> (Tensor<B, 2>, Tensor<B, 2>) {
        let x = relu(self.fc1.forward(position));
        let x = relu(self.fc2.forward(x));

        let policy = softmax(self.actor_head.forward(x.clone()), 1);
        let value = self.critic_head.forward(x);

        (policy, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::rl::observation::position_tensor;
    use burn::backend::Autodiff;
    use burn::backend::ndarray::{NdArray, NdArrayDevice};
    use burn::tensor::TensorData;

    type TestBackend = NdArray<f32>;
    type TestAutodiffBackend = Autodiff<NdArray<f32>>;

    #[test]
    fn test_forward_pass_shapes() {
        let device = NdArrayDevice::default();
        let network = PolicyValueConfig::new().init::<TestBackend>(&device);

        let input = Tensor::from_floats([[0.0, 4.0], [2.0, 2.0]], &device);
        let (policy, value) = network.forward(input);

        assert_eq!(policy.dims(), [2, 4]);
        assert_eq!(value.dims(), [2, 1]);
    }

    #[test]
    fn test_policy_is_distribution() {
        let device = NdArrayDevice::default();
        let network = PolicyValueConfig::new().init::<TestBackend>(&device);

        for row in 0..5 {
            for col in 0..5 {
                let input = position_tensor::<TestBackend>(Cell::new(row, col), &device);
                let (policy, _) = network.forward(input);

                let data: TensorData = policy.into_data();
                let probs = data.as_slice::<f32>().unwrap();

                let sum: f32 = probs.iter().sum();
                assert!(
                    (sum - 1.0).abs() < 1e-5,
                    "probabilities for ({}, {}) sum to {}",
                    row,
                    col,
                    sum
                );
                for &p in probs {
                    assert!(p >= 0.0, "negative probability {}", p);
                }
            }
        }
    }

    #[test]
    fn test_outputs_finite() {
        let device = NdArrayDevice::default();
        let network = PolicyValueConfig::new().init::<TestBackend>(&device);

        let input = Tensor::from_floats([[4.0, 0.0]], &device);
        let (policy, value) = network.forward(input);

        for &v in policy.into_data().as_slice::<f32>().unwrap() {
            assert!(v.is_finite());
        }
        for &v in value.into_data().as_slice::<f32>().unwrap() {
            assert!(v.is_finite());
        }
    }

    #[test]
    fn test_gradient_flow() {
        let device = NdArrayDevice::default();
        let network = PolicyValueConfig::new().init::<TestAutodiffBackend>(&device);

        let input = Tensor::from_floats([[1.0, 3.0]], &device).require_grad();
        let (policy, value) = network.forward(input.clone());

        let loss = policy.sum() + value.sum();
        let gradients = loss.backward();

        let input_grad = input.grad(&gradients);
        assert!(
            input_grad.is_some(),
            "gradients should flow back to the input position"
        );
    }

    #[test]
    fn test_gradients_through_each_head() {
        let device = NdArrayDevice::default();
        let network = PolicyValueConfig::new().init::<TestAutodiffBackend>(&device);

        let input = Tensor::from_floats([[1.0, 1.0]], &device).require_grad();
        let (policy, _) = network.forward(input.clone());
        let actor_grads = policy.sum().backward();
        assert!(input.grad(&actor_grads).is_some());

        let input = Tensor::from_floats([[1.0, 1.0]], &device).require_grad();
        let (_, value) = network.forward(input.clone());
        let critic_grads = value.sum().backward();
        assert!(input.grad(&critic_grads).is_some());
    }

    #[test]
    fn test_batch_consistency() {
        let device = NdArrayDevice::default();
        let network = PolicyValueConfig::new().init::<TestBackend>(&device);

        let single = Tensor::from_floats([[2.0, 3.0]], &device);
        let (policy_single, value_single) = network.forward(single);

        let batch = Tensor::from_floats([[2.0, 3.0], [0.0, 0.0]], &device);
        let (policy_batch, value_batch) = network.forward(batch);

        let single_probs = policy_single.into_data();
        let batch_probs = policy_batch.into_data();
        let single_probs = single_probs.as_slice::<f32>().unwrap();
        let batch_probs = batch_probs.as_slice::<f32>().unwrap();

        for j in 0..4 {
            assert!((single_probs[j] - batch_probs[j]).abs() < 1e-5);
        }

        let v_single = value_single.into_data().as_slice::<f32>().unwrap()[0];
        let v_batch = value_batch.into_data().as_slice::<f32>().unwrap()[0];
        assert!((v_single - v_batch).abs() < 1e-5);
    }
}
