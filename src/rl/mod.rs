//! Reinforcement learning machinery for the gridworld
//!
//! Provides:
//! - Backend type aliases for training and inference
//! - Position-to-tensor encoding
//! - The shared-trunk policy-value network
//! - The online actor-critic agent (one update per environment step)

pub mod agent;
pub mod backend;
pub mod config;
pub mod network;
pub mod observation;

pub use agent::{ActorCriticAgent, NumericalError, TrainingError, Transition};
pub use backend::{InferenceBackend, TrainingBackend, default_device};
pub use config::AgentConfig;
pub use network::{PolicyValueConfig, PolicyValueNetwork};
pub use observation::position_tensor;
