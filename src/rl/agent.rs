//! Online actor-critic agent
//!
//! This module implements the per-step actor-critic algorithm: action
//! selection from the learned policy, the compound policy-gradient plus
//! value-regression loss, and the parameter update. The agent learns online
//! at transition granularity: one forward pass, one backward pass, and one
//! Adam step per environment step, so every update is visible to the very
//! next forward pass.

use burn::{
    optim::{Adam, AdamConfig, GradientsParams, Optimizer, adaptor::OptimizerAdaptor},
    tensor::{ElementConversion, Int, Tensor, backend::AutodiffBackend},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;

use super::config::AgentConfig;
use super::network::PolicyValueNetwork;
use super::observation::position_tensor;
use crate::grid::{Cell, GridEnvironment, InvalidActionError, NUM_ACTIONS};

/// The loss became non-finite; continuing would corrupt the parameters
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("training loss became non-finite ({loss})")]
pub struct NumericalError {
    pub loss: f32,
}

/// Failure of a single training step
///
/// Both variants are unrecoverable for the current run: a failed step
/// invalidates the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TrainingError {
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    #[error(transparent)]
    Numerical(#[from] NumericalError),
}

/// One completed environment transition and its update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Sampled action index
    pub action: usize,
    /// Reward returned by the environment
    pub reward: f32,
    /// Whether the agent reached the goal
    pub done: bool,
    /// Critic's value estimate for the pre-move state
    pub value: f32,
    /// Action probabilities the action was sampled from
    pub policy: [f32; NUM_ACTIONS],
    /// Scalar loss of this step's update
    pub loss: f32,
}

/// Actor-critic agent trained online, one update per environment step
///
/// Owns the policy-value network, the Adam optimizer, and a seeded RNG for
/// action sampling. The advantage is the one-step, bootstrap-free estimate
/// `reward - value`: it does not add a discounted estimate of the next
/// state's value, a deliberate simplification relative to standard
/// actor-critic.
pub struct ActorCriticAgent<B: AutodiffBackend> {
    /// Policy-value network
    network: PolicyValueNetwork<B>,

    /// Adam optimizer over the network parameters
    optim: OptimizerAdaptor<Adam, PolicyValueNetwork<B>, B>,

    /// Hyperparameters
    config: AgentConfig,

    /// RNG driving action sampling, seeded for reproducible runs
    rng: StdRng,

    /// Device for tensor operations
    device: B::Device,
}

impl<B: AutodiffBackend> ActorCriticAgent<B> {
    /// Create a new agent
    pub fn new(
        network: PolicyValueNetwork<B>,
        config: AgentConfig,
        seed: u64,
        device: B::Device,
    ) -> Self {
        config.validate().expect("Invalid agent configuration");

        let optim = AdamConfig::new().init();

        Self {
            network,
            optim,
            config,
            rng: StdRng::seed_from_u64(seed),
            device,
        }
    }

    /// Evaluate the policy and value for a position without training
    pub fn evaluate(&self, position: Cell) -> ([f32; NUM_ACTIONS], f32) {
        use burn::module::AutodiffModule;

        let input = position_tensor::<B::InnerBackend>(position, &self.device);
        let (policy, value) = self.network.valid().forward(input);

        (
            policy_array(
                policy
                    .to_data()
                    .to_vec()
                    .expect("policy tensor converts to vec"),
            ),
            value.into_scalar().elem::<f32>(),
        )
    }

    /// Perform one online transition and parameter update
    ///
    /// Queries the network at the environment's current position, samples an
    /// action from the policy, steps the environment, and immediately
    /// updates the parameters from this single transition:
    ///
    /// - advantage = reward - value (one-step, no bootstrap)
    /// - loss = -log(policy[action]) * advantage
    ///          + smooth-L1(value, reward), summed unweighted
    ///
    /// Fails with [`NumericalError`] before the optimizer step if the loss
    /// is non-finite.
    pub fn step(&mut self, env: &mut GridEnvironment) -> Result<Transition, TrainingError> {
        let input = position_tensor::<B>(env.position(), &self.device);

        // Forward pass with gradient tracking; the same graph backs the
        // sampled action's log-probability and the critic regression.
        let (policy, value) = self.network.forward(input);

        let probs: Vec<f32> = policy
            .to_data()
            .to_vec()
            .expect("policy tensor converts to vec");
        let value_estimate = value.clone().into_scalar().elem::<f32>();

        let action = sample_categorical(&probs, &mut self.rng);

        let step = env.step(action)?;

        // One-step advantage, detached from the graph.
        let advantage = step.reward - value_estimate;

        let action_tensor = Tensor::<B, 1, Int>::from_ints([action as i32], &self.device);
        let log_prob = policy
            .clone()
            .gather(1, action_tensor.unsqueeze_dim(1))
            .log();
        let policy_loss = log_prob.neg().mul_scalar(advantage);

        let target = Tensor::<B, 2>::from_floats([[step.reward]], &self.device);
        let value_loss = smooth_l1_loss(value, target);

        let loss = policy_loss + value_loss;
        let loss_value = loss.clone().into_scalar().elem::<f32>();

        if !loss_value.is_finite() {
            return Err(NumericalError { loss: loss_value }.into());
        }

        let grads = loss.backward();
        let grads = GradientsParams::from_grads(grads, &self.network);
        self.network = self
            .optim
            .step(self.config.learning_rate, self.network.clone(), grads);

        Ok(Transition {
            action,
            reward: step.reward,
            done: step.done,
            value: value_estimate,
            policy: policy_array(probs),
            loss: loss_value,
        })
    }

    /// Get a reference to the policy-value network
    pub fn network(&self) -> &PolicyValueNetwork<B> {
        &self.network
    }

    /// Get a reference to the agent configuration
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

/// Smooth L1 (Huber) loss between a prediction and its target
///
/// Quadratic within one unit of the target, linear beyond it.
fn smooth_l1_loss<B: AutodiffBackend>(value: Tensor<B, 2>, target: Tensor<B, 2>) -> Tensor<B, 2> {
    let diff = value - target;
    let abs = diff.clone().abs();

    let quadratic = (diff.clone() * diff).mul_scalar(0.5);
    let linear = abs.clone().sub_scalar(0.5);

    quadratic.mask_where(abs.greater_elem(1.0), linear)
}

/// Sample an action from a categorical distribution
fn sample_categorical(probs: &[f32], rng: &mut StdRng) -> usize {
    let random_val: f32 = rng.sample(rand::distributions::Standard);
    let mut cumsum = 0.0;

    for (idx, &prob) in probs.iter().enumerate() {
        cumsum += prob;
        if random_val < cumsum {
            return idx;
        }
    }

    // Fallback to last action
    probs.len() - 1
}

fn policy_array(probs: Vec<f32>) -> [f32; NUM_ACTIONS] {
    probs
        .try_into()
        .expect("actor head emits one probability per action")
}
