//! Gridworld navigation trained with an online actor-critic agent
//!
//! This library provides:
//! - The gridworld model: reward surface, movement rules, configuration
//!   (grid module)
//! - The learning machinery: policy-value network and per-step actor-critic
//!   updates (rl module)
//! - Per-episode metric collection for external reporting (metrics module)
//! - The training mode driving the episode/step loops (modes module)

pub mod grid;
pub mod metrics;
pub mod modes;
pub mod rl;
