//! Read-only facts available to every transition.
//!
//! [`GameEnv`] bundles the rule configuration with the resolved caller
//! context. Transitions never reach outside it, which keeps execution a pure
//! function of `(state, env, action)`.
mod authority;

pub use authority::{CallContext, Capability};

use crate::config::GameConfig;

/// Aggregates the configuration and caller context for one execution.
#[derive(Clone, Copy, Debug)]
pub struct GameEnv<'a> {
    config: &'a GameConfig,
    call: &'a CallContext,
}

impl<'a> GameEnv<'a> {
    pub fn new(config: &'a GameConfig, call: &'a CallContext) -> Self {
        Self { config, call }
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn call(&self) -> &'a CallContext {
        self.call
    }
}
