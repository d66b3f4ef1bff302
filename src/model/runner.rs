use super::{ConstantModel, LinearModel};
use crate::{Result, config::ModelConfig};
use std::sync::Arc;
use tracing::info;

/// A loaded model, shared read-only across concurrent requests.
///
/// Implementations must be pure functions of their input: the server calls
/// `predict` from the blocking pool without any synchronization.
pub trait ModelRunner: Send + Sync {
    fn name(&self) -> &str;

    /// Expected feature-vector length, or `None` if any length is accepted.
    fn input_dim(&self) -> Option<usize>;

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>>;
}

/// Builds the runner described by `config`. Called once at startup.
pub fn build_runner(config: &ModelConfig) -> Result<Arc<dyn ModelRunner>> {
    let runner: Arc<dyn ModelRunner> = match config {
        ModelConfig::Constant { output } => Arc::new(ConstantModel::new(output.clone())),
        ModelConfig::Linear { weights, bias } => {
            Arc::new(LinearModel::new(weights.clone(), bias.clone())?)
        }
    };

    info!(
        "Model runner ready: {} (input dim: {})",
        runner.name(),
        runner
            .input_dim()
            .map_or_else(|| "any".to_string(), |d| d.to_string())
    );

    Ok(runner)
}
