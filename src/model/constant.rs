use super::ModelRunner;
use crate::Result;

/// Placeholder runner that answers every request with the same vector.
#[derive(Debug, Clone)]
pub struct ConstantModel {
    output: Vec<f64>,
}

impl ConstantModel {
    pub fn new(output: Vec<f64>) -> Self {
        Self { output }
    }
}

impl Default for ConstantModel {
    fn default() -> Self {
        Self::new(vec![42.0])
    }
}

impl ModelRunner for ConstantModel {
    fn name(&self) -> &str {
        "constant"
    }

    fn input_dim(&self) -> Option<usize> {
        None
    }

    fn predict(&self, _features: &[f64]) -> Result<Vec<f64>> {
        Ok(self.output.clone())
    }
}
