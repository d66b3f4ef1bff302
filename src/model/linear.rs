use super::ModelRunner;
use crate::{Error, Result};

/// Affine model `y = W x + b` with one output per weight row.
#[derive(Debug, Clone)]
pub struct LinearModel {
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
    input_dim: usize,
}

impl LinearModel {
    pub fn new(weights: Vec<Vec<f64>>, bias: Vec<f64>) -> Result<Self> {
        let input_dim = match weights.first() {
            Some(row) if !row.is_empty() => row.len(),
            Some(_) => return Err(Error::invalid_model("weight rows must not be empty")),
            None => return Err(Error::invalid_model("at least one weight row is required")),
        };

        if let Some(i) = weights.iter().position(|row| row.len() != input_dim) {
            return Err(Error::invalid_model(format!(
                "weight row {} has {} columns, expected {}",
                i,
                weights[i].len(),
                input_dim
            )));
        }

        if bias.len() != weights.len() {
            return Err(Error::invalid_model(format!(
                "bias has {} entries but there are {} weight rows",
                bias.len(),
                weights.len()
            )));
        }

        if weights.iter().flatten().chain(&bias).any(|v| !v.is_finite()) {
            return Err(Error::invalid_model("weights and bias must be finite"));
        }

        Ok(Self {
            weights,
            bias,
            input_dim,
        })
    }
}

impl ModelRunner for LinearModel {
    fn name(&self) -> &str {
        "linear"
    }

    fn input_dim(&self) -> Option<usize> {
        Some(self.input_dim)
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        if features.len() != self.input_dim {
            return Err(Error::DimensionMismatch {
                expected: self.input_dim,
                actual: features.len(),
            });
        }

        let outputs: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.bias)
            .map(|(row, b)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + b)
            .collect();

        if outputs.iter().any(|v| !v.is_finite()) {
            return Err(Error::model("non-finite prediction"));
        }

        Ok(outputs)
    }
}
