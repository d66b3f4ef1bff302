use ml_backend::{Error, Result, model::ModelRunner};
use std::sync::{Arc, Mutex};

/// Model runner that records its inputs and replays a fixed outcome.
#[derive(Debug)]
pub struct MockModelRunner {
    pub requests: Arc<Mutex<Vec<Vec<f64>>>>,
    pub output: Vec<f64>,
    pub input_dim: Option<usize>,
    pub error: Option<String>,
    pub panic: bool,
}

impl MockModelRunner {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            output: vec![1.0],
            input_dim: None,
            error: None,
            panic: false,
        }
    }

    pub fn with_output(mut self, output: Vec<f64>) -> Self {
        self.output = output;
        self
    }

    pub fn with_input_dim(mut self, dim: usize) -> Self {
        self.input_dim = Some(dim);
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn panicking(mut self) -> Self {
        self.panic = true;
        self
    }

    pub fn get_requests(&self) -> Vec<Vec<f64>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockModelRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRunner for MockModelRunner {
    fn name(&self) -> &str {
        "mock"
    }

    fn input_dim(&self) -> Option<usize> {
        self.input_dim
    }

    fn predict(&self, features: &[f64]) -> Result<Vec<f64>> {
        self.requests.lock().unwrap().push(features.to_vec());

        if self.panic {
            panic!("mock runner panicked");
        }

        if let Some(ref error) = self.error {
            return Err(Error::model(error.clone()));
        }

        if let Some(expected) = self.input_dim {
            if features.len() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    actual: features.len(),
                });
            }
        }

        Ok(self.output.clone())
    }
}
