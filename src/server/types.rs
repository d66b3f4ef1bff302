use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

pub const ROOT_MESSAGE: &str = "ML Backend is running";

#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

impl Default for RootResponse {
    fn default() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    #[serde(serialize_with = "serialize_prediction")]
    pub prediction: Vec<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Largest integer an f64 represents exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Writes integral values as JSON integers, so a prediction of `42.0`
/// goes over the wire as `42`.
fn serialize_prediction<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(|&v| PredictionValue(v)))
}

struct PredictionValue(f64);

impl Serialize for PredictionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if !v.is_finite() {
            return Err(S::Error::custom(format!("non-finite prediction value: {}", v)));
        }
        if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}
