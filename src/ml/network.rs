//! Feed-forward scoring network
//!
//! A fixed-weight graph mapping a feature vector to one scalar in [0, 1].
//! Hidden layers use tanh, the output layer sigmoid. The serialized form is
//! the persisted weight-graph format: input arity plus per-layer weight
//! matrices and bias vectors.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One fully-connected layer
///
/// `weights[j]` holds the incoming weights of output unit `j`; `biases[j]`
/// its bias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Weight matrix, one row per output unit
    pub weights: Vec<Vec<f32>>,
    /// Bias vector, one entry per output unit
    pub biases: Vec<f32>,
}

impl Layer {
    /// Number of output units
    pub fn output_width(&self) -> usize {
        self.biases.len()
    }
}

/// Feed-forward network with a single scalar output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    /// Expected input vector length
    pub input_arity: usize,
    /// Layers, input side first
    pub layers: Vec<Layer>,
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl Network {
    /// Construct a freshly initialized, untrained network
    ///
    /// One tanh hidden layer of `hidden_width` units and a single sigmoid
    /// output unit, weights drawn uniformly from [-0.5, 0.5]. Used as the
    /// degraded-mode fallback when persisted weights cannot be loaded.
    pub fn untrained(input_arity: usize, hidden_width: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let mut random_layer = |inputs: usize, outputs: usize| Layer {
            weights: (0..outputs)
                .map(|_| (0..inputs).map(|_| rng.gen_range(-0.5..0.5)).collect())
                .collect(),
            biases: (0..outputs).map(|_| rng.gen_range(-0.5..0.5)).collect(),
        };

        Self {
            input_arity,
            layers: vec![
                random_layer(input_arity, hidden_width),
                random_layer(hidden_width, 1),
            ],
        }
    }

    /// Validate internal shape consistency
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ModelUnavailable` if the graph is empty, a
    /// layer's weight matrix disagrees with its bias vector or with the
    /// previous layer's width, or the final layer is not a single unit.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.layers.is_empty() {
            return Err(AnalysisError::ModelUnavailable(
                "Weight graph has no layers".to_string(),
            ));
        }

        let mut width = self.input_arity;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.weights.len() != layer.biases.len() {
                return Err(AnalysisError::ModelUnavailable(format!(
                    "Layer {}: {} weight rows but {} biases",
                    i,
                    layer.weights.len(),
                    layer.biases.len()
                )));
            }
            for (j, row) in layer.weights.iter().enumerate() {
                if row.len() != width {
                    return Err(AnalysisError::ModelUnavailable(format!(
                        "Layer {} unit {}: {} incoming weights, expected {}",
                        i,
                        j,
                        row.len(),
                        width
                    )));
                }
            }
            width = layer.output_width();
        }

        if width != 1 {
            return Err(AnalysisError::ModelUnavailable(format!(
                "Final layer has {} outputs, expected exactly 1",
                width
            )));
        }

        Ok(())
    }

    /// Run the network on a feature vector
    ///
    /// # Returns
    ///
    /// The scalar output before defensive clamping (sigmoid keeps it in
    /// (0, 1) already).
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` on an arity mismatch.
    pub fn forward(&self, input: &[f32]) -> Result<f32, AnalysisError> {
        if input.len() != self.input_arity {
            return Err(AnalysisError::InvalidInput(format!(
                "Feature vector length mismatch: got {}, expected {}",
                input.len(),
                self.input_arity
            )));
        }

        if self.layers.is_empty() {
            return Err(AnalysisError::ProcessingError(
                "Cannot run inference on an empty weight graph".to_string(),
            ));
        }

        let last = self.layers.len() - 1;
        let mut activations = input.to_vec();
        for (i, layer) in self.layers.iter().enumerate() {
            let mut next = Vec::with_capacity(layer.output_width());
            for (row, &bias) in layer.weights.iter().zip(layer.biases.iter()) {
                let mut sum = bias;
                for (&w, &a) in row.iter().zip(activations.iter()) {
                    sum += w * a;
                }
                next.push(if i == last { sigmoid(sum) } else { sum.tanh() });
            }
            activations = next;
        }

        activations.into_iter().next().ok_or_else(|| {
            AnalysisError::ProcessingError("Weight graph produced no output".to_string())
        })
    }
}
