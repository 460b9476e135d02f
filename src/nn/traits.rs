//! Tensor container shared by the encoders and the Python bindings.

use serde::{Deserialize, Serialize};

/// Encoded game state as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[channels, rows, cols]` for board observations.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index. Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }

    /// Values as 0/1 bytes, for occupancy planes.
    #[must_use]
    pub fn to_binary(&self) -> Vec<i8> {
        self.tensor.iter().map(|&v| i8::from(v != 0.0)).collect()
    }
}
