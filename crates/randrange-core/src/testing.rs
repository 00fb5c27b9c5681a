//! Scripted primitive for unit tests inside this crate.

use crate::error::EntropyError;
use crate::primitive::BoundedUniform;

/// Replays `values` in order and records every requested bound.
#[derive(Debug, Default)]
pub(crate) struct Scripted {
    values: Vec<u32>,
    pub(crate) bounds: Vec<u32>,
}

impl Scripted {
    pub(crate) fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            bounds: Vec::new(),
        }
    }
}

impl BoundedUniform for Scripted {
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        let value = *self
            .values
            .get(self.bounds.len())
            .expect("scripted primitive exhausted");
        self.bounds.push(bound);
        Ok(value)
    }
}
