use crate::record::Record;
use std::fmt;

/// Time and percentage samples, pushed in pairs.
pub struct Accumulators {
    times: Vec<f64>,
    percentages: Vec<f64>,
}

/// Means of the accumulated samples.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Summary {
    pub n_records: usize,
    pub mean_time: f64,
    pub mean_percentage: f64,
}

impl Accumulators {
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            percentages: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.times.push(record.time);
        self.percentages.push(record.percentage);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `None` if no record was pushed.
    pub fn summary(&self) -> Option<Summary> {
        Some(Summary {
            n_records: self.len(),
            mean_time: compute_mean(&self.times)?,
            mean_percentage: compute_mean(&self.percentages)?,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the fractional part of integral values.
        writeln!(f, "Average time: {:?}", self.mean_time)?;
        write!(f, "Average percentage: {:?}", self.mean_percentage)
    }
}

pub fn compute_mean(vals: &[f64]) -> Option<f64> {
    if vals.is_empty() {
        return None;
    }
    Some(vals.iter().sum::<f64>() / vals.len() as f64)
}
