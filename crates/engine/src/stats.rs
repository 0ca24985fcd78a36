// Summary statistics
//
// Mean, median, mode, and population standard deviation over a list of
// numbers, plus the obvious extras (min/max/sum/variance). Mode is every
// value at the maximum frequency, or None when all frequencies are one.

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<Vec<f64>>,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Parse whitespace-separated numbers, rejecting anything non-finite
pub fn parse_values(input: &str) -> EngineResult<Vec<f64>> {
    let mut values = Vec::new();
    for token in input.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| EngineError::InvalidInput {
            what: "data".to_string(),
            reason: format!("'{}' is not a number", token),
        })?;
        if !value.is_finite() {
            return Err(EngineError::InvalidInput {
                what: "data".to_string(),
                reason: format!("'{}' is not a finite number", token),
            });
        }
        values.push(value);
    }
    Ok(values)
}

pub fn summarize(values: &[f64]) -> EngineResult<Summary> {
    if values.is_empty() {
        return Err(EngineError::EmptyInput {
            what: "data".to_string(),
        });
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    // Population variance: deviations from the mean over n
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;
    let std_dev = variance.sqrt();

    Ok(Summary {
        count,
        sum,
        mean,
        median,
        mode: mode_of_sorted(&sorted),
        variance,
        std_dev,
        min: sorted[0],
        max: sorted[count - 1],
    })
}

// Run-length count over the sorted values; ties all share the mode
fn mode_of_sorted(sorted: &[f64]) -> Option<Vec<f64>> {
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &value in sorted {
        match runs.last_mut() {
            Some((run_value, run_len)) if *run_value == value => *run_len += 1,
            _ => runs.push((value, 1)),
        }
    }

    let max_frequency = runs.iter().map(|(_, len)| *len).max().unwrap_or(0);
    if max_frequency <= 1 {
        return None;
    }

    Some(
        runs.into_iter()
            .filter(|(_, len)| *len == max_frequency)
            .map(|(value, _)| value)
            .collect(),
    )
}
