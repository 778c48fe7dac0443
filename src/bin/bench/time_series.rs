// Per-Buy JSONL Price Series
// Outputs one JSON line per buy so price paths can be charted externally

use launch_sim::SimulationResult;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq)]
pub struct PricePoint {
    pub index: u64,
    pub step: u32,
    pub price: f64,
    pub raised: f64,
}

/// Price path of a finished run.
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn from_result(result: &SimulationResult) -> Self {
        let steps = result
            .buys_per_step
            .iter()
            .enumerate()
            .flat_map(|(t, &n)| std::iter::repeat(t as u32).take(n as usize));

        let mut raised = 0.0;
        let points = result
            .price_history
            .iter()
            .zip(steps)
            .enumerate()
            .map(|(i, (&price, step))| {
                raised += price;
                PricePoint { index: i as u64, step, price, raised }
            })
            .collect();
        Self { points }
    }

    /// Write all points to a JSONL file
    pub fn write_jsonl(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        for point in &self.points {
            let line = serde_json::to_string(point)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            writeln!(file, "{}", line)?;
        }
        file.flush()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// File-name-safe form of a strategy name.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use launch_sim::{run_simulation, LaunchConfig, UserBehavior};

    #[test]
    fn series_tracks_steps_and_raise() {
        let config = LaunchConfig {
            entry_rate: 2.0,
            max_time: 2,
            behavior: UserBehavior::Uniform,
            target_raise: None,
            ..LaunchConfig::default()
        };
        let result = run_simulation(&config).expect("test: run");
        let series = PriceSeries::from_result(&result);
        assert_eq!(series.len(), 4);
        let steps: Vec<u32> = series.points.iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![0, 0, 1, 1]);
        let last = series.points.last().expect("test: non-empty");
        assert!((last.raised - result.cumulative_raised).abs() < 1e-12);
    }

    #[test]
    fn slug_is_file_safe() {
        assert_eq!(slug("LaunchLab (log, vesting, LP)"), "launchlab-log-vesting-lp");
        assert_eq!(slug("JustSendIt (linear, no vesting, no LP)"), "justsendit-linear-no-vesting-no-lp");
    }
}
