//! Lorenz curves
//!
//! The Lorenz curve plots the cumulative share of income held by the
//! poorest fraction of the population. It underpins the Wolfson
//! bipolarization index and the Schutz measures; the curve itself is plain
//! data, ready for external plotting code.

use ineq_core::{validate, Error, Result};

/// Cumulative population/income shares, anchored at (0, 0)
///
/// Both coordinate vectors have `n + 1` points and end at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct LorenzCurve {
    cum_population: Vec<f64>,
    cum_share: Vec<f64>,
}

/// Build the Lorenz curve of a non-negative attribute vector.
///
/// Requires a strictly positive total ([`Error::Degenerate`] for an all-zero
/// vector) and non-negative values (a negative income would make the curve
/// non-monotone).
pub fn lorenz_curve(x: &[f64]) -> Result<LorenzCurve> {
    validate::sample(x, "attribute vector")?;
    if x.iter().any(|&v| v < 0.0) {
        return Err(Error::InvalidInput(
            "Lorenz curve requires non-negative values".to_string(),
        ));
    }
    let total: f64 = x.iter().sum();
    if total == 0.0 {
        return Err(Error::Degenerate(
            "Lorenz curve is undefined for an all-zero vector".to_string(),
        ));
    }

    let n = x.len();
    let mut sorted = x.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mut cum_share = Vec::with_capacity(n + 1);
    cum_share.push(0.0);
    let mut running = 0.0;
    for &v in &sorted {
        running += v;
        cum_share.push(running / total);
    }
    let cum_population = (0..=n).map(|i| i as f64 / n as f64).collect();

    Ok(LorenzCurve {
        cum_population,
        cum_share,
    })
}

impl LorenzCurve {
    /// Cumulative population shares, `0, 1/n, ..., 1`.
    pub fn cum_population(&self) -> &[f64] {
        &self.cum_population
    }

    /// Cumulative income shares, starting at 0 and ending at 1.
    pub fn cum_share(&self) -> &[f64] {
        &self.cum_share
    }

    /// Gini coefficient as one minus twice the area under the curve
    /// (trapezoid rule over the curve's own grid).
    pub fn gini(&self) -> f64 {
        let mut area = 0.0;
        for k in 0..self.cum_share.len() - 1 {
            let dx = self.cum_population[k + 1] - self.cum_population[k];
            area += dx * (self.cum_share[k] + self.cum_share[k + 1]) / 2.0;
        }
        1.0 - 2.0 * area
    }

    /// Income share of the poorest fraction `p`, by linear interpolation.
    pub fn share_at(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameter(format!(
                "population share {p} must be in [0, 1]"
            )));
        }
        let n = self.cum_share.len() - 1;
        let pos = p * n as f64;
        let k = (pos.floor() as usize).min(n - 1);
        let t = pos - k as f64;
        Ok(self.cum_share[k] + t * (self.cum_share[k + 1] - self.cum_share[k]))
    }
}
