//! Ordinary least squares fit of `y = intercept + slope * x`.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Confidence level used for the trend band on the chart.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Result of a simple linear regression.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Number of observations used in the fit.
    pub n: usize,
    /// Residual standard error; `None` with fewer than three observations.
    pub residual_std_error: Option<f64>,
    mean_x: f64,
    sxx: f64,
}

/// Fit a line through `(xs[i], ys[i])`.
///
/// Returns `None` when the slices differ in length, hold fewer than two
/// points, or every `x` is identical (vertical data has no OLS line).
pub fn fit_ols(xs: &[f64], ys: &[f64]) -> Option<OlsFit> {
    let n = xs.len();
    if n != ys.len() || n < 2 {
        return None;
    }

    let nf = n as f64;
    let mean_x = xs.iter().sum::<f64>() / nf;
    let mean_y = ys.iter().sum::<f64>() / nf;

    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let ssr: f64 = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| {
            let residual = y - (intercept + slope * x);
            residual * residual
        })
        .sum();

    let r_squared = if syy == 0.0 { 1.0 } else { 1.0 - ssr / syy };
    let residual_std_error = (n > 2).then(|| (ssr / (nf - 2.0)).sqrt());

    Some(OlsFit {
        slope,
        intercept,
        r_squared,
        n,
        residual_std_error,
        mean_x,
        sxx,
    })
}

impl OlsFit {
    /// Fitted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Two-sided confidence interval of the mean response at `x`.
    ///
    /// `None` when there are no residual degrees of freedom or `level` is
    /// not inside `(0, 1)`.
    pub fn confidence_interval(&self, x: f64, level: f64) -> Option<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            return None;
        }
        let se = self.residual_std_error?;
        let dof = (self.n - 2) as f64;
        let t = StudentsT::new(0.0, 1.0, dof).ok()?.inverse_cdf(0.5 + level / 2.0);

        let dx = x - self.mean_x;
        let half_width = t * se * (1.0 / self.n as f64 + dx * dx / self.sxx).sqrt();
        let fitted = self.predict(x);
        Some((fitted - half_width, fitted + half_width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn exact_line_is_recovered() {
        let fit = fit_ols(&[1.0, 2.0, 3.0, 4.0], &[3.0, 5.0, 7.0, 9.0]).unwrap();
        assert!(close(fit.slope, 2.0, 1e-12));
        assert!(close(fit.intercept, 1.0, 1e-12));
        assert!(close(fit.r_squared, 1.0, 1e-12));
        assert!(close(fit.residual_std_error.unwrap(), 0.0, 1e-12));
        assert!(close(fit.predict(10.0), 21.0, 1e-12));
    }

    #[test]
    fn two_points_fit_without_error_estimate() {
        let fit = fit_ols(&[5.0, 10.0], &[12.3, 20.3]).unwrap();
        assert!(close(fit.slope, 1.6, 1e-12));
        assert!(fit.residual_std_error.is_none());
        assert!(fit.confidence_interval(7.0, DEFAULT_CONFIDENCE_LEVEL).is_none());
    }

    #[test]
    fn too_few_points_has_no_fit() {
        assert!(fit_ols(&[], &[]).is_none());
        assert!(fit_ols(&[5.0], &[12.3]).is_none());
    }

    #[test]
    fn mismatched_lengths_have_no_fit() {
        assert!(fit_ols(&[1.0, 2.0], &[1.0]).is_none());
    }

    #[test]
    fn identical_x_has_no_fit() {
        assert!(fit_ols(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn confidence_interval_matches_t_distribution() {
        // slope 0.5, intercept 1, residual SE sqrt(1.5), one degree of freedom.
        let fit = fit_ols(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0]).unwrap();
        assert!(close(fit.slope, 0.5, 1e-12));
        assert!(close(fit.intercept, 1.0, 1e-12));

        let (lo, hi) = fit.confidence_interval(2.0, 0.95).unwrap();
        let expected_half = 12.7062 * 1.5f64.sqrt() * (1.0f64 / 3.0).sqrt();
        assert!(close(hi - 2.0, expected_half, 1e-2));
        assert!(close(2.0 - lo, expected_half, 1e-2));
    }

    #[test]
    fn interval_widens_away_from_mean() {
        let fit = fit_ols(&[1.0, 2.0, 3.0, 4.0], &[1.1, 1.9, 3.2, 3.9]).unwrap();
        let (lo_mid, hi_mid) = fit.confidence_interval(2.5, 0.95).unwrap();
        let (lo_edge, hi_edge) = fit.confidence_interval(4.0, 0.95).unwrap();
        assert!(hi_edge - lo_edge > hi_mid - lo_mid);
    }

    #[test]
    fn invalid_level_has_no_interval() {
        let fit = fit_ols(&[1.0, 2.0, 3.0], &[1.0, 3.0, 2.0]).unwrap();
        assert!(fit.confidence_interval(2.0, 0.0).is_none());
        assert!(fit.confidence_interval(2.0, 1.0).is_none());
    }
}
