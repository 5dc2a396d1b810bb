//! Scam Risk Index (SRI)

/// Small-batch severity index in [0,100], intended for 5-10 messages.
///
/// `SRI = 100 * (0.5*mean + 0.3*p95 + 0.2*frac_over_0.8)`, rounded to two
/// decimals. The 95th percentile is nearest-rank (no interpolation), so one
/// severe message in an otherwise benign batch still raises the index.
pub fn scam_risk_index(risks: &[f64]) -> f64 {
    if risks.is_empty() {
        return 0.0;
    }

    let mut xs: Vec<f64> = risks.iter().map(|r| r.clamp(0.0, 1.0)).collect();
    xs.sort_by(f64::total_cmp);

    let n = xs.len();
    let mean = xs.iter().sum::<f64>() / n as f64;
    let p95 = xs[((0.95 * (n - 1) as f64) as usize).min(n - 1)];
    let frac80 = xs.iter().filter(|&&r| r >= 0.8).count() as f64 / n as f64;

    let sri = 100.0 * (0.5 * mean + 0.3 * p95 + 0.2 * frac80);
    (sri * 100.0).round() / 100.0
}
