/// Interpolate a single value from `(xp, fp)`, clamping outside the range.
///
/// `xp` must be sorted ascending.
pub fn interp_one(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    debug_assert_eq!(xp.len(), fp.len());
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[xp.len() - 1] {
        return fp[fp.len() - 1];
    }

    // Binary search for the bracket
    let idx = xp.partition_point(|&v| v < x);
    if idx == 0 {
        return fp[0];
    }

    if (xp[idx] - x).abs() < f64::EPSILON * xp[idx].abs() {
        return fp[idx];
    }

    let lo = idx - 1;
    let t = (x - xp[lo]) / (xp[idx] - xp[lo]);
    fp[lo] + t * (fp[idx] - fp[lo])
}

/// Log-log interpolation of a single value.
///
/// Equivalent to `exp(interp(log(x), log_xp, log_fp))`, with `xp` and `fp`
/// already stored as natural logs. Used for the mass-attenuation grids,
/// which are near-linear on log-log axes between absorption edges.
pub fn interp_loglog_one(x: f64, log_xp: &[f64], log_fp: &[f64]) -> f64 {
    interp_one(x.ln(), log_xp, log_fp).exp()
}
