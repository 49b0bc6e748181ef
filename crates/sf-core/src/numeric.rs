use crate::SfError;

/// Floating point type used throughout the solver
pub type Real = f64;

/// Tolerance for node balance checks.
///
/// Wide enough to absorb floating-point accumulation from chained
/// arithmetic, tight enough not to mask genuine modeling mistakes.
pub const BALANCE_TOLERANCE: Real = 1e-4;

/// True iff two sums agree within the balance tolerance.
pub fn balanced(sum_inputs: Real, sum_outputs: Real) -> bool {
    (sum_inputs - sum_outputs).abs() <= BALANCE_TOLERANCE
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SfError::NonFinite { what, value: v })
    }
}
