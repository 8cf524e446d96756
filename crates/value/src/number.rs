//! Number helpers shared by key conversion and length checks.

/// `Number.MAX_SAFE_INTEGER`.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Formats a number the way `Number.prototype.toString()` does.
///
/// Both zeros print as `"0"`; callers that need to keep `-0` apart must
/// check for it first.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", n);
        // Rust omits the `+` sign on positive exponents.
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", n)
}

/// Returns true for `-0.0` only.
pub fn is_negative_zero(n: f64) -> bool {
    n == 0.0 && n.is_sign_negative()
}

/// Checks that `n` is a valid array-like length: a non-negative integer no
/// larger than `MAX_SAFE_INTEGER`.
pub fn is_valid_length(n: f64) -> bool {
    n >= 0.0 && n.fract() == 0.0 && n <= MAX_SAFE_INTEGER
}
