//! Display formatting for evaluation results.

/// Significant digits kept for non-integral or very large results.
const SIGNIFICANT_DIGITS: usize = 12;

/// Integers below this magnitude are printed in full.
const PLAIN_INTEGER_LIMIT: f64 = 1e12;

/// Text shown in place of a result that cannot be displayed.
pub const ERROR_TEXT: &str = "Error";

/// Format a result for display.
///
/// Integers below `1e12` print as-is. Everything else is rounded to 12
/// significant digits with trailing zeros dropped, switching to exponent
/// notation (`1.5e-7`, `2e+15`) outside the `1e-7..1e12` window.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return ERROR_TEXT.to_string();
    }
    if n.abs() < PLAIN_INTEGER_LIMIT && n.fract() == 0.0 {
        // also folds -0 into "0"
        return (n as i64).to_string();
    }
    to_precision(n)
}

fn to_precision(n: f64) -> String {
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, n);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -6 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{}", trim_fraction(mantissa), sign, exponent.abs());
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
    trim_fraction(&format!("{n:.decimals$}")).to_string()
}

fn trim_fraction(digits: &str) -> &str {
    if !digits.contains('.') {
        return digits;
    }
    digits.trim_end_matches('0').trim_end_matches('.')
}
