pub mod json;
pub mod text;

/// Shortest round-trip form, but whole numbers keep one decimal (`0.0`, not `0`).
pub fn format_score(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
