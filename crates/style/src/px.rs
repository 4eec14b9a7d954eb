/// Parse a pixel length (`"42px"`, `"42.5px"`, or a bare number) into
/// an integer px value.
///
/// Malformed, negative, or non-finite input yields 0 rather than an
/// error; a wrong size is presentation noise, not a failure.
pub fn px_to_int(value: &str) -> i32 {
    let v = value.trim();
    let v = v.strip_suffix("px").map(str::trim_end).unwrap_or(v);

    match v.parse::<f32>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.round() as i32,
        _ => 0,
    }
}
