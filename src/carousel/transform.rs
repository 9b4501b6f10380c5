//! Reading the track offset back from its computed CSS transform.
//!
//! Browsers report computed transforms as `none`, `matrix(a, b, c, d, tx, ty)`
//! or `matrix3d(...)` with the x translation at index 12.

/// Extract the x translation from a computed transform.
///
/// Returns `Some(0.0)` for `none` and `None` when the string is not a
/// readable matrix. Values are truncated to whole pixels, matching how the
/// offset is resynchronised at drag start.
pub fn parse_translate_x(transform: &str) -> Option<f32> {
    let transform = transform.trim();
    if transform.is_empty() || transform == "none" {
        return Some(0.0);
    }

    let (name, rest) = transform.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    let index = match name.trim() {
        "matrix" => 4,
        "matrix3d" => 12,
        _ => return None,
    };

    let value: f32 = body.split(',').nth(index)?.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc())
}

/// CSS value applied to the track for a given offset.
pub fn translate_x_css(offset: f32) -> String {
    format!("translateX({offset}px)")
}
