// Color helpers shared by the tint tweens.

use bevy::prelude::*;

/// Linearly interpolates between two colors in sRGB space.
/// `t` is clamped to `[0, 1]`.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let from_srgba = from.to_srgba();
    let to_srgba = to.to_srgba();

    Color::srgba(
        from_srgba.red + (to_srgba.red - from_srgba.red) * t,
        from_srgba.green + (to_srgba.green - from_srgba.green) * t,
        from_srgba.blue + (to_srgba.blue - from_srgba.blue) * t,
        from_srgba.alpha + (to_srgba.alpha - from_srgba.alpha) * t,
    )
}

/// Returns true if two colors match per sRGB channel within `epsilon`.
pub fn approx_eq(a: Color, b: Color, epsilon: f32) -> bool {
    let a = a.to_srgba();
    let b = b.to_srgba();
    (a.red - b.red).abs() <= epsilon
        && (a.green - b.green).abs() <= epsilon
        && (a.blue - b.blue).abs() <= epsilon
        && (a.alpha - b.alpha).abs() <= epsilon
}
