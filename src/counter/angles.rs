//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a joint (e.g. the elbow) from the
//! two adjacent landmarks, in integer degrees.

/// Vectors shorter than this are treated as zero-length (coincident landmarks)
const MIN_MAGNITUDE: f32 = 0.0001;

/// Calculate the interior angle at vertex `b` formed by points `a` and `c`
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns the angle rounded to the nearest degree:
/// - 90° = fully bent (wrist near shoulder)
/// - 180° = fully straight (arm extended)
///
/// Returns `None` when either vector is zero-length — the pose data is
/// unreliable this frame and the caller must skip phase logic.
pub fn joint_angle(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<u32> {
    // Vector from vertex to first point
    let v1 = (a.0 - b.0, a.1 - b.1);

    // Vector from vertex to second point
    let v2 = (c.0 - b.0, c.1 - b.1);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    // Degenerate case: coincident landmarks give no angle
    if mag1 < MIN_MAGNITUDE || mag2 < MIN_MAGNITUDE {
        return None;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);

    Some(cos_angle.acos().to_degrees().round() as u32)
}
