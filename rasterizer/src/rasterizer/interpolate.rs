use crate::math_prelude::*;

/// Linear interpolation between two values, `t` in `[0, 1]`.
pub trait Lerp: Copy {
    fn lerp(a: &Self, b: &Self, t: f32) -> Self;
}

macro_rules! impl_lerp {
    ($ty:ident) => {
        impl Lerp for $ty {
            fn lerp(a: &Self, b: &Self, t: f32) -> Self {
                *a + (*b - *a) * t
            }
        }
    };
}

impl_lerp!(f32);
impl_lerp!(Vec2);
impl_lerp!(Vec3);

/// Samples the line from `(i0, d0)` to `(i1, d1)` at every integer `i` in `i0..=i1`.
///
/// A zero length range yields the single value `d0`; a reversed range yields
/// nothing.
pub fn interpolate<T: Lerp>(i0: i32, d0: T, i1: i32, d1: T) -> Vec<T> {
    if i0 == i1 {
        return vec![d0];
    }
    if i1 < i0 {
        return Vec::new();
    }

    let span = (i1 - i0) as f32;
    let mut values = Vec::with_capacity((i1 - i0 + 1) as usize);
    for i in i0..=i1 {
        values.push(T::lerp(&d0, &d1, (i - i0) as f32 / span));
    }
    values
}

/// Interpolates an attribute along the edges of a triangle whose vertices are
/// sorted by `y0 <= y1 <= y2`.
///
/// Returns `(long, short)`: the values along the edge `0 -> 2` and along the
/// concatenation of `0 -> 1` and `1 -> 2`. Both have `y2 - y0 + 1` entries,
/// indexed by scanline offset from `y0`.
pub fn edge_interpolate<T: Lerp>(
    y0: i32,
    v0: T,
    y1: i32,
    v1: T,
    y2: i32,
    v2: T,
) -> (Vec<T>, Vec<T>) {
    let long = interpolate(y0, v0, y2, v2);

    let mut short = Vec::with_capacity(long.len());
    let top = interpolate(y0, v0, y1, v1);
    // The value at y1 is repeated as the first entry of the bottom half.
    short.extend_from_slice(&top[..top.len() - 1]);
    short.extend(interpolate(y1, v1, y2, v2));

    (long, short)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn interpolate_includes_both_ends() {
        let values = interpolate(2, 10.0f32, 6, 30.0);
        assert_eq!(values.len(), 5);
        assert_abs_diff_eq!(values[0], 10.0);
        assert_abs_diff_eq!(values[2], 20.0);
        assert_abs_diff_eq!(values[4], 30.0);
    }

    #[test]
    fn degenerate_range_has_one_value() {
        assert_eq!(interpolate(3, 7.0f32, 3, 100.0), vec![7.0]);
        assert!(interpolate(4, 1.0f32, 3, 2.0).is_empty());
    }

    #[test]
    fn constant_values_stay_exact() {
        for v in interpolate(-50, 0.3f32, 77, 0.3) {
            assert_eq!(v, 0.3);
        }
    }

    #[test]
    fn edges_have_matching_lengths() {
        let (long, short) = edge_interpolate(0, 0.0f32, 4, 8.0, 10, 2.0);
        assert_eq!(long.len(), 11);
        assert_eq!(short.len(), 11);
        assert_abs_diff_eq!(short[4], 8.0);
        assert_abs_diff_eq!(short[10], 2.0);
        assert_abs_diff_eq!(long[10], 2.0);
    }

    #[test]
    fn flat_top_and_flat_bottom_edges() {
        let (long, short) = edge_interpolate(0, 0.0f32, 0, 5.0, 3, 1.0);
        assert_eq!((long.len(), short.len()), (4, 4));
        assert_abs_diff_eq!(short[0], 5.0);

        let (long, short) = edge_interpolate(0, 0.0f32, 3, 5.0, 3, 1.0);
        assert_eq!((long.len(), short.len()), (4, 4));
        assert_abs_diff_eq!(short[3], 5.0);
        assert_abs_diff_eq!(long[3], 1.0);

        let (long, short) = edge_interpolate(2, 4.0f32, 2, 5.0, 2, 6.0);
        assert_eq!(long, vec![4.0]);
        assert_eq!(short, vec![5.0]);
    }
}
