//! Piecewise-linear mapping between value ranges.

use crate::animation::Lerp;

/// Map `value` through the piecewise-linear curve defined by matching
/// control points in `input_range` and `output_range`.
///
/// `input_range` must be ascending. Values outside it continue along the
/// first or last segment.
pub fn interpolate(value: f32, input_range: &[f32], output_range: &[f32]) -> f32 {
    debug_assert_eq!(
        input_range.len(),
        output_range.len(),
        "interpolation ranges must have the same length"
    );
    debug_assert!(
        input_range.windows(2).all(|pair| pair[0] <= pair[1]),
        "interpolation input range must be ascending"
    );

    match input_range.len().min(output_range.len()) {
        0 => value,
        1 => output_range[0],
        len => {
            let mut segment = 1;
            while segment < len - 1 && value > input_range[segment] {
                segment += 1;
            }
            let in_start = input_range[segment - 1];
            let in_end = input_range[segment];
            let out_start = output_range[segment - 1];
            let out_end = output_range[segment];

            if in_end == in_start {
                return if value < in_start { out_start } else { out_end };
            }
            let fraction = (value - in_start) / (in_end - in_start);
            out_start.lerp(&out_end, fraction)
        }
    }
}
