//! Height-to-color-band assignment

use crate::terrain::config::ColorBand;

/// Color used when a band index has no backing entry (empty band list).
pub const DEFAULT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];

/// Band index for `height`: the *last* entry in list order whose threshold
/// is strictly exceeded, or 0 when none is (or the list is empty).
///
/// The scan keeps overwriting, so list order (not threshold magnitude)
/// resolves overlaps in a non-monotonic list. Callers rely on this exact
/// behavior.
pub fn band_index(bands: &[ColorBand], height: f32) -> usize {
    let mut index = 0;
    for (i, band) in bands.iter().enumerate() {
        if height > band.threshold {
            index = i;
        }
    }
    index
}

/// Color for a band index, falling back to [`DEFAULT_COLOR`] when the list
/// has no such entry.
pub fn band_color(bands: &[ColorBand], index: usize) -> [f32; 3] {
    bands.get(index).map(|band| band.color).unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f32; 3] = [1.0, 0.0, 0.0];
    const B: [f32; 3] = [0.0, 0.0, 1.0];

    #[test]
    fn test_ascending_thresholds() {
        let bands = [ColorBand::new(0.2, A), ColorBand::new(0.6, B)];
        assert_eq!(band_index(&bands, 0.7), 1);
        assert_eq!(band_index(&bands, 0.4), 0);
        assert_eq!(band_index(&bands, 0.1), 0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let bands = [ColorBand::new(0.2, A), ColorBand::new(0.6, B)];
        assert_eq!(band_index(&bands, 0.6), 0);
        assert_eq!(band_index(&bands, 0.2), 0);
    }

    #[test]
    fn test_non_monotonic_list_order_wins() {
        // Thresholds deliberately out of order: both match at 0.6, and the
        // later list position wins even though its threshold is smaller.
        let bands = [ColorBand::new(0.5, A), ColorBand::new(0.1, B)];
        assert_eq!(band_index(&bands, 0.6), 1);
        assert_eq!(band_index(&bands, 0.3), 1);
        assert_eq!(band_index(&bands, 0.05), 0);
    }

    #[test]
    fn test_empty_band_list() {
        assert_eq!(band_index(&[], 0.7), 0);
        assert_eq!(band_color(&[], 0), DEFAULT_COLOR);
    }

    #[test]
    fn test_band_color_lookup() {
        let bands = [ColorBand::new(0.2, A), ColorBand::new(0.6, B)];
        assert_eq!(band_color(&bands, 1), B);
        assert_eq!(band_color(&bands, 5), DEFAULT_COLOR);
    }
}
