use std::num::NonZeroUsize;

/// Horizontal distance between neighbouring slides, in pixels.
pub const SLIDE_SPACING_PX: f64 = 160.0;

/// Scale lost per slot of distance from the centre.
pub const SCALE_STEP: f64 = 0.1;

/// Stacking order of the active slide. Farther slides sit below it.
pub const BASE_Z_INDEX: i32 = 50;

/// Slides farther than this many slots from the centre are hidden.
pub const VISIBLE_RADIUS: u64 = 4;

/// Visual parameters of one slide relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideLayout {
    /// Shortest signed circular distance from the active slide.
    pub position: i64,
    pub translate_x: f64,
    pub scale: f64,
    pub z_index: i32,
    pub opacity: f64,
}

impl SlideLayout {
    pub fn is_active(&self) -> bool {
        self.position == 0
    }

    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }

    /// Inline CSS for the slide container.
    pub fn css(&self) -> String {
        format!(
            "transform: translateX({}px) scale({}); z-index: {}; opacity: {}; transition: all 0.8s ease;",
            self.translate_x, self.scale, self.z_index, self.opacity
        )
    }
}

/// Shortest signed circular distance from `active` to `index` on a ring of
/// `len` items. Both indices are taken modulo `len`.
///
/// Offsets beyond half the ring wrap to the other side, so items at both
/// edges of the list sit next to each other around the centre. On an even
/// ring the item exactly opposite keeps the sign of its unwrapped offset.
pub fn wrapped_position(index: usize, active: usize, len: NonZeroUsize) -> i64 {
    let total = len.get();
    let half = total / 2;
    let (index, active) = (index % total, active % total);

    if index >= active {
        let ahead = index - active;
        if ahead > half { -signed(total - ahead) } else { signed(ahead) }
    } else {
        let behind = active - index;
        if behind > half { signed(total - behind) } else { -signed(behind) }
    }
}

// Distances never exceed half the ring, which always fits in an i64.
fn signed(distance: usize) -> i64 {
    i64::try_from(distance).unwrap_or(i64::MAX)
}

/// Computes the transform for the slide at `index` while `active` is centred.
pub fn slide_layout(index: usize, active: usize, len: NonZeroUsize) -> SlideLayout {
    let position = wrapped_position(index, active, len);
    let distance = position.unsigned_abs();

    SlideLayout {
        position,
        translate_x: position as f64 * SLIDE_SPACING_PX,
        scale: 1.0 - distance as f64 * SCALE_STEP,
        z_index: BASE_Z_INDEX.saturating_sub(distance.min(i32::MAX as u64) as i32),
        opacity: if distance > VISIBLE_RADIUS { 0.0 } else { 1.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn n(len: usize) -> NonZeroUsize {
        NonZeroUsize::new(len).unwrap()
    }

    #[test]
    fn last_item_wraps_left_of_first() {
        assert_eq!(wrapped_position(17, 0, n(18)), -1);
        assert_eq!(wrapped_position(1, 0, n(18)), 1);
    }

    #[test]
    fn first_item_wraps_right_of_last() {
        assert_eq!(wrapped_position(0, 17, n(18)), 1);
    }

    #[test]
    fn single_item_is_always_centred() {
        let layout = slide_layout(0, 0, n(1));
        assert_eq!(layout.position, 0);
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.z_index, BASE_Z_INDEX);
        assert_eq!(layout.opacity, 1.0);
    }

    #[test]
    fn active_slide_layout() {
        let layout = slide_layout(5, 5, n(18));
        assert!(layout.is_active());
        assert_eq!(layout.translate_x, 0.0);
        assert_eq!(layout.z_index, 50);
        assert_eq!(
            layout.css(),
            "transform: translateX(0px) scale(1); z-index: 50; opacity: 1; transition: all 0.8s ease;"
        );
    }

    #[test]
    fn neighbours_shift_by_spacing_and_shrink() {
        let right = slide_layout(2, 0, n(18));
        assert_eq!(right.translate_x, 320.0);
        assert!((right.scale - 0.8).abs() < 1e-9);
        assert_eq!(right.z_index, 48);

        let left = slide_layout(16, 0, n(18));
        assert_eq!(left.position, -2);
        assert_eq!(left.translate_x, -320.0);
    }

    #[test]
    fn hard_opacity_cutoff_past_four_slots() {
        assert_eq!(slide_layout(4, 0, n(18)).opacity, 1.0);
        assert!(slide_layout(5, 0, n(18)).is_hidden());
        assert!(slide_layout(13, 0, n(18)).is_hidden());
        assert_eq!(slide_layout(14, 0, n(18)).opacity, 1.0);
    }

    #[test]
    fn even_ring_keeps_the_far_side_on_the_right() {
        // offset == half stays positive, -half stays negative
        assert_eq!(wrapped_position(2, 0, n(4)), 2);
        assert_eq!(wrapped_position(0, 2, n(4)), -2);
    }

    #[test]
    fn huge_ring_positions_do_not_truncate() {
        let ring = n(usize::MAX);
        assert_eq!(wrapped_position(usize::MAX - 1, 0, ring), -1);
        assert_eq!(wrapped_position(0, usize::MAX - 1, ring), 1);
        assert_eq!(wrapped_position(7, 3, ring), 4);
        assert!(slide_layout(usize::MAX / 2, 0, ring).is_hidden());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn position_within_half_ring(len in 1usize..64, seed in any::<(usize, usize)>()) {
            let ring = n(len);
            let active = seed.0 % len;
            let index = seed.1 % len;
            let half = (len / 2) as i64;
            let position = wrapped_position(index, active, ring);
            prop_assert!((-half..=half).contains(&position));
        }

        #[test]
        fn exactly_one_centred_item(len in 1usize..64, active_seed in any::<usize>()) {
            let ring = n(len);
            let active = active_seed % len;
            let centred = (0..len)
                .filter(|&i| wrapped_position(i, active, ring) == 0)
                .count();
            prop_assert_eq!(centred, 1);
        }

        #[test]
        fn opacity_zero_iff_beyond_radius(len in 1usize..64, seed in any::<(usize, usize)>()) {
            let ring = n(len);
            let layout = slide_layout(seed.1 % len, seed.0 % len, ring);
            prop_assert_eq!(layout.is_hidden(), layout.position.unsigned_abs() > VISIBLE_RADIUS);
        }

        #[test]
        fn scale_strictly_decreases_with_distance(len in 2usize..64, active_seed in any::<usize>()) {
            let ring = n(len);
            let active = active_seed % len;
            let mut by_distance: Vec<(u64, f64)> = (0..len)
                .map(|i| slide_layout(i, active, ring))
                .map(|l| (l.position.unsigned_abs(), l.scale))
                .collect();
            by_distance.sort_by_key(|(d, _)| *d);
            by_distance.dedup_by_key(|(d, _)| *d);
            for pair in by_distance.windows(2) {
                prop_assert!(pair[1].1 < pair[0].1);
            }
        }
    }
}
