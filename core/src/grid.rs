use crate::layout::SeededRandom;

// Polaroid frame geometry, in px.
pub const IMG_SIZE: f64 = 220.0;
pub const FRAME_PAD: f64 = 16.0;
pub const FRAME_PAD_BOTTOM: f64 = 48.0;
pub const CARD_W: f64 = IMG_SIZE + FRAME_PAD * 2.0;
pub const CARD_H: f64 = IMG_SIZE + FRAME_PAD + FRAME_PAD_BOTTOM;

pub const GAP: f64 = 20.0;
pub const GRID_TOP: f64 = 80.0;
pub const GRID_PADDING: f64 = 24.0;

pub const STACK_BREAKPOINT_PX: f64 = 768.0;
pub const STACK_TOP: f64 = 120.0;
pub const STACK_OVERLAP: f64 = 56.0;
const STACK_JITTER_X: f64 = 28.0;
const STACK_JITTER_DEG: f64 = 12.0;
const STACK_SEED: u32 = 0x57AC_C0DE;

// Position in px plus the rotation to settle at while pinned.
pub type Slot = (f64, f64, f64);

pub fn grid_columns(viewport_w: f64) -> usize {
    let cols = ((viewport_w - GRID_PADDING * 2.0 + GAP) / (CARD_W + GAP)).floor();
    (cols as isize).max(1) as usize
}

// Row-major packing, centered horizontally. An unmeasurable viewport
// yields no slots; callers fall back to the scatter placement.
pub fn grid_slots(count: usize, viewport_w: f64) -> Vec<Slot> {
    if count == 0 || viewport_w <= 0.0 {
        return Vec::new();
    }
    let cols = grid_columns(viewport_w);
    let total_w = cols as f64 * CARD_W + (cols - 1) as f64 * GAP;
    let start_x = (viewport_w - total_w) / 2.0;

    (0..count)
        .map(|i| {
            let col = (i % cols) as f64;
            let row = (i / cols) as f64;
            (
                start_x + col * (CARD_W + GAP),
                GRID_TOP + row * (CARD_H + GAP),
                0.0,
            )
        })
        .collect()
}

pub fn grid_content_height(count: usize, viewport_w: f64) -> f64 {
    if count == 0 || viewport_w <= 0.0 {
        return 0.0;
    }
    let cols = grid_columns(viewport_w);
    let rows = count.div_ceil(cols);
    GRID_TOP + rows as f64 * (CARD_H + GAP) + GRID_PADDING
}

// Overlapping deck with seeded per-index jitter, so the pile reads as
// hand-stacked but identically on every visit.
pub fn stack_slots(count: usize, viewport_w: f64) -> Vec<Slot> {
    if count == 0 || viewport_w <= 0.0 {
        return Vec::new();
    }
    let center_x = (viewport_w - CARD_W) / 2.0;
    let mut rand = SeededRandom::new(STACK_SEED);

    (0..count)
        .map(|i| {
            let jitter_x = (rand.next() - 0.5) * STACK_JITTER_X;
            let rotation = (rand.next() - 0.5) * STACK_JITTER_DEG;
            (
                center_x + jitter_x,
                STACK_TOP + i as f64 * STACK_OVERLAP,
                rotation,
            )
        })
        .collect()
}

pub fn stack_content_height(count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    STACK_TOP + (count - 1) as f64 * STACK_OVERLAP + CARD_H + GRID_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_has_a_floor_of_one() {
        assert_eq!(grid_columns(10.0), 1);
        assert_eq!(grid_columns(CARD_W + GRID_PADDING * 2.0), 1);
    }

    #[test]
    fn column_count_never_exceeds_viewport_capacity() {
        for vw in [320.0, 800.0, 1280.0, 1920.0, 3840.0] {
            let cap = (vw / (CARD_W + GAP)).floor().max(1.0) as usize;
            assert!(grid_columns(vw) <= cap, "vw={vw}");
        }
    }

    #[test]
    fn grid_slots_are_unique_and_non_overlapping() {
        let slots = grid_slots(23, 1280.0);
        assert_eq!(slots.len(), 23);
        for (i, a) in slots.iter().enumerate() {
            for b in slots.iter().skip(i + 1) {
                let apart_x = (a.0 - b.0).abs() >= CARD_W + GAP - 1e-9;
                let apart_y = (a.1 - b.1).abs() >= CARD_H + GAP - 1e-9;
                assert!(apart_x || apart_y);
            }
        }
    }

    #[test]
    fn grid_is_centered() {
        let vw = 1280.0;
        let slots = grid_slots(8, vw);
        let cols = grid_columns(vw);
        let left = slots[0].0;
        let right = slots[cols - 1].0 + CARD_W;
        assert!((left - (vw - right)).abs() < 1e-9);
    }

    #[test]
    fn unmeasured_viewport_yields_no_slots() {
        assert!(grid_slots(12, 0.0).is_empty());
        assert!(grid_slots(12, -1.0).is_empty());
        assert!(stack_slots(12, 0.0).is_empty());
        assert!(grid_slots(0, 1280.0).is_empty());
        assert_eq!(grid_content_height(0, 1280.0), 0.0);
    }

    #[test]
    fn grid_height_covers_all_rows() {
        let vw = 1280.0;
        let slots = grid_slots(23, vw);
        let lowest = slots.iter().map(|s| s.1).fold(0.0, f64::max);
        assert!(grid_content_height(23, vw) >= lowest + CARD_H);
    }

    #[test]
    fn stack_is_a_reproducible_overlapping_deck() {
        let first = stack_slots(9, 390.0);
        assert_eq!(first, stack_slots(9, 390.0));
        for pair in first.windows(2) {
            let dy = pair[1].1 - pair[0].1;
            assert_eq!(dy, STACK_OVERLAP);
            assert!(dy < CARD_H);
        }
        for slot in &first {
            assert!(slot.2.abs() <= STACK_JITTER_DEG / 2.0);
        }
        assert!(stack_content_height(9) >= first[8].1 + CARD_H);
    }
}
