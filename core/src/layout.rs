pub const LCG_MULTIPLIER: u64 = 16807;
pub const LCG_MODULUS: u64 = 2_147_483_647;

// UTF-16 code units, so the same name hashes identically at build time, in
// tests, and in the browser.
pub fn hash_string(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::new(hash_string(name))
    }

    pub fn next(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

pub const CARD_COLORS: [&str; 8] = [
    "#b08d6e", "#c4a67a", "#8c7a6b", "#a39080", "#c2a57a", "#9a8b78", "#bfa47d", "#a09382",
];

pub fn pick_color(name: &str) -> &'static str {
    CARD_COLORS[hash_string(name) as usize % CARD_COLORS.len()]
}

// x/y are viewport fractions, rotation is degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

pub fn photo_placement(filename: &str) -> Placement {
    let mut rand = SeededRandom::from_name(filename);
    let x = rand.next() * 0.7 + 0.05;
    let y = rand.next() * 0.6 + 0.05;
    let rotation = rand.next() * 24.0 - 12.0;
    Placement { x, y, rotation }
}

// Cards sit on a coarse cell grid with seeded jitter so the board stays
// readable at any gallery count.
pub fn card_placement(name: &str, index: usize, count: usize) -> Placement {
    let cols = count.clamp(1, 4);
    let rows = count.div_ceil(cols).max(1);
    let cell_w = 0.7 / cols as f64;
    let cell_h = 0.6 / rows as f64;

    let col = (index % cols) as f64;
    let row = (index / cols) as f64;
    let base_x = 0.1 + cell_w * col + cell_w / 2.0 - 0.08;
    let base_y = 0.15 + cell_h * row + cell_h / 2.0 - 0.09;

    let mut rand = SeededRandom::from_name(name);
    let jitter_x = (rand.next() - 0.5) * cell_w * 0.3;
    let jitter_y = (rand.next() - 0.5) * cell_h * 0.3;
    let rotation = rand.next() * 16.0 - 8.0;

    Placement {
        x: base_x + jitter_x,
        y: base_y + jitter_y,
        rotation,
    }
}

// Folder-card geometry, in px.
pub const FOLDER_W: f64 = 260.0;
pub const FOLDER_H: f64 = 190.0;
pub const TAB_W: f64 = 100.0;
pub const TAB_H: f64 = 24.0;

pub const PEEK_W: f64 = 76.0;
pub const PEEK_H: f64 = 94.0;
pub const PEEK_PAD: f64 = 5.0;
pub const PEEK_PAD_BOTTOM: f64 = 16.0;
pub const PEEK_COUNT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeekPlacement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

pub fn peek_placements(name: &str, available: usize) -> Vec<PeekPlacement> {
    let count = available.min(PEEK_COUNT);
    let mut rand = SeededRandom::new(hash_string(&format!("{name}peek")));
    let mut placements = Vec::with_capacity(count);
    for _ in 0..count {
        let x = 10.0 + rand.next() * (FOLDER_W - PEEK_W - 30.0);
        let y = TAB_H + 8.0 + rand.next() * (FOLDER_H - PEEK_H - TAB_H - 30.0);
        let rotation = (rand.next() - 0.5) * 20.0;
        placements.push(PeekPlacement { x, y, rotation });
    }
    placements
}

pub fn tab_offset(name: &str) -> f64 {
    let mut rand = SeededRandom::new(hash_string(&format!("{name}tab")));
    20.0 + rand.next() * (FOLDER_W - TAB_W - 40.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_and_nonnegative() {
        assert_eq!(hash_string(""), 0);
        assert_eq!(hash_string("a"), 97);
        assert_eq!(hash_string("ab"), 97 * 31 + 98);
        assert_eq!(hash_string("alps"), hash_string("alps"));
    }

    #[test]
    fn hash_survives_signed_overflow() {
        let long = "a-fairly-long-photo-filename-2024-07-19.jpeg";
        let h = hash_string(long);
        assert_eq!(h, hash_string(long));
        assert!(h <= i32::MIN.unsigned_abs());
    }

    #[test]
    fn seeded_random_emits_unit_interval() {
        let mut rand = SeededRandom::new(hash_string("winter"));
        for _ in 0..1000 {
            let value = rand.next();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn seeded_random_replays_identically() {
        let seed = hash_string("roadtrip");
        let mut first = SeededRandom::new(seed);
        let mut second = SeededRandom::new(seed);
        for _ in 0..64 {
            assert_eq!(first.next(), second.next());
        }
    }

    #[test]
    fn zero_seed_stays_zero() {
        let mut rand = SeededRandom::new(0);
        assert_eq!(rand.next(), 0.0);
        assert_eq!(rand.next(), 0.0);
    }

    #[test]
    fn pick_color_is_stable_and_in_palette() {
        for name in ["alps", "tokyo", "", "2024-01"] {
            let color = pick_color(name);
            assert_eq!(color, pick_color(name));
            assert!(CARD_COLORS.contains(&color));
        }
    }

    #[test]
    fn photo_placement_is_pure_and_in_range() {
        let a = photo_placement("a.png");
        assert_eq!(a, photo_placement("a.png"));
        assert!((0.05..0.75).contains(&a.x));
        assert!((0.05..0.65).contains(&a.y));
        assert!((-12.0..12.0).contains(&a.rotation));
    }

    #[test]
    fn card_placement_depends_only_on_name_and_cell() {
        let a = card_placement("alps", 0, 3);
        assert_eq!(a, card_placement("alps", 0, 3));
        let b = card_placement("alps", 1, 3);
        assert_ne!(a, b);
        assert!((-8.0..8.0).contains(&a.rotation));
    }

    #[test]
    fn peeks_fit_the_folder() {
        let peeks = peek_placements("alps", 10);
        assert_eq!(peeks.len(), PEEK_COUNT);
        for peek in &peeks {
            assert!(peek.x >= 10.0 && peek.x + PEEK_W <= FOLDER_W - 20.0);
            assert!(peek.y >= TAB_H + 8.0);
            assert!((-10.0..10.0).contains(&peek.rotation));
        }
        assert_eq!(peek_placements("alps", 2).len(), 2);
        assert!(peek_placements("alps", 0).is_empty());
    }

    #[test]
    fn tab_offset_leaves_margins() {
        for name in ["alps", "tokyo", "sea"] {
            let offset = tab_offset(name);
            assert!(offset >= 20.0);
            assert!(offset + TAB_W <= FOLDER_W - 20.0);
        }
    }
}
