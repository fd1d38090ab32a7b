//! Seeded PRNG behind every "deterministic output" promise in the product:
//! same seed string, same stream, same listing. The hash and the stream
//! transform are frozen; changing either silently changes every listing we
//! have ever shown a user, so treat them as versioned wire format.

/// Fold a seed string into a 32-bit seed. Polynomial hash over UTF-16 code
/// units (h = h*31 + unit, wrapping at 32 bits), absolute value, and 0 maps
/// to 1 because the stream must never start from an all-zero state.
pub fn hash_seed(s: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in s.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(unit as i32);
    }
    let h = h.unsigned_abs();
    if h == 0 { 1 } else { h }
}

/// Mulberry32 stream. One instance per request; never shared across seeds.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u32,
}

// Keeps the value strictly below 1.0 after the /2^32 normalization.
const BELOW_ONE: f64 = 0.999_999_940_395_355_2;

impl SeededStream {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_str(seed: &str) -> Self {
        Self::new(hash_seed(seed))
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(s | 1);
        t = (t ^ t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61))) ^ (t >> 14);
        (t as f64 / 4_294_967_296.0) * BELOW_ONE
    }

    /// Uniform index into a pool of `len` items. `len` must be > 0.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick_index on empty pool");
        (self.next_f64() * len as f64) as usize
    }

    /// Uniform pick from a non-empty pool.
    pub fn pick<'a, T>(&mut self, pool: &'a [T]) -> &'a T {
        &pool[self.pick_index(pool.len())]
    }

    /// Integer in [lo, lo + span), i.e. `lo + floor(next * span)`.
    pub fn pick_range(&mut self, lo: u32, span: u32) -> u32 {
        lo + (self.next_f64() * span as f64) as u32
    }

    /// Seeded Fisher-Yates. The original JS shuffled via
    /// `sort(() => rand() - 0.5)`, which is biased; this keeps determinism
    /// without the bias. Callers must not depend on the exact permutation.
    pub fn shuffle<T>(&mut self, xs: &mut [T]) {
        for i in (1..xs.len()).rev() {
            let j = self.pick_index(i + 1);
            xs.swap(i, j);
        }
    }

    /// Shuffle a copy of `pool` and take the first `n` entries.
    pub fn sample<T: Clone>(&mut self, pool: &[T], n: usize) -> Vec<T> {
        let mut copy: Vec<T> = pool.to_vec();
        self.shuffle(&mut copy);
        copy.truncate(n);
        copy
    }

    /// `len` base-36 digits drawn from the stream, for synthetic filler ids.
    pub fn base36(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| {
                let d = (self.next_f64() * 36.0) as u32;
                char::from_digit(d.min(35), 36).unwrap_or('0')
            })
            .collect()
    }
}
