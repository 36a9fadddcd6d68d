use ahash::{AHasher, RandomState};
use std::collections::HashSet;
use std::hash::{BuildHasher, Hasher};

/// Sets of vertex or edge IDs handed out by queries.
pub type IdSet<T> = HashSet<T, RandomState>;

const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// The default builder of hashers turning payloads into IDs.
///
/// Unlike `ahash::RandomState::new()`, it is seeded with constants,
/// so equal payloads get equal IDs in every graph of a program.
#[derive(Clone)]
pub struct IdState(RandomState);

impl Default for IdState {
    fn default() -> Self {
        Self(RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]))
    }
}

impl BuildHasher for IdState {
    type Hasher = AHasher;

    fn build_hasher(&self) -> AHasher {
        self.0.build_hasher()
    }
}

impl std::fmt::Debug for IdState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IdState")
    }
}

/// A builder of hashers passing integers through unchanged.
///
/// Payloads whose `Hash` writes a single integer, such as `u64` or
/// [DefaultEdge](crate::graph::DefaultEdge), get that integer as their ID.
/// Other writes are folded into the state byte by byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityState;

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHasher(u64);

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.0 = self.0.rotate_left(8) ^ u64::from(*b);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.0 = u64::from(i);
    }

    fn write_u16(&mut self, i: u16) {
        self.0 = u64::from(i);
    }

    fn write_u32(&mut self, i: u32) {
        self.0 = u64::from(i);
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    fn write_usize(&mut self, i: usize) {
        self.0 = i as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn deterministic(x: String) {
        let a = IdState::default().hash_one(&x);
        let b = IdState::default().hash_one(&x);
        assert_eq!(a, b);
    }

    #[quickcheck]
    fn identity_passes_integers_through(x: u64, y: u32) {
        assert_eq!(IdentityState.hash_one(x), x);
        assert_eq!(IdentityState.hash_one(y), u64::from(y));
    }

    #[test]
    fn distinguishes() {
        let s = IdState::default();
        assert_ne!(s.hash_one("A"), s.hash_one("B"));
    }
}
