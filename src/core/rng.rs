//! Seeded randomness.
//!
//! A game draws random numbers for three things: the board shuffle, the stamp
//! color assignment, and the random opponent's picks. Each draws from its own
//! named stream derived from `GameConfig::seed`, so a seed fully determines a
//! game and an extra draw in one stream never shifts another.
//!
//! Streams are keyed by laying the seed and the context name directly into
//! the 32-byte ChaCha key, with no std hasher involved. The same seed gives
//! the same game on every toolchain and platform. Context names are short
//! labels; bytes past the 24th wrap around and are folded in with XOR.
//!
//! ```
//! use stomple::core::GameRng;
//!
//! let root = GameRng::new(42);
//! let mut board = root.for_context("board");
//! let mut stamps = root.for_context("stamps");
//!
//! let mut a: Vec<u32> = (0..20).collect();
//! let mut b = a.clone();
//! board.shuffle(&mut a);
//! stamps.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

type Key = <ChaCha8Rng as SeedableRng>::Seed;

/// Bytes of the key reserved for the seed; the rest carries the context.
const SEED_BYTES: usize = 8;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    key: Key,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut key = Key::default();
        key[..SEED_BYTES].copy_from_slice(&seed.to_le_bytes());
        Self::from_key(key)
    }

    fn from_key(key: Key) -> Self {
        Self {
            inner: ChaCha8Rng::from_seed(key),
            key,
        }
    }

    /// Independent stream for a named purpose. Same seed and name, same stream.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut key = self.key;
        let span = key.len() - SEED_BYTES;
        for (i, byte) in context.bytes().enumerate() {
            key[SEED_BYTES + i % span] ^= byte;
        }
        // Length keeps names differing only by trailing NUL bytes apart.
        key[SEED_BYTES] ^= context.len() as u8;
        Self::from_key(key)
    }

    /// Uniform in-place shuffle.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick. `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..49).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        assert_eq!(shuffled(&mut a), shuffled(&mut b));
        assert_eq!(shuffled(&mut a), shuffled(&mut b));
    }

    #[test]
    fn test_context_streams() {
        let root = GameRng::new(42);
        let board = shuffled(&mut root.for_context("board"));

        assert_eq!(board, shuffled(&mut GameRng::new(42).for_context("board")));
        assert_ne!(board, shuffled(&mut root.for_context("stamps")));
        assert_ne!(board, shuffled(&mut GameRng::new(43).for_context("board")));
    }

    #[test]
    fn test_context_key_layout() {
        // Pins the key derivation: seed bytes first, then the name.
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&42u64.to_le_bytes());
        key[8..13].copy_from_slice(b"board");
        key[8] ^= 5;

        let mut expected = ChaCha8Rng::from_seed(key);
        let mut data: Vec<u32> = (0..49).collect();
        data.shuffle(&mut expected);

        assert_eq!(shuffled(&mut GameRng::new(42).for_context("board")), data);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut data = shuffled(&mut GameRng::new(7));
        assert_ne!(data, (0..49).collect::<Vec<_>>());
        data.sort_unstable();
        assert_eq!(data, (0..49).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [3, 5, 7];
        for _ in 0..20 {
            assert!(rng.choose(&items).is_some_and(|c| items.contains(c)));
        }

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
