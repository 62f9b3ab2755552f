use rand::{Rng, distr::Distribution};

/// Symbols a generated string is drawn from, in index order.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyz\
                                  ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  0123456789";

/// Samples a single symbol of [`ALPHABET`] uniformly.
///
/// Each draw takes the top 6 bits of a `u32` and retries when they land on
/// 62 or 63, so no index is favoured over another.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alphabet;

impl Distribution<u8> for Alphabet {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        loop {
            let idx = (rng.next_u32() >> (32 - 6)) as usize;
            if idx < ALPHABET.len() {
                return ALPHABET[idx];
            }
        }
    }
}

impl Distribution<char> for Alphabet {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        char::from(<Self as Distribution<u8>>::sample(self, rng))
    }
}

pub fn contains(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(&(c as u8))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::{CryptoRng, RngCore};

    /// Replays a fixed list of words, wrapping around at the end.
    pub(crate) struct ScriptedRng {
        words: Vec<u32>,
        pos: usize,
    }

    impl ScriptedRng {
        pub(crate) fn new(words: Vec<u32>) -> Self {
            Self { words, pos: 0 }
        }

        pub(crate) fn consumed(&self) -> usize {
            self.pos
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let word = self.words[self.pos % self.words.len()];
            self.pos += 1;
            word
        }

        fn next_u64(&mut self) -> u64 {
            (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(4) {
                let word = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&word[..chunk.len()]);
            }
        }
    }

    impl CryptoRng for ScriptedRng {}

    fn index_word(idx: u32) -> u32 {
        idx << 26
    }

    #[test]
    fn alphabet_layout() {
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(ALPHABET[0], b'a');
        assert_eq!(ALPHABET[26], b'A');
        assert_eq!(ALPHABET[52], b'0');
        assert_eq!(ALPHABET[61], b'9');
        assert!(ALPHABET.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn picks_symbol_at_drawn_index() {
        let mut rng = ScriptedRng::new(vec![index_word(0), index_word(27), index_word(61)]);
        let drawn: Vec<char> = (0..3).map(|_| rng.sample(Alphabet)).collect();
        assert_eq!(drawn, vec!['a', 'B', '9']);
    }

    #[test]
    fn low_bits_do_not_affect_the_index() {
        let mut rng = ScriptedRng::new(vec![index_word(3) | 0x03ff_ffff]);
        let c: char = rng.sample(Alphabet);
        assert_eq!(c, 'd');
    }

    #[test]
    fn out_of_range_draws_are_rejected() {
        let mut rng = ScriptedRng::new(vec![index_word(63), index_word(62), index_word(1)]);
        let c: char = rng.sample(Alphabet);
        assert_eq!(c, 'b');
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn membership() {
        assert!(contains('q'));
        assert!(contains('Z'));
        assert!(contains('0'));
        assert!(!contains('-'));
        assert!(!contains(' '));
        assert!(!contains('é'));
    }
}
