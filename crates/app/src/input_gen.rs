//! Sample text generation for demos.
//!
//! When `--sample N` is given we generate text that exercises every path
//! through the encoder:
//! - Plain words (table letters, mixed case)
//! - Digits and punctuation
//! - Accented Latin letters (2-digit escapes)
//! - CJK characters (4-digit escapes)
//! - Emoji (8-digit escapes)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WORDS: &[&str] = &[
    "morse", "Signal", "code", "relay", "STATION", "copy", "over", "roger", "net", "QRZ",
];
const PUNCTUATION: &[char] = &['.', ',', '?', '!', ':', ';', '/', '(', ')', '@', '+', '='];
const ACCENTED: &[char] = &['é', 'ü', 'ñ', 'ø', 'å', 'ç'];
const CJK: &[char] = &['你', '好', '世', '界', '电', '码'];
const EMOJI: &[char] = &['😀', '📡', '🦀', '🔔'];

/// Generate `words` space-separated sample words.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `words`: number of words to generate
pub fn generate_sample_text(seed: u64, words: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut parts = Vec::with_capacity(words);

    for _ in 0..words {
        let word_type: u8 = rng.gen_range(0..10);

        let word = match word_type {
            // 50% plain words
            0..=4 => {
                let mut word = WORDS[rng.gen_range(0..WORDS.len())].to_string();
                if rng.gen_bool(0.3) {
                    word.push(pick(&mut rng, PUNCTUATION));
                }
                word
            }

            // 10% numbers
            5 => rng.gen_range(0..100_000u32).to_string(),

            // 20% accented
            6..=7 => {
                let mut word = WORDS[rng.gen_range(0..WORDS.len())].to_string();
                word.insert(0, pick(&mut rng, ACCENTED));
                word
            }

            // 10% CJK
            8 => (0..rng.gen_range(1..=3))
                .map(|_| pick(&mut rng, CJK))
                .collect::<String>(),

            // 10% emoji
            _ => pick(&mut rng, EMOJI).to_string(),
        };

        parts.push(word);
    }

    parts.join(" ")
}

fn pick(rng: &mut ChaCha8Rng, set: &[char]) -> char {
    set[rng.gen_range(0..set.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_text() {
        let text = generate_sample_text(42, 20);
        assert_eq!(text.split(' ').count(), 20);
    }

    #[test]
    fn test_determinism() {
        let a = generate_sample_text(12345, 50);
        let b = generate_sample_text(12345, 50);

        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds() {
        let a = generate_sample_text(1, 50);
        let b = generate_sample_text(2, 50);

        assert_ne!(a, b);
    }

    #[test]
    fn test_zero_words() {
        assert_eq!(generate_sample_text(999, 0), "");
    }

    #[test]
    fn test_sample_round_trips() {
        use unimorse_core::Transcoder;

        let text = generate_sample_text(7, 200);
        let transcoder = Transcoder::default();
        let decoded = transcoder.decode(&transcoder.encode(&text));

        // Only ASCII letters change case; escaped characters come back as-is.
        let expected: String = text.chars().map(|c| c.to_ascii_uppercase()).collect();
        assert_eq!(decoded, expected);
    }
}
