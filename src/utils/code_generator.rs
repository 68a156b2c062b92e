//! Short code generation.

use rand::Rng;

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Alphabet for generated codes: `[a-zA-Z0-9]`, 62 characters.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random 6-character short code.
///
/// Each character is drawn uniformly from the 62-character alphanumeric
/// alphabet. Makes no uniqueness guarantee; the store enforces uniqueness at
/// insertion and a colliding generated code is surfaced as a conflict rather
/// than retried.
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_is_reinvocable() {
        let codes: Vec<String> = (0..1000).map(|_| generate_code()).collect();
        assert!(codes.iter().all(|c| c.len() == CODE_LENGTH));
    }

    #[test]
    fn test_generate_code_rarely_collides() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        // 62^6 possible codes; 1000 draws colliding would indicate a broken RNG.
        assert!(codes.len() > 990);
    }
}
