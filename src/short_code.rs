//! Short code generation
//!
//! Codes are drawn uniformly from an alphabet of ASCII letters and digits
//! with the visually ambiguous glyphs (`0`, `O`, `l`, `I`, `1`) removed.
//! Generators know nothing about which codes are taken; collision handling
//! belongs to the store.

/// Length of every generated short code
pub const SHORT_CODE_LENGTH: usize = 6;

/// `2-9`, `a-k`, `m-z`, `A-H`, `J-N`, `P-Z`
pub const SHORT_CODE_ALPHABET: &[u8] =
    b"23456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Source of candidate short codes
pub trait CodeGenerator: Send + Sync {
    /// Produce a candidate code. Must not fail and must be callable from
    /// many tasks at once.
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        (0..SHORT_CODE_LENGTH)
            .map(|_| SHORT_CODE_ALPHABET[rand::random_range(0..SHORT_CODE_ALPHABET.len())] as char)
            .collect()
    }
}

/// Whether `code` has the shape of a generated code.
///
/// Only used for log context; lookups never reject a code on format.
pub fn is_code_alphabet(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| SHORT_CODE_ALPHABET.contains(&b))
}
