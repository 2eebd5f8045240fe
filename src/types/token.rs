//! Random token generation
//!
//! Visitor IDs and ePass suffixes are short alphanumeric strings drawn
//! uniformly from `[0-9A-Za-z]`. Tokens are not checked for uniqueness.

use rand::{Rng, RngCore};
use std::fmt;

use super::config::tokens;
use super::identifiers::{EPass, VisitorId};

/// Alphabet used for every generated token
pub const ALPHANUMERIC: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generate a random alphanumeric token of `length` characters
///
/// Uses the thread-local entropy-seeded RNG, so every call is independent.
pub fn generate_token(length: usize) -> String {
    let mut rng = rand::thread_rng();
    token_from(&mut rng, length)
}

fn token_from<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}

/// Source of visitor IDs and ePasses
pub struct TokenGenerator {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for TokenGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGenerator").finish()
    }
}

impl TokenGenerator {
    /// Create a generator backed by the thread-local entropy RNG
    pub fn new() -> Self {
        Self { rng: Box::new(rand::thread_rng()) }
    }

    /// Create a generator with a specific seed for reproducible tokens
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self { rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)) }
    }

    /// Create a seeded generator when a seed is given, an entropy one otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate a random alphanumeric token of `length` characters
    pub fn token(&mut self, length: usize) -> String {
        token_from(&mut *self.rng, length)
    }

    /// Generate a fresh visitor ID
    pub fn visitor_id(&mut self) -> VisitorId {
        VisitorId::new(self.token(tokens::VISITOR_ID_LENGTH))
    }

    /// Generate a fresh ePass
    pub fn epass(&mut self) -> EPass {
        let suffix = self.token(tokens::EPASS_SUFFIX_LENGTH);
        EPass::from_suffix(&suffix)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}
