//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG backing every stochastic decision.
//! Uses a simple but effective xorshift algorithm.
//!
//! Each match owns its own generator; sharing one across concurrently
//! running matches would break per-match reproducibility.

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and a stream index
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        // Combine seed bytes into initial state
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        // Mix in the stream index
        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Uniform draw in [0, 1) using the top 53 bits
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Bernoulli draw: true with probability `p`
    ///
    /// Draws lie in [0, 1), so p = 1 always holds and p = 0 never does.
    pub fn next_bool(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
