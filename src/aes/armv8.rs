//! ARMv8 Cryptography Extensions accelerated block encryption (aarch64).
//!
//! The `AESE`/`AESMC` pair implements one AES round each, but `AESE` also
//! performs AddRoundKey with the *next* round key baked in before SubBytes,
//! which shifts the round-key indexing relative to the textbook cipher: see
//! the per-round comment below.

use core::arch::aarch64::*;

/// # Safety
///
/// Caller must have verified `is_aarch64_feature_detected!("aes")` before
/// calling this function, and `round_keys` must hold at least
/// `16 * (nr + 1)` bytes.
#[target_feature(enable = "aes")]
pub(super) unsafe fn encrypt_block(block: &mut [u8; 16], round_keys: &[u8], nr: usize) {
    let load = |i: usize| vld1q_u8(round_keys[i * 16..].as_ptr());

    let mut state = vld1q_u8(block.as_ptr());
    // AESE xors in the round key, then applies ShiftRows+SubBytes; AESMC is
    // MixColumns. Run nr-1 full rounds this way, each consuming round key
    // `round`, then finish with the final-round AddRoundKey using key `nr-1`
    // folded into the last AESE, followed by the true final key `nr`.
    for round in 0..nr - 1 {
        state = vaeseq_u8(state, load(round));
        state = vaesmcq_u8(state);
    }
    state = vaeseq_u8(state, load(nr - 1));
    state = veorq_u8(state, load(nr));

    vst1q_u8(block.as_mut_ptr(), state);
}
