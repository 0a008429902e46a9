//! AES-NI accelerated block encryption (x86_64).
//!
//! Each round key is 16 bytes regardless of key width, so the same
//! `AESENC`/`AESENCLAST` sequence generalizes from AES-128's 10 rounds up
//! through the non-standard 512-bit variant's 22 rounds — only the round
//! count changes.

use core::arch::x86_64::*;

/// # Safety
///
/// Caller must have verified `is_x86_feature_detected!("aes")` and
/// `is_x86_feature_detected!("sse2")` before calling this function, and
/// `round_keys` must hold at least `16 * (nr + 1)` bytes.
#[target_feature(enable = "aes,sse2")]
pub(super) unsafe fn encrypt_block(block: &mut [u8; 16], round_keys: &[u8], nr: usize) {
    let load = |i: usize| _mm_loadu_si128(round_keys[i * 16..].as_ptr() as *const __m128i);

    let mut state = _mm_loadu_si128(block.as_ptr() as *const __m128i);
    state = _mm_xor_si128(state, load(0));
    for round in 1..nr {
        state = _mm_aesenc_si128(state, load(round));
    }
    state = _mm_aesenclast_si128(state, load(nr));

    _mm_storeu_si128(block.as_mut_ptr() as *mut __m128i, state);
}
