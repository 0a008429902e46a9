//! The GCM authenticated-encryption construction (NIST SP 800-38D) built on
//! top of the AES block cipher in [`crate::aes`].

mod ghash;


use crate::aes::{Cipher, KeySize};
use crate::error::{Error, Result};
use ghash::GHash;
use subtle::ConstantTimeEq;

const BLOCK_LEN: usize = 16;
const TAG_LEN: usize = 16;

/// Maximum plaintext length in bytes, `(2^39 - 256) / 8`, per SP 800-38D
/// §5.2.1.1's bound on the number of invocations of the forward cipher
/// function for a single (key, IV) pair.
const MAX_PLAINTEXT_LEN: usize = (1usize << 36) - 32;

/// An AES-GCM cipher context for a fixed key and key width `K`.
///
/// Owns the expanded round-key schedule (zeroized on drop, via
/// [`Cipher`]) and the GHASH subkey `H`, both derived once at construction
/// so that `encrypt`/`decrypt` never re-run the key schedule.
pub struct AesGcm<K: KeySize> {
    cipher: Cipher<K>,
    h: [u8; 16],
}

impl<K: KeySize> AesGcm<K> {
    /// Construct a new context from a `K::KEY_BYTES`-byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        let cipher = Cipher::<K>::new(key)?;
        let mut h = [0u8; 16];
        cipher.encrypt_block(&mut h);
        Ok(AesGcm { cipher, h })
    }

    /// Encrypt `plaintext` under `iv` with associated data `aad`,
    /// returning the ciphertext (same length as `plaintext`) and a 16-byte
    /// authentication tag.
    pub fn encrypt(&self, iv: &[u8], aad: &[u8], plaintext: &[u8]) -> Result<(Vec<u8>, [u8; 16])> {
        if iv.is_empty() {
            return Err(Error::InvalidArgument("IV must not be empty"));
        }
        if plaintext.len() > MAX_PLAINTEXT_LEN {
            return Err(Error::InvalidArgument(
                "plaintext exceeds the GCM length limit of 2^39 - 256 bits",
            ));
        }

        let j0 = self.derive_j0(iv);

        let mut ciphertext = vec![0u8; plaintext.len()];
        self.ctr_xor(&j0, plaintext, &mut ciphertext);

        let tag = self.compute_tag(&j0, aad, &ciphertext);

        Ok((ciphertext, tag))
    }

    /// Decrypt `ciphertext` under `iv`/`aad`, verifying `tag` in constant
    /// time. Returns [`Error::AuthFailure`] without producing any
    /// plaintext if the tag does not match.
    pub fn decrypt(
        &self,
        iv: &[u8],
        aad: &[u8],
        ciphertext: &[u8],
        tag: &[u8; 16],
    ) -> Result<Vec<u8>> {
        if iv.is_empty() {
            return Err(Error::InvalidArgument("IV must not be empty"));
        }
        if ciphertext.len() > MAX_PLAINTEXT_LEN {
            return Err(Error::InvalidArgument(
                "ciphertext exceeds the GCM length limit of 2^39 - 256 bits",
            ));
        }

        let j0 = self.derive_j0(iv);
        let expected_tag = self.compute_tag(&j0, aad, ciphertext);

        if !constant_time_eq(&expected_tag, tag) {
            return Err(Error::AuthFailure);
        }

        let mut plaintext = vec![0u8; ciphertext.len()];
        self.ctr_xor(&j0, ciphertext, &mut plaintext);
        Ok(plaintext)
    }

    /// Derive the pre-counter block `J0` from the IV (SP 800-38D §7.1).
    ///
    /// The 96-bit IV case is the fast path mandated by the standard: `J0 =
    /// IV || 0^31 || 1`, no GHASH pass needed. Any other IV length goes
    /// through the general GHASH-based derivation, padding the IV to a
    /// block boundary and appending its bit length.
    fn derive_j0(&self, iv: &[u8]) -> [u8; 16] {
        if iv.len() == 12 {
            let mut j0 = [0u8; 16];
            j0[..12].copy_from_slice(iv);
            j0[15] = 1;
            return j0;
        }

        let mut ghash = GHash::new(self.h);
        ghash.update(iv);
        let mut len_block = [0u8; 16];
        len_block[8..16].copy_from_slice(&((iv.len() as u64) * 8).to_be_bytes());
        ghash.update_block(&len_block);
        ghash.finalize()
    }

    /// Apply the CTR keystream starting from `inc32(j0)` to `input`,
    /// writing into `output` (may alias `input` in place, same length).
    fn ctr_xor(&self, j0: &[u8; 16], input: &[u8], output: &mut [u8]) {
        let mut counter = *j0;
        inc32(&mut counter);

        for (in_chunk, out_chunk) in input.chunks(BLOCK_LEN).zip(output.chunks_mut(BLOCK_LEN)) {
            let mut keystream = counter;
            self.cipher.encrypt_block(&mut keystream);
            for (o, (i, k)) in out_chunk.iter_mut().zip(in_chunk.iter().zip(keystream.iter())) {
                *o = i ^ k;
            }
            inc32(&mut counter);
        }
    }

    /// Compute the authentication tag `GHASH(A || C || len(A) || len(C)) XOR
    /// E(K, J0)`. AAD and ciphertext are each hashed with independent
    /// zero-padding to a block boundary, not concatenated raw, matching the
    /// GCM authenticated-data construction.
    fn compute_tag(&self, j0: &[u8; 16], aad: &[u8], ciphertext: &[u8]) -> [u8; 16] {
        let mut ghash = GHash::new(self.h);
        ghash.update(aad);
        ghash.update(ciphertext);

        let mut len_block = [0u8; 16];
        len_block[0..8].copy_from_slice(&((aad.len() as u64) * 8).to_be_bytes());
        len_block[8..16].copy_from_slice(&((ciphertext.len() as u64) * 8).to_be_bytes());
        ghash.update_block(&len_block);

        let s = ghash.finalize();

        let mut ek0 = *j0;
        self.cipher.encrypt_block(&mut ek0);

        let mut tag = [0u8; TAG_LEN];
        for i in 0..TAG_LEN {
            tag[i] = s[i] ^ ek0[i];
        }
        tag
    }
}

/// Increment the low 32 bits of a counter block (big-endian), wrapping
/// without carrying into the preceding bytes, per SP 800-38D's `inc32`.
fn inc32(block: &mut [u8; 16]) {
    let counter = u32::from_be_bytes(block[12..16].try_into().unwrap());
    block[12..16].copy_from_slice(&counter.wrapping_add(1).to_be_bytes());
}

/// Compare two tags in constant time: a manual full-length XOR-accumulate
/// loop (so the number of byte operations never depends on where the tags
/// first differ) composed with [`subtle::ConstantTimeEq`] for the final
/// comparison, rather than `==`.
fn constant_time_eq(a: &[u8; 16], b: &[u8; 16]) -> bool {
    let mut acc = 0u8;
    for i in 0..16 {
        acc |= a[i] ^ b[i];
    }
    [acc].ct_eq(&[0u8]).into()
}
