//! AES block cipher: key schedule and single-block encryption, generic over
//! key width, with a runtime-selected backend (AES-NI, ARMv8 crypto
//! extensions, or a portable scalar fallback).

mod consts;
mod soft;

#[cfg(test)]
mod tests;

use cfg_if::cfg_if;
use zeroize::Zeroizing;

cfg_if! {
    if #[cfg(all(target_arch = "x86_64", not(feature = "force-soft")))] {
        mod ni;
    } else if #[cfg(all(target_arch = "aarch64", not(feature = "force-soft")))] {
        mod armv8;
    }
}

/// Fixes the key width of an [`AesGcm`](crate::AesGcm) instantiation at
/// compile time, the way the teacher derives `nk`/`nr` from key length but
/// pinned to a type instead of validated at runtime.
pub trait KeySize: Copy {
    /// Key length in 32-bit words.
    const NK: usize;
    /// Number of cipher rounds.
    const NR: usize;
    /// Key length in bytes (`4 * NK`).
    const KEY_BYTES: usize = Self::NK * 4;
    /// Expanded round-key schedule length in bytes (`16 * (NR + 1)`).
    const SCHEDULE_BYTES: usize = 16 * (Self::NR + 1);
}

/// AES-128 (`Nk = 4`, `Nr = 10`).
#[derive(Debug, Clone, Copy)]
pub struct Aes128;
impl KeySize for Aes128 {
    const NK: usize = 4;
    const NR: usize = 10;
}

/// AES-192 (`Nk = 6`, `Nr = 12`).
#[derive(Debug, Clone, Copy)]
pub struct Aes192;
impl KeySize for Aes192 {
    const NK: usize = 6;
    const NR: usize = 12;
}

/// AES-256 (`Nk = 8`, `Nr = 14`).
#[derive(Debug, Clone, Copy)]
pub struct Aes256;
impl KeySize for Aes256 {
    const NK: usize = 8;
    const NR: usize = 14;
}

/// Non-standard 512-bit extension (`Nk = 16`, `Nr = Nk + 6 = 22`), obtained by
/// continuing the Rijndael key-schedule pattern past its standardized widths.
/// Unvalidated by NIST; provided because the primitive's spec explicitly
/// calls for it, not because it should be preferred over a standard width.
#[derive(Debug, Clone, Copy)]
pub struct Aes512;
impl KeySize for Aes512 {
    const NK: usize = 16;
    const NR: usize = 22;
}

/// Which block-cipher implementation a [`Cipher`] dispatches to. Resolved
/// once at construction from runtime CPU-feature detection, mirroring
/// `developer0116-block-ciphers__aes`'s `autodetect` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    Soft,
    #[cfg(all(target_arch = "x86_64", not(feature = "force-soft")))]
    Ni,
    #[cfg(all(target_arch = "aarch64", not(feature = "force-soft")))]
    Armv8,
}

impl Backend {
    fn detect() -> Self {
        #[cfg(all(target_arch = "x86_64", not(feature = "force-soft")))]
        {
            if std::is_x86_feature_detected!("aes") && std::is_x86_feature_detected!("sse2") {
                return Backend::Ni;
            }
        }
        #[cfg(all(target_arch = "aarch64", not(feature = "force-soft")))]
        {
            if std::arch::is_aarch64_feature_detected!("aes") {
                return Backend::Armv8;
            }
        }
        Backend::Soft
    }
}

/// An expanded AES key schedule plus the backend chosen to drive it.
///
/// `K::SCHEDULE_BYTES` bytes of round-key material are held in a
/// [`Zeroizing`] buffer so they are overwritten on drop, matching the
/// context-destruction requirement carried through from the primitive's
/// lifecycle invariants.
pub(crate) struct Cipher<K: KeySize> {
    round_keys: Zeroizing<Vec<u8>>,
    backend: Backend,
    _marker: core::marker::PhantomData<K>,
}

impl<K: KeySize> Cipher<K> {
    pub(crate) fn new(key: &[u8]) -> Result<Self, crate::Error> {
        if key.len() != K::KEY_BYTES {
            return Err(crate::Error::InvalidArgument(
                "key has wrong length for this key size",
            ));
        }
        let round_keys = Zeroizing::new(soft::expand_key(key, K::NK, K::NR));
        debug_assert_eq!(round_keys.len(), K::SCHEDULE_BYTES);
        Ok(Cipher {
            round_keys,
            backend: Backend::detect(),
            _marker: core::marker::PhantomData,
        })
    }

    /// Encrypt a single 16-byte block in place.
    pub(crate) fn encrypt_block(&self, block: &mut [u8; 16]) {
        match self.backend {
            Backend::Soft => soft::encrypt_block(block, &self.round_keys, K::NR),
            #[cfg(all(target_arch = "x86_64", not(feature = "force-soft")))]
            Backend::Ni => unsafe { ni::encrypt_block(block, &self.round_keys, K::NR) },
            #[cfg(all(target_arch = "aarch64", not(feature = "force-soft")))]
            Backend::Armv8 => unsafe { armv8::encrypt_block(block, &self.round_keys, K::NR) },
        }
    }
}
