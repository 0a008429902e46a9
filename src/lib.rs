//! Authenticated encryption under AES-GCM, following NIST SP 800-38D.
//!
//! Four key widths are available as distinct types: [`Aes128`], [`Aes192`],
//! [`Aes256`], and a non-standard [`Aes512`] extension obtained by
//! continuing the Rijndael key-schedule pattern past its standardized
//! widths (`Nr = Nk + 6`). The 512-bit variant has no external validation;
//! prefer a standard width unless you specifically need it.
//!
//! ```
//! use aes_gcm_wide::{AesGcm, Aes128};
//!
//! let key = [0x42u8; 16];
//! let iv = [0x24u8; 12];
//! let gcm = AesGcm::<Aes128>::new(&key).unwrap();
//!
//! let (ciphertext, tag) = gcm.encrypt(&iv, b"associated data", b"plaintext").unwrap();
//! let plaintext = gcm.decrypt(&iv, b"associated data", &ciphertext, &tag).unwrap();
//! assert_eq!(plaintext, b"plaintext");
//! ```
//!
//! This crate implements a single-shot, synchronous primitive only: no
//! streaming API, no tag lengths other than 128 bits, no nonce management.
//! Callers are responsible for IV uniqueness per key.

mod aes;
mod error;
mod gcm;

pub use aes::{Aes128, Aes192, Aes256, Aes512, KeySize};
pub use error::{Error, Result};
pub use gcm::AesGcm;
