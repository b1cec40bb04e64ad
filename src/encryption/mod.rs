//! Encryption schemes, symmetric and asymmetric.
//!
//! This module groups the encryption primitives of the crate:
//!
//! - `feal`
//!   A FEAL-style Feistel block cipher operating on 8-byte blocks with
//!   a configurable key size. The round structure and key schedule are
//!   an interoperability contract and are ported byte-for-byte from
//!   the reference construction.
//!
//! - `cbc`
//!   Cipher block chaining over any [`BlockCipher`], turning the fixed
//!   block primitive into a variable-length message cipher with
//!   padding and a caller-provided initialization vector.
//!
//! - `elgamal`
//!   EC-ElGamal public-key encryption of curve points, together with a
//!   minimal message-to-point encoding.
//!
//! The implementations are intentionally explicit and self-contained,
//! favoring clarity and auditability over abstraction. The only seam
//! is the [`BlockCipher`] trait, which decouples the chaining mode from
//! the block primitive beneath it.

pub mod cbc;
pub mod elgamal;
pub mod feal;

/// Errors produced by the symmetric primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The key length does not match the cipher's configured key size.
    InvalidKeySize,

    /// A block input (or the IV) is not exactly one block long.
    InvalidBlockLength,

    /// A ciphertext length is not a multiple of the block size.
    CiphertextNotAligned,

    /// The final padding byte is inconsistent with the message length
    /// or the block size.
    MalformedPadding,
}

/// A cipher that maps single fixed-size blocks under a symmetric key.
///
/// Implementations are deterministic and stateless: encrypting the same
/// block under the same key always yields the same output, and
/// `decrypt_block` inverts `encrypt_block` exactly.
pub trait BlockCipher {
    /// Block length in bytes.
    fn block_size(&self) -> usize;

    /// Encrypts exactly one block.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockLength`] if `block` is not
    /// exactly [`block_size`](Self::block_size) bytes, or
    /// [`CipherError::InvalidKeySize`] for a key of the wrong length.
    fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Decrypts exactly one block.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt_block`](Self::encrypt_block).
    fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError>;
}
