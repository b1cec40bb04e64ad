//! Cipher block chaining (CBC) mode.
//!
//! Wraps any [`BlockCipher`] into a variable-length message cipher.
//! Each plaintext block is XORed with the previous ciphertext block
//! (the IV for the first block) before encryption, so identical
//! plaintext blocks never produce identical ciphertext blocks under the
//! same key and IV.
//!
//! Messages are padded to a whole number of blocks before chaining:
//! `k` bytes of value `k` are appended, with `k` in `[1, blockSize]`.
//! A message that already fills its last block still receives one full
//! block of padding, so unpadding is always unambiguous.
//!
//! IVs must come from a cryptographically secure generator and must
//! never repeat under the same key; the generator is injected by the
//! caller.

use rand::{CryptoRng, RngCore};

use crate::encryption::{BlockCipher, CipherError};

/// CBC mode over a block cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cbc<C: BlockCipher> {
    cipher: C,
}

impl<C: BlockCipher> Cbc<C> {
    /// Wraps a block cipher in CBC mode.
    pub fn new(cipher: C) -> Self {
        Self { cipher }
    }

    /// Block length of the underlying cipher, in bytes.
    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// Generates a fresh IV of one block from the provided secure
    /// generator.
    ///
    /// A correct deployment never reuses an IV under the same key.
    pub fn generate_iv<R>(&self, rng: &mut R) -> Vec<u8>
    where
        R: RngCore + CryptoRng,
    {
        let mut iv = vec![0u8; self.block_size()];
        rng.fill_bytes(&mut iv);
        iv
    }

    /// Pads a message to a whole number of blocks.
    ///
    /// Appends `k` bytes each holding the value `k`, where
    /// `k = blockSize - (len mod blockSize)`; `k` is never zero, so the
    /// padded length always strictly exceeds the original length.
    pub fn pad(&self, message: &[u8]) -> Vec<u8> {
        let block_size = self.block_size();
        let pad_len = block_size - (message.len() % block_size);

        let mut padded = Vec::with_capacity(message.len() + pad_len);
        padded.extend_from_slice(message);
        padded.resize(message.len() + pad_len, pad_len as u8);
        padded
    }

    /// Strips the padding appended by [`pad`](Self::pad).
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedPadding`] if the input is empty,
    /// or the final byte is zero, exceeds the block size, or exceeds
    /// the message length.
    pub fn unpad(&self, padded: &[u8]) -> Result<Vec<u8>, CipherError> {
        let pad_len = match padded.last() {
            Some(&byte) => byte as usize,
            None => return Err(CipherError::MalformedPadding),
        };

        if pad_len == 0 || pad_len > self.block_size() || pad_len > padded.len() {
            return Err(CipherError::MalformedPadding);
        }

        Ok(padded[..padded.len() - pad_len].to_vec())
    }

    /// Encrypts a message of any length under `key` and `iv`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockLength`] if the IV is not
    /// exactly one block, and propagates key-size errors from the
    /// underlying cipher.
    pub fn encrypt(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.block_size();

        if iv.len() != block_size {
            return Err(CipherError::InvalidBlockLength);
        }

        let padded = self.pad(plaintext);
        let mut ciphertext = Vec::with_capacity(padded.len());
        let mut previous = iv.to_vec();

        for block in padded.chunks(block_size) {
            let chained = xor_bytes(block, &previous);
            let encrypted = self.cipher.encrypt_block(&chained, key)?;

            ciphertext.extend_from_slice(&encrypted);
            previous = encrypted;
        }

        Ok(ciphertext)
    }

    /// Decrypts a CBC ciphertext under `key` and `iv`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::CiphertextNotAligned`] if the ciphertext
    /// length is not a multiple of the block size,
    /// [`CipherError::InvalidBlockLength`] for a wrong-sized IV,
    /// [`CipherError::MalformedPadding`] if the recovered padding is
    /// inconsistent, and propagates key-size errors from the underlying
    /// cipher.
    pub fn decrypt(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.block_size();

        if iv.len() != block_size {
            return Err(CipherError::InvalidBlockLength);
        }

        if ciphertext.len() % block_size != 0 {
            return Err(CipherError::CiphertextNotAligned);
        }

        let mut padded = Vec::with_capacity(ciphertext.len());
        let mut previous = iv;

        for block in ciphertext.chunks(block_size) {
            let decrypted = self.cipher.decrypt_block(block, key)?;

            padded.extend_from_slice(&xor_bytes(&decrypted, previous));
            previous = block;
        }

        self.unpad(&padded)
    }
}

/// XORs two equal-length byte slices.
fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}
