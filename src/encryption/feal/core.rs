//! FEAL core: key schedule, round function, block transforms.
//!
//! The cipher splits each 8-byte block into two 4-byte halves and runs
//! them through eight Feistel rounds. Each round XORs the left half
//! with the round function of the right half and a 4-byte subkey, then
//! swaps the halves; decryption is the same network with the subkeys
//! applied in reverse order, so no inverse round function exists or is
//! needed.
//!
//! The round function mixes its input through the two FEAL S-boxes,
//! `S0(a, b) = rotl8(a + b, 2)` and `S1(a, b) = rotl8(a + b, 4)`, in a
//! fixed, order-sensitive dependency graph. Do not reorder these
//! operations: every byte of the output depends on the exact sequence.

use crate::encryption::{BlockCipher, CipherError};

/// Block length in bytes (64-bit blocks).
pub const BLOCK_SIZE: usize = 8;

/// Number of Feistel rounds.
const NUM_ROUNDS: usize = 8;

/// Half-block length in bytes.
const HALF_SIZE: usize = 4;

/// FEAL-style block cipher with a configurable key size.
///
/// The key size is fixed in bits at construction; every call validates
/// the supplied key against it. Subkeys are re-derived on each block
/// operation, so the cipher itself holds no key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feal {
    key_size_bits: usize,
}

impl Feal {
    /// Creates a cipher with the standard 64-bit key size.
    pub fn new() -> Self {
        Self::with_key_size(64)
    }

    /// Creates a cipher expecting keys of `key_size_bits` bits.
    pub fn with_key_size(key_size_bits: usize) -> Self {
        Self { key_size_bits }
    }

    /// Configured key size in bits.
    pub fn key_size_bits(&self) -> usize {
        self.key_size_bits
    }

    /// Derives the per-round subkeys from the master key.
    ///
    /// Round `i` receives the 4-byte window starting at offset `4·i`
    /// into the key, with indices wrapping modulo the key length. This
    /// cyclic selection is a structural placeholder, preserved exactly
    /// for interoperability.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeySize`] unless
    /// `key.len() × 8` equals the configured key size.
    fn expand_key(&self, key: &[u8]) -> Result<[[u8; HALF_SIZE]; NUM_ROUNDS], CipherError> {
        if key.len() * 8 != self.key_size_bits {
            return Err(CipherError::InvalidKeySize);
        }

        let mut subkeys = [[0u8; HALF_SIZE]; NUM_ROUNDS];

        for (round, subkey) in subkeys.iter_mut().enumerate() {
            for (offset, byte) in subkey.iter_mut().enumerate() {
                *byte = key[(HALF_SIZE * round + offset) % key.len()];
            }
        }

        Ok(subkeys)
    }

    /// Encrypts a single 8-byte block.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidBlockLength`] if `block` is not
    /// exactly 8 bytes, or [`CipherError::InvalidKeySize`] for a key of
    /// the wrong length.
    pub fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let subkeys = self.expand_key(key)?;
        let (left, right) = split_block(block)?;

        Ok(feistel(left, right, &subkeys, false))
    }

    /// Decrypts a single 8-byte block.
    ///
    /// Runs the identical Feistel network with the round order
    /// reversed, which inverts [`encrypt_block`](Self::encrypt_block)
    /// exactly.
    ///
    /// # Errors
    ///
    /// Same conditions as [`encrypt_block`](Self::encrypt_block).
    pub fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE], CipherError> {
        let subkeys = self.expand_key(key)?;
        let (left, right) = split_block(block)?;

        Ok(feistel(left, right, &subkeys, true))
    }
}

impl Default for Feal {
    /// Equivalent to [`Feal::new`].
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Feal {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        Feal::encrypt_block(self, block, key).map(|out| out.to_vec())
    }

    fn decrypt_block(&self, block: &[u8], key: &[u8]) -> Result<Vec<u8>, CipherError> {
        Feal::decrypt_block(self, block, key).map(|out| out.to_vec())
    }
}

/// Runs the Feistel network over one block.
///
/// After the final round the halves are emitted swapped
/// (`right || left`), the standard Feistel final swap that makes the
/// reversed-round network the exact inverse.
fn feistel(
    mut left: [u8; HALF_SIZE],
    mut right: [u8; HALF_SIZE],
    subkeys: &[[u8; HALF_SIZE]; NUM_ROUNDS],
    reverse: bool,
) -> [u8; BLOCK_SIZE] {
    for i in 0..NUM_ROUNDS {
        let round = if reverse { NUM_ROUNDS - 1 - i } else { i };
        let mixed = round_function(&right, &subkeys[round]);

        let mut new_right = [0u8; HALF_SIZE];
        for (j, byte) in new_right.iter_mut().enumerate() {
            *byte = left[j] ^ mixed[j];
        }

        left = right;
        right = new_right;
    }

    let mut out = [0u8; BLOCK_SIZE];
    out[..HALF_SIZE].copy_from_slice(&right);
    out[HALF_SIZE..].copy_from_slice(&left);
    out
}

/// The FEAL round function.
///
/// Mixes the right half with the subkey through interleaved S0/S1
/// applications. The assignment order is part of the wire contract.
fn round_function(input: &[u8; HALF_SIZE], k: &[u8; HALF_SIZE]) -> [u8; HALF_SIZE] {
    let mut f1 = input[0] ^ input[1];
    let mut f2 = input[2] ^ input[3];

    f1 ^= k[0];
    f2 ^= k[1];

    let f0 = s1(f1, f2 ^ k[2]);
    let f3 = s0(f2, f0 ^ k[3]);
    f1 = s1(f0, f1 ^ f3);
    f2 = s0(f3, f2 ^ f1);

    [f0, f1, f2, f3]
}

/// S-box `S0`: byte addition followed by a left rotation by 2.
fn s0(a: u8, b: u8) -> u8 {
    a.wrapping_add(b).rotate_left(2)
}

/// S-box `S1`: byte addition followed by a left rotation by 4.
fn s1(a: u8, b: u8) -> u8 {
    a.wrapping_add(b).rotate_left(4)
}

/// Splits a block into its left and right halves.
fn split_block(block: &[u8]) -> Result<([u8; HALF_SIZE], [u8; HALF_SIZE]), CipherError> {
    if block.len() != BLOCK_SIZE {
        return Err(CipherError::InvalidBlockLength);
    }

    let mut left = [0u8; HALF_SIZE];
    let mut right = [0u8; HALF_SIZE];
    left.copy_from_slice(&block[..HALF_SIZE]);
    right.copy_from_slice(&block[HALF_SIZE..]);

    Ok((left, right))
}
