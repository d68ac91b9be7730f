//! An implementation of the [Whirlpool][1] cryptographic hash algorithm.
//!
//! Whirlpool (ISO/IEC 10118-3:2004) produces a 512-bit digest. Its
//! compression function is a dedicated 10-round block cipher, keyed with
//! the current chaining value, used in the Miyaguchi-Preneel mode.
//!
//! The constants used by Whirlpool were changed twice (2001 and 2003) - this
//! crate only implements the most recent standard. The two older Whirlpool
//! implementations (sometimes called Whirlpool-0 (pre 2001) and Whirlpool-T
//! (pre 2003)) are not supported.
//!
//! For details see <http://www.larc.usp.br/~pbarreto/WhirlpoolPage.html>.
//!
//! # Usage
//!
//! ```rust
//! use whirlpool::{Whirlpool, Digest};
//! use hex_literal::hex;
//!
//! // create a hasher object, to use it do not forget to import `Digest` trait
//! let mut hasher = Whirlpool::new();
//! // write input message
//! hasher.update(b"Hello Whirlpool");
//! // read hash digest (it will consume hasher)
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     8eaccdc136903c458ea0b1376be2a5fc9dc5b8ce8892a3b4f43366e2610c206c
//!     a373816495e63db0fff2ff25f75aa7162f332c9f518c3036456502a8414d300a
//! ")[..]);
//! ```
//!
//! The digest can also be read without consuming the hasher, after which
//! more data may be absorbed:
//!
//! ```rust
//! use whirlpool::{Snapshot, Whirlpool, Digest};
//!
//! let mut hasher = Whirlpool::new();
//! hasher.update(b"Hello ");
//! let partial = hasher.current_digest();
//! assert_eq!(partial, Whirlpool::digest(b"Hello "));
//!
//! hasher.update(b"Whirlpool");
//! assert_eq!(hasher.finalize(), Whirlpool::digest(b"Hello Whirlpool"));
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/Whirlpool_(hash_function)
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

mod compress;
mod consts;
use compress::compress;

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block as CoreBlock, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, UpdateCore,
    },
    generic_array::GenericArray,
    typenum::{Unsigned, U64},
    FixedOutput, HashMarker, Output, Reset,
};

/// Size of the internal message block in bytes.
pub const BLOCK_SIZE: usize = 64;
/// Size of the digest in bytes.
pub const OUTPUT_SIZE: usize = 64;

pub(crate) type Block = GenericArray<u8, U64>;

/// Core Whirlpool hasher state.
#[derive(Clone)]
pub struct WhirlpoolCore {
    /// Number of compressed bits, most significant word first.
    bit_len: [u64; 4],
    state: [u64; 8],
}

impl HashMarker for WhirlpoolCore {}

impl BlockSizeUser for WhirlpoolCore {
    type BlockSize = U64;
}

impl BufferKindUser for WhirlpoolCore {
    type BufferKind = Eager;
}

impl OutputSizeUser for WhirlpoolCore {
    type OutputSize = U64;
}

impl UpdateCore for WhirlpoolCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[CoreBlock<Self>]) {
        let block_bits = 8 * <<Self as BlockSizeUser>::BlockSize as Unsigned>::U64;
        self.update_len(block_bits * (blocks.len() as u64));
        for block in blocks {
            compress(&mut self.state, block);
        }
    }
}

impl FixedOutputCore for WhirlpoolCore {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let pos = buffer.get_pos();
        self.update_len(8 * pos as u64);

        let mut state = self.state;
        buffer.digest_pad(0x80, &self.len_bytes(), |block| compress(&mut state, block));

        for (chunk, v) in out.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
    }
}

impl WhirlpoolCore {
    /// Add `len` bits to the length counter, wrapping modulo 2^256.
    fn update_len(&mut self, len: u64) {
        let mut carry = 0;
        adc(&mut self.bit_len[3], len, &mut carry);
        adc(&mut self.bit_len[2], 0, &mut carry);
        adc(&mut self.bit_len[1], 0, &mut carry);
        adc(&mut self.bit_len[0], 0, &mut carry);
    }

    /// Length counter as a 256-bit big-endian integer.
    fn len_bytes(&self) -> [u8; 32] {
        let mut buf = [0u8; 32];
        for (chunk, v) in buf.chunks_exact_mut(8).zip(self.bit_len.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        buf
    }
}

impl Default for WhirlpoolCore {
    #[inline]
    fn default() -> Self {
        Self {
            bit_len: Default::default(),
            state: [0u64; 8],
        }
    }
}

impl Reset for WhirlpoolCore {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for WhirlpoolCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Whirlpool")
    }
}

opaque_debug::implement!(WhirlpoolCore);

/// Whirlpool hasher state.
pub type Whirlpool = CoreWrapper<WhirlpoolCore>;

/// Reads of a running [`Whirlpool`] hasher that leave it usable for
/// further updates.
pub trait Snapshot {
    /// Return the digest of all data absorbed so far.
    fn current_digest(&self) -> Output<Whirlpool>;

    /// Append the digest of all data absorbed so far to `out`.
    #[cfg(feature = "std")]
    fn finalize_append(&self, out: &mut std::vec::Vec<u8>) {
        out.extend_from_slice(&self.current_digest());
    }

    /// Total number of absorbed bits as a 256-bit big-endian integer.
    fn bit_len(&self) -> [u8; 32];
}

impl Snapshot for Whirlpool {
    #[inline]
    fn current_digest(&self) -> Output<Whirlpool> {
        FixedOutput::finalize_fixed(self.clone())
    }

    fn bit_len(&self) -> [u8; 32] {
        // the core only counts whole blocks, the buffered tail is added here
        let (mut core, buffer) = self.clone().decompose();
        core.update_len(8 * buffer.get_pos() as u64);
        core.len_bytes()
    }
}

#[inline(always)]
fn adc(a: &mut u64, b: u64, carry: &mut u64) {
    let ret = (*a as u128) + (b as u128) + (*carry as u128);
    *a = ret as u64;
    *carry = (ret >> 64) as u64;
}

#[cfg(test)]
mod tests {
    use super::{Snapshot, Whirlpool, WhirlpoolCore, BLOCK_SIZE};
    use digest::{core_api::UpdateCore, Update};

    #[test]
    fn eager_buffer_compresses_full_blocks() {
        let mut h = Whirlpool::default();
        h.update(&[0xaa; 63]);
        let (core, buffer) = h.clone().decompose();
        assert_eq!(buffer.get_pos(), 63);
        assert_eq!(core.state, [0u64; 8]);
        assert_eq!(core.bit_len, [0u64; 4]);

        h.update(&[0xaa]);
        let (core, buffer) = h.clone().decompose();
        assert_eq!(buffer.get_pos(), 0);
        assert_ne!(core.state, [0u64; 8]);
        assert_eq!(core.bit_len, [0, 0, 0, 512]);

        h.update(&[0xaa; 2 * BLOCK_SIZE + 5]);
        let (core, buffer) = h.decompose();
        assert_eq!(buffer.get_pos(), 5);
        assert_eq!(core.bit_len, [0, 0, 0, 3 * 512]);
    }

    #[test]
    fn update_blocks_counts_bits() {
        let mut core = WhirlpoolCore::default();
        core.update_blocks(&[Default::default(), Default::default()]);
        assert_eq!(core.bit_len, [0, 0, 0, 1024]);
        assert_ne!(core.state, [0u64; 8]);
    }

    #[test]
    fn length_carries_across_words() {
        let mut core = WhirlpoolCore::default();
        core.bit_len = [0, 0, 0, u64::MAX - 7];
        core.update_len(8);
        assert_eq!(core.bit_len, [0, 0, 1, 0]);

        core.bit_len = [0, u64::MAX, u64::MAX, u64::MAX];
        core.update_len(16);
        assert_eq!(core.bit_len, [1, 0, 0, 15]);
    }

    #[test]
    fn length_wraps_at_256_bits() {
        let mut core = WhirlpoolCore::default();
        core.bit_len = [u64::MAX; 4];
        core.update_len(8);
        assert_eq!(core.bit_len, [0, 0, 0, 7]);
    }

    #[test]
    fn length_bytes_are_big_endian() {
        let mut core = WhirlpoolCore::default();
        core.bit_len = [1, 2, 3, 0x0102_0304_0506_0708];
        let bytes = core.len_bytes();
        assert_eq!(bytes[7], 1);
        assert_eq!(bytes[15], 2);
        assert_eq!(bytes[23], 3);
        assert_eq!(bytes[24..], [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn snapshot_includes_buffered_bytes() {
        let mut h = Whirlpool::default();
        h.update(&[7; 70]);
        let mut expected = [0u8; 32];
        expected[30] = 0x02;
        expected[31] = 0x30;
        assert_eq!(h.bit_len(), expected);

        let _ = h.current_digest();
        let (core, buffer) = h.decompose();
        assert_eq!(buffer.get_pos(), 6);
        assert_eq!(core.bit_len, [0, 0, 0, 512]);
    }
}
