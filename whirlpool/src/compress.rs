use crate::consts::{C, RC};
use crate::Block;

/// Round function of the internal block cipher without the key addition.
///
/// Output word `i` combines byte `j` of input word `i - j` (mod 8) through
/// table `C[j]`, which performs the S-box layer, the cyclic shift of the
/// columns and the matrix multiplication in a single pass.
#[inline(always)]
fn round(v: &[u64; 8]) -> [u64; 8] {
    let mut out = [0u64; 8];
    for (i, o) in out.iter_mut().enumerate() {
        *o = C
            .iter()
            .enumerate()
            .fold(0, |acc, (j, table)| {
                let byte = (v[(i + 8 - j) % 8] >> (56 - 8 * j)) as u8;
                acc ^ table[byte as usize]
            });
    }
    out
}

/// Process one 64-byte block, updating the chaining value in place.
pub(crate) fn compress(state: &mut [u64; 8], block: &Block) {
    let mut m = [0u64; 8];
    for (w, chunk) in m.iter_mut().zip(block.chunks_exact(8)) {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        *w = u64::from_be_bytes(buf);
    }

    let mut key = *state;
    let mut s = m;
    for (w, k) in s.iter_mut().zip(key.iter()) {
        *w ^= k;
    }

    for rc in RC.iter() {
        key = round(&key);
        key[0] ^= rc;

        s = round(&s);
        for (w, k) in s.iter_mut().zip(key.iter()) {
            *w ^= k;
        }
    }

    // Miyaguchi-Preneel feed-forward
    for ((h, w), b) in state.iter_mut().zip(s.iter()).zip(m.iter()) {
        *h ^= w ^ b;
    }
}

#[cfg(test)]
mod tests {
    use super::{compress, round};
    use crate::consts::C;
    use crate::Block;

    #[test]
    fn round_of_zero_is_table_sum() {
        // every byte is zero, so each output word is the XOR of all C[j][0]
        let expected = C.iter().fold(0, |acc, t| acc ^ t[0]);
        assert_eq!(round(&[0; 8]), [expected; 8]);
    }

    #[test]
    fn round_reads_rotating_columns() {
        let mut v = [0u64; 8];
        v[3] = 0x00ff_0000_0000_0000;
        let out = round(&v);
        let base = C.iter().fold(0, |acc, t| acc ^ t[0]);
        // byte 1 of word 3 feeds output word 4 through C[1]
        for (i, &w) in out.iter().enumerate() {
            if i == 4 {
                assert_eq!(w, base ^ C[1][0] ^ C[1][0xff]);
            } else {
                assert_eq!(w, base);
            }
        }
    }

    #[test]
    fn compress_depends_on_state_and_block() {
        let block = Block::default();
        let mut a = [0u64; 8];
        compress(&mut a, &block);
        assert_ne!(a, [0u64; 8]);

        let mut b = [0u64; 8];
        let mut other = Block::default();
        other[63] = 1;
        compress(&mut b, &other);
        assert_ne!(a, b);

        let mut c = a;
        compress(&mut c, &block);
        assert_ne!(a, c);
    }
}
