//! The variable-bit-width format.
//!
//! Repacks a 4-byte file image with the child index field shrunk to the
//! minimum width the node count requires. The 4-byte header is copied
//! through unchanged, then every node word — the reserved zero slot
//! included — is emitted as `1 + 1 + 8 + B_idx` bits in field order:
//! end-of-word, end-of-list, value, first child index.
//!
//! The header carries only the node count; `B_idx` is not self-described.
//! Any reader must recompute it with [`bits_for_index`] or it will walk the
//! stream misaligned.

use crate::codec::bits::{BitReader, BitWriter};
use crate::codec::node4::{decode_words, Node4};
use crate::error::{Error, Result};

/// Width of the end-of-word field.
pub const END_OF_WORD_BITS: u32 = 1;
/// Width of the end-of-list field.
pub const END_OF_LIST_BITS: u32 = 1;
/// Width of the edge character field.
pub const VALUE_BITS: u32 = 8;

/// Number of bits needed to store any index below `node_count`, computed as
/// `ceil(log2(node_count))` in integer arithmetic.
pub fn bits_for_index(node_count: u32) -> u32 {
    if node_count <= 1 {
        0
    } else {
        32 - (node_count - 1).leading_zeros()
    }
}

/// Bits one node occupies in the packed stream.
pub fn bits_per_node(node_count: u32) -> u32 {
    END_OF_WORD_BITS + END_OF_LIST_BITS + VALUE_BITS + bits_for_index(node_count)
}

/// Repacks a 4-byte file image into the variable-width image.
pub fn pack(dat: &[u8]) -> Result<Vec<u8>> {
    let words = decode_words(dat)?;
    let index_bits = bits_for_index(words.len() as u32);

    let mut writer = BitWriter::with_prefix(&dat[..4]);
    for &word in &words {
        let node = Node4::from_word(word);
        writer.write(node.end_of_word as u32, END_OF_WORD_BITS);
        writer.write(node.end_of_list as u32, END_OF_LIST_BITS);
        writer.write(u32::from(node.value), VALUE_BITS);
        writer.write(node.first_child_index, index_bits);
    }
    Ok(writer.into_bytes())
}

/// Unpacks a variable-width image back into the 4-byte image. Exact inverse
/// of [`pack`]: the output is byte-identical to the original.
pub fn unpack(packed: &[u8]) -> Result<Vec<u8>> {
    if packed.len() < 4 {
        return Err(Error::MalformedInternalState(
            "packed stream shorter than its header",
        ));
    }
    let node_count = u32::from_le_bytes(packed[..4].try_into().expect("4-byte slice"));
    let index_bits = bits_for_index(node_count);

    let mut out = Vec::with_capacity(4 + node_count as usize * 4);
    out.extend_from_slice(&packed[..4]);
    let mut reader = BitReader::new(&packed[4..]);
    for _ in 0..node_count {
        let node = read_node(&mut reader, index_bits)
            .ok_or(Error::MalformedInternalState("packed stream truncated"))?;
        out.extend_from_slice(&node.to_word().to_le_bytes());
    }
    Ok(out)
}

fn read_node(reader: &mut BitReader<'_>, index_bits: u32) -> Option<Node4> {
    let end_of_word = reader.read(END_OF_WORD_BITS)? != 0;
    let end_of_list = reader.read(END_OF_LIST_BITS)? != 0;
    let value = reader.read(VALUE_BITS)? as u8;
    let first_child_index = reader.read(index_bits)?;
    Some(Node4 {
        value,
        end_of_word,
        end_of_list,
        first_child_index,
    })
}
