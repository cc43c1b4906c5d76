//! LSB-first bit stream primitives.
//!
//! Writing K bits of a value at bit cursor (byte p, bit q) sets bits
//! q..q+K-1 of byte p to the low K bits of the value, carrying into the
//! following bytes as needed; the cursor advances by K. Reading is
//! symmetric. The stream stores no field metadata: reader and writer must
//! agree on every width out of band.

/// Masks selecting the low 1..=8 bits of a byte.
const PARTIAL_MASKS: [u8; 8] = [0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F, 0xFF];

/// Appends variable-width fields to a growing byte buffer.
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Bit position 0..8 in the last byte; 0 means the next write starts a
    /// fresh byte.
    bit_pos: u32,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        BitWriter {
            bytes: Vec::new(),
            bit_pos: 0,
        }
    }

    /// Creates a writer whose stream starts with `prefix` copied verbatim;
    /// bit fields begin on the following byte boundary.
    pub fn with_prefix(prefix: &[u8]) -> Self {
        BitWriter {
            bytes: prefix.to_vec(),
            bit_pos: 0,
        }
    }

    /// Writes the low `width` bits of `value`, LSB first. `width` may be
    /// 0..=32; zero writes nothing.
    pub fn write(&mut self, value: u32, width: u32) {
        debug_assert!(width <= 32);
        let value = if width == 32 {
            value
        } else {
            value & ((1u32 << width) - 1)
        };
        let mut written = 0;
        while written < width {
            if self.bit_pos == 0 {
                self.bytes.push(0);
            }
            let free = 8 - self.bit_pos;
            let take = free.min(width - written);
            let chunk = ((value >> written) as u8) << self.bit_pos;
            *self.bytes.last_mut().expect("a byte was pushed above") |= chunk;
            self.bit_pos = (self.bit_pos + take) % 8;
            written += take;
        }
    }

    /// Total bytes the stream occupies, partial last byte included.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Consumes the writer and returns the stream. Unused bits in the last
    /// byte are zero.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        BitWriter::new()
    }
}

/// Reads variable-width fields from a byte slice.
pub struct BitReader<'a> {
    bytes: &'a [u8],
    byte_pos: usize,
    bit_pos: u32,
}

impl<'a> BitReader<'a> {
    /// Creates a reader positioned at the first bit of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader {
            bytes,
            byte_pos: 0,
            bit_pos: 0,
        }
    }

    /// Reads `width` bits, LSB first. Returns `None` once the field would
    /// start past the end of the buffer.
    pub fn read(&mut self, width: u32) -> Option<u32> {
        debug_assert!(width <= 32);
        let mut value = 0u32;
        let mut read = 0;
        while read < width {
            let byte = *self.bytes.get(self.byte_pos)?;
            let avail = 8 - self.bit_pos;
            let take = avail.min(width - read);
            let chunk = (byte >> self.bit_pos) & PARTIAL_MASKS[(take - 1) as usize];
            value |= u32::from(chunk) << read;
            self.bit_pos += take;
            read += take;
            if self.bit_pos == 8 {
                self.bit_pos = 0;
                self.byte_pos += 1;
            }
        }
        Some(value)
    }
}
