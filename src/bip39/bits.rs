/*
    Packed, MSB-first bit vector.

    Bits are appended from byte slices most significant bit first
    and read back as fixed width big-endian windows.
*/

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitVector {
    bytes: Vec<u8>,
    len: usize
}

impl BitVector {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0
        }
    }

    /// Every bit of every byte, MSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the bit at position `i` or None past the end.
    pub fn get(&self, i: usize) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some(self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /**
        Appends the leading `count` bits of `source`, MSB first across the slice.
        `count` is clamped to the number of bits in `source`.
    */
    pub fn extend_from_bytes(&mut self, source: &[u8], count: usize) {
        let count = count.min(source.len() * 8);
        for i in 0..count {
            self.push(source[i / 8] & (0x80 >> (i % 8)) != 0);
        }
    }

    /**
        Reads `width` bits starting at `start` as a big-endian unsigned integer.
        Returns None if the window runs past the end or is wider than 32 bits.
    */
    pub fn read_window(&self, start: usize, width: usize) -> Option<u32> {
        if width > 32 || start.checked_add(width)? > self.len {
            return None;
        }
        let mut value: u32 = 0;
        for i in start..start + width {
            value = (value << 1) | (self.bytes[i / 8] >> (7 - i % 8) & 1) as u32;
        }
        Some(value)
    }

    /**
        Splits the vector into consecutive, non-overlapping windows of `width` bits.
        Trailing bits that do not fill a whole window are not returned.
    */
    pub fn windows(&self, width: usize) -> Windows<'_> {
        Windows {
            bits: self,
            width,
            pos: 0
        }
    }
}

pub struct Windows<'a> {
    bits: &'a BitVector,
    width: usize,
    pos: usize
}

impl<'a> Iterator for Windows<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.width == 0 {
            return None;
        }
        let value = self.bits.read_window(self.pos, self.width)?;
        self.pos += self.width;
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_read_msb_first() {
        let bits = BitVector::from_bytes(&[0b1000_0001, 0b0100_0000]);
        assert_eq!(bits.len(), 16);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(7), Some(true));
        assert_eq!(bits.get(9), Some(true));
        assert_eq!(bits.get(16), None);
    }

    #[test]
    fn extend_takes_leading_bits() {
        let mut bits = BitVector::from_bytes(&[0xff]);
        bits.extend_from_bytes(&[0b1010_1111, 0xff], 4);
        assert_eq!(bits.len(), 12);
        assert_eq!(bits.read_window(8, 4), Some(0b1010));

        //Crosses a byte boundary in the source
        let mut bits = BitVector::with_capacity(10);
        bits.extend_from_bytes(&[0x00, 0b1100_0000], 10);
        assert_eq!(bits.len(), 10);
        assert_eq!(bits.read_window(0, 10), Some(0b00000000_11));
    }

    #[test]
    fn eleven_bit_windows() {
        //0x0c1e = 0000 1100 0001 1110 -> first window 00001100000 = 96
        let bits = BitVector::from_bytes(&[0x0c, 0x1e, 0x24, 0xe5]);
        let windows: Vec<u32> = bits.windows(11).collect();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0], 0b000_0110_0000);
        assert_eq!(windows[1], 0b1111_0001_001);
    }

    #[test]
    fn window_bounds() {
        let bits = BitVector::from_bytes(&[0xff, 0xff]);
        assert_eq!(bits.read_window(0, 16), Some(0xffff));
        assert_eq!(bits.read_window(6, 11), None);
        assert_eq!(bits.read_window(0, 33), None);
        assert_eq!(bits.windows(0).next(), None);
    }
}
