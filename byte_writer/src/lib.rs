//! Little-endian append buffer.
//!
//! Containers with fixed absolute field offsets are assembled by appending
//! fields in order and zero-filling the gaps with [`ByteWriter::pad_to`].

#[derive(Debug, Default)]
pub struct ByteWriter {
    pub data: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Current write position, which is also the number of bytes written.
    pub fn get_offset(&self) -> usize {
        self.data.len()
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u32_slice(&mut self, i: &[u32]) {
        self.data.reserve(i.len() * 4);
        i.iter().for_each(|val| self.append_u32(*val));
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
    }

    /// Appends zeroes until the write position reaches `offset`.
    ///
    /// Does nothing when the buffer is already at or past `offset`.
    pub fn pad_to(&mut self, offset: usize) {
        if self.data.len() < offset {
            self.data.resize(offset, 0);
        }
    }
}
