use std::{
    borrow::Cow,
    cell::RefCell,
    io::{self, Read, Seek, SeekFrom},
};

use crate::error::SheetError;

/// Random access reads at absolute offsets.
///
/// Reads that would run past the end of the source fail with [`SheetError::TruncatedInput`].
pub trait ByteSource {
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_at(&self, offset: u64, length: usize) -> Result<Cow<'_, [u8]>, SheetError>;
}

fn check_bounds(offset: u64, length: usize, len: u64) -> Result<(), SheetError> {
    let in_bounds = offset
        .checked_add(length as u64)
        .is_some_and(|end| end <= len);

    if in_bounds {
        Ok(())
    } else {
        Err(SheetError::TruncatedInput { offset, length })
    }
}

fn slice_at(bytes: &[u8], offset: u64, length: usize) -> Result<&[u8], SheetError> {
    check_bounds(offset, length, bytes.len() as u64)?;

    let start = offset as usize;
    Ok(&bytes[start..start + length])
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> u64 {
        self.as_slice().len() as u64
    }

    fn read_at(&self, offset: u64, length: usize) -> Result<Cow<'_, [u8]>, SheetError> {
        slice_at(self, offset, length).map(Cow::Borrowed)
    }
}

impl ByteSource for &[u8] {
    fn len(&self) -> u64 {
        <[u8]>::len(self) as u64
    }

    fn read_at(&self, offset: u64, length: usize) -> Result<Cow<'_, [u8]>, SheetError> {
        slice_at(self, offset, length).map(Cow::Borrowed)
    }
}

/// Adapts any seekable reader, such as a [`std::fs::File`], into a [`ByteSource`].
///
/// Every read seeks first, so sequential position is never relied on.
#[derive(Debug)]
pub struct SeekSource<R> {
    inner: RefCell<R>,
    len: u64,
}

impl<R: Read + Seek> SeekSource<R> {
    pub fn new(mut inner: R) -> io::Result<Self> {
        let len = inner.seek(SeekFrom::End(0))?;

        Ok(Self {
            inner: RefCell::new(inner),
            len,
        })
    }

    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read + Seek> ByteSource for SeekSource<R> {
    fn len(&self) -> u64 {
        self.len
    }

    fn read_at(&self, offset: u64, length: usize) -> Result<Cow<'_, [u8]>, SheetError> {
        // checked before allocating so a corrupt length cannot request a huge buffer
        check_bounds(offset, length, self.len)?;

        let mut inner = self.inner.borrow_mut();
        let mut buf = vec![0u8; length];

        inner.seek(SeekFrom::Start(offset))?;
        inner.read_exact(&mut buf).map_err(|err| match err.kind() {
            io::ErrorKind::UnexpectedEof => SheetError::TruncatedInput { offset, length },
            _ => err.into(),
        })?;

        Ok(Cow::Owned(buf))
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn slice_read() {
        let bytes: &[u8] = &[1, 2, 3, 4, 5];

        assert_eq!(bytes.read_at(1, 3).unwrap().as_ref(), &[2, 3, 4]);
        assert_eq!(bytes.read_at(5, 0).unwrap().as_ref(), &[] as &[u8]);
    }

    #[test]
    fn slice_read_past_end() {
        let bytes = vec![0u8; 16];

        assert!(matches!(
            bytes.read_at(0xe20, 4),
            Err(SheetError::TruncatedInput {
                offset: 0xe20,
                length: 4
            })
        ));
        assert!(matches!(
            bytes.read_at(u64::MAX, 1),
            Err(SheetError::TruncatedInput { .. })
        ));
    }

    #[test]
    fn seek_source_read() {
        let source = SeekSource::new(Cursor::new(vec![9u8, 8, 7, 6])).unwrap();

        assert_eq!(source.len(), 4);
        assert_eq!(source.read_at(2, 2).unwrap().as_ref(), &[7, 6]);
        // order of reads does not matter
        assert_eq!(source.read_at(0, 1).unwrap().as_ref(), &[9]);
        assert!(matches!(
            source.read_at(3, 2),
            Err(SheetError::TruncatedInput {
                offset: 3,
                length: 2
            })
        ));

        assert_eq!(source.into_inner().into_inner(), vec![9u8, 8, 7, 6]);
    }
}
