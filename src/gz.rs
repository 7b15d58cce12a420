use std::io::{BufRead, Read, Seek, SeekFrom};

use flate2::read::GzDecoder;

use crate::error::Error;

/// A reader decoding its input on the fly when it is gzip-compressed
#[derive(Debug)]
pub enum GzReader<R> {
    GzReader(GzDecoder<R>),
    Reader(R),
}

impl<R> Read for GzReader<R>
where
    R: Read,
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self {
            GzReader::GzReader(r) => r.read(buf),
            GzReader::Reader(r) => r.read(buf),
        }
    }
}

impl<R> GzReader<R> {
    pub fn is_compressed(&self) -> bool {
        matches!(self, GzReader::GzReader(_))
    }
}

impl<R> GzReader<R>
where
    R: Read + Seek,
{
    /// Wrap a reader, detecting a gzip stream from its first bytes
    pub fn new(reader: R) -> Result<Self, Error> {
        let gz = GzDecoder::new(reader);

        match gz.header() {
            // the stream is gzip-compressed
            Some(_) => Ok(GzReader::GzReader(gz)),
            // plain stream
            None => {
                let mut r = gz.into_inner();
                // Since the `GzDecoder` already moved some bytes out of the reader
                // by trying to decompress it, it must be rewinded
                r.seek(SeekFrom::Start(0))?;

                Ok(GzReader::Reader(r))
            }
        }
    }
}

impl<R> GzReader<R>
where
    R: BufRead,
{
    /// Wrap a stream that cannot be rewinded, such as an HTTP body,
    /// looking at the gzip magic bytes without consuming them
    pub fn from_buf_read(mut reader: R) -> Result<Self, Error> {
        let magic = reader.fill_buf()?;
        if magic.starts_with(&[0x1f, 0x8b]) {
            Ok(GzReader::GzReader(GzDecoder::new(reader)))
        } else {
            Ok(GzReader::Reader(reader))
        }
    }
}
