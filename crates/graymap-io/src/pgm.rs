//! PGM (Portable GrayMap) format support
//!
//! Reads and writes binary PGM (`P5`) with 8-bit samples. ASCII PGM
//! (`P2`) and 16-bit samples are not supported.
//!
//! # Header
//!
//! ```text
//! P5 <ws> width <ws> height <ws> maxval <one ws byte> <width*height bytes>
//! ```
//!
//! `#` comments run to end of line and may appear wherever whitespace
//! is allowed before a numeric field.

use crate::{IoError, IoResult};
use graymap_core::{Image, PIX_MAX};
use std::io::{BufRead, Read, Write};

/// Byte-level cursor over a PGM header.
struct HeaderReader<R> {
    reader: R,
}

impl<R: BufRead> HeaderReader<R> {
    fn peek(&mut self) -> IoResult<Option<u8>> {
        Ok(self.reader.fill_buf()?.first().copied())
    }

    fn bump(&mut self) {
        self.reader.consume(1);
    }

    fn next_byte(&mut self) -> IoResult<Option<u8>> {
        let b = self.peek()?;
        if b.is_some() {
            self.bump();
        }
        Ok(b)
    }

    /// Skip whitespace and `#` comment lines.
    fn skip_blank(&mut self) -> IoResult<()> {
        while let Some(b) = self.peek()? {
            if b == b'#' {
                while let Some(c) = self.next_byte()? {
                    if c == b'\n' {
                        break;
                    }
                }
            } else if is_pnm_space(b) {
                self.bump();
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parse an unsigned decimal field.
    fn read_field(&mut self, field: &'static str) -> IoResult<u32> {
        self.skip_blank()?;
        let mut value: u32 = 0;
        let mut digits = 0;
        while let Some(b) = self.peek()? {
            if !b.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or(IoError::InvalidHeader(field))?;
            digits += 1;
            self.bump();
        }
        if digits == 0 {
            return Err(IoError::InvalidHeader(field));
        }
        Ok(value)
    }
}

/// Whitespace as understood by C's `isspace`.
#[inline]
fn is_pnm_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Read a binary PGM image from a reader.
///
/// # Errors
///
/// - [`IoError::InvalidFormat`] if the magic is not `P5`
/// - [`IoError::InvalidHeader`] naming the bad field (`width`, `height`,
///   `maxval`); maxval must be in `1..=255`
/// - [`IoError::WhitespaceExpected`] if maxval is not followed by whitespace
/// - [`IoError::ReadPixels`] if fewer than `width * height` bytes follow
pub fn read_pgm<R: BufRead>(reader: R) -> IoResult<Image> {
    let mut hdr = HeaderReader { reader };

    if hdr.next_byte()? != Some(b'P') || hdr.next_byte()? != Some(b'5') {
        return Err(IoError::InvalidFormat);
    }
    let width = hdr.read_field("width")?;
    let height = hdr.read_field("height")?;
    let maxval = hdr.read_field("maxval")?;
    if maxval == 0 || maxval > u32::from(PIX_MAX) {
        return Err(IoError::InvalidHeader("maxval"));
    }
    match hdr.next_byte()? {
        Some(b) if is_pnm_space(b) => {}
        _ => return Err(IoError::WhitespaceExpected),
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .ok_or(graymap_core::Error::AllocationFailed { width, height })?;
    let mut data = Vec::new();
    data.try_reserve_exact(expected)
        .map_err(|_| graymap_core::Error::AllocationFailed { width, height })?;
    let actual = hdr
        .reader
        .take(expected as u64)
        .read_to_end(&mut data)?;
    if actual != expected {
        return Err(IoError::ReadPixels { expected, actual });
    }

    Ok(Image::from_raw(width, height, maxval as u8, data)?)
}

/// Write an image as binary PGM to a writer.
///
/// The header is written as `P5\n<width> <height>\n<maxval>\n`.
///
/// # Errors
///
/// [`IoError::WriteHeader`] or [`IoError::WritePixels`] if the writer
/// fails part way; whatever was written before the failure stays written.
pub fn write_pgm<W: Write>(img: &Image, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "P5\n{} {}\n{}\n",
        img.width(),
        img.height(),
        img.maxval()
    )
    .map_err(IoError::WriteHeader)?;
    writer
        .write_all(img.data())
        .and_then(|()| writer.flush())
        .map_err(IoError::WritePixels)?;
    Ok(())
}
