//! An annotation and coordinates table reader.
//!
//! [`Reader`] owns raw, buffered line reading; typed parsing is handed to
//! one of two iterator views over the underlying lines —
//! [`Reader::features()`] for the ten-column annotation table and
//! [`Reader::queries()`] for the two-column coordinates table.

use std::io::BufRead;
use std::io::{self};

use crate::record::feature;
use crate::record::query;

pub mod features;
pub mod queries;

pub use features::Features;
pub use queries::Queries;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// An invalid feature record.
    InvalidFeatureRecord(feature::ParseError, String),

    /// An invalid query record.
    InvalidQueryRecord(query::ParseError, String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::InvalidFeatureRecord(err, line) => {
                write!(f, "invalid feature record: {}\n\nline: {}", err, line)
            }
            Error::InvalidQueryRecord(err, line) => {
                write!(f, "invalid query record: {}\n\nline: {}", err, line)
            }
        }
    }
}

impl std::error::Error for Error {}

/// An annotation and coordinates table reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a table reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\t100\nchr2\t200";
    /// let reader = annofile::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"chr1\t100\nchr2\t200";
    /// let cursor = io::Cursor::new(data);
    ///
    /// let reader = annofile::Reader::new(cursor);
    /// assert_eq!(reader.inner().position(), 0);
    /// ```
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Read;
    ///
    /// let data = b"chr1\t100\nchr2\t200";
    /// let mut reader = annofile::Reader::new(&data[..]);
    /// let mut buffer = vec![0; data.len()];
    ///
    /// reader.inner_mut().read_exact(&mut buffer).unwrap();
    /// assert_eq!(buffer, data[..]);
    /// ```
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::BufRead;
    ///
    /// let data = b"chr1\t100\nchr2\t200";
    /// let reader = annofile::Reader::new(&data[..]);
    /// let mut lines = reader.into_inner().lines().map(|line| line.unwrap());
    ///
    /// assert_eq!(lines.next(), Some(String::from("chr1\t100")));
    /// assert_eq!(lines.next(), Some(String::from("chr2\t200")));
    /// assert_eq!(lines.next(), None);
    /// ```
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"chr1\t100\nchr2\t200";
    /// let mut reader = annofile::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 9);
    /// assert_eq!(buffer, "chr1\t100");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 8);
    /// assert_eq!(buffer, "chr2\t200");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Returns an iterator over the feature records in the underlying
    /// reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
    /// let mut reader = annofile::Reader::new(&data[..]);
    ///
    /// let records = reader
    ///     .features()
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn features(&mut self) -> Features<'_, T> {
        Features::new(self)
    }

    /// Returns an iterator over the query records in the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\t100\nchr2\t200";
    /// let mut reader = annofile::Reader::new(&data[..]);
    ///
    /// let queries = reader
    ///     .queries()
    ///     .collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(queries.len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn queries(&mut self) -> Queries<'_, T> {
        Queries::new(self)
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Reads a line from a buffered reader.
///
/// This method is copied almost directly from noodles-gtf. I repurposed it
/// because it captures pretty much exactly what I need to do for this reader.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_read_line() {
        let data = b"hello\r\nworld!";
        let mut cursor = io::Cursor::new(data);

        let mut buffer = String::new();
        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "hello");
        assert_eq!(len, 7);

        let len = read_line(&mut cursor, &mut buffer).unwrap();
        assert_eq!(buffer, "world!");
        assert_eq!(len, 6);
    }
}
