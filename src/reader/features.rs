//! An iterator over the feature records of an annotation table.

use std::io::BufRead;

use crate::Reader;
use crate::reader::Error;
use crate::record::feature;

/// An iterator over the feature records of an annotation table.
///
/// Blank lines are skipped. Any read or parse failure ends up as an [`Err`]
/// item: annotation tables are batch inputs, so callers are expected to
/// treat the first failure as fatal for the run.
#[derive(Debug)]
pub struct Features<'a, T>
where
    T: BufRead,
{
    /// The underlying reader.
    reader: &'a mut Reader<T>,

    /// The reusable line buffer.
    buffer: String,
}

impl<'a, T> Features<'a, T>
where
    T: BufRead,
{
    /// Creates a new [`Features`] iterator backed by the provided reader.
    pub(crate) fn new(reader: &'a mut Reader<T>) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<T> Iterator for Features<'_, T>
where
    T: BufRead,
{
    type Item = Result<feature::Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_line_raw(&mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {
                    if self.buffer.is_empty() {
                        continue;
                    }

                    return Some(
                        self.buffer
                            .parse::<feature::Record>()
                            .map_err(|e| Error::InvalidFeatureRecord(e, self.buffer.clone())),
                    );
                }
                Err(err) => return Some(Err(Error::Io(err))),
            }
        }
    }
}
