//! An iterator over the query records of a coordinates table.

use std::io::BufRead;

use crate::Reader;
use crate::reader::Error;
use crate::record::query;

/// An iterator over the query records of a coordinates table.
///
/// Blank lines are skipped. A line with the wrong number of fields is a
/// structural failure of the coordinates table and surfaces as an [`Err`]
/// item; per-query degradation (unknown chromosome, non-numeric position)
/// happens later, at match time.
#[derive(Debug)]
pub struct Queries<'a, T>
where
    T: BufRead,
{
    /// The underlying reader.
    reader: &'a mut Reader<T>,

    /// The reusable line buffer.
    buffer: String,
}

impl<'a, T> Queries<'a, T>
where
    T: BufRead,
{
    /// Creates a new [`Queries`] iterator backed by the provided reader.
    pub(crate) fn new(reader: &'a mut Reader<T>) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<T> Iterator for Queries<'_, T>
where
    T: BufRead,
{
    type Item = Result<query::Record, Error>;

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
                            .parse::<query::Record>()
                            .map_err(|e| Error::InvalidQueryRecord(e, self.buffer.clone())),
                    );
                }
                Err(err) => return Some(Err(Error::Io(err))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Reader;

    #[test]
    fn test_reading_queries() -> Result<(), Box<dyn std::error::Error>> {
        let data = b"chr1\t100\n\nchr2\tnot-a-number\n";
        let mut reader = Reader::new(&data[..]);

        let queries = reader.queries().collect::<Result<Vec<_>, _>>()?;

        // The non-numeric position is not a read error; it degrades per-row
        // at match time.
        assert_eq!(queries.len(), 2);
        assert_eq!(queries[0].position(), "100");
        assert_eq!(queries[1].position(), "not-a-number");

        Ok(())
    }

    #[test]
    fn test_reading_invalid_query() {
        let data = b"chr1\t100\tunexpected";
        let mut reader = Reader::new(&data[..]);

        let err = reader.queries().collect::<Result<Vec<_>, _>>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid query record: invalid number of fields in query record: expected 2 \
             fields, found 3 fields\n\nline: chr1\t100\tunexpected"
        );
    }
}
