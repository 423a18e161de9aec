//! An annotated coordinates writer.

use std::io::Write;
use std::io::{self};

use crate::annotate::Annotation;
use crate::record::query;

/// The header line of an annotated coordinates table.
pub const HEADER: &str = "chromosome\tposition\tannotation";

/// An annotated coordinates writer.
///
/// One row is written per query, in the order the queries were consumed,
/// with the position echoed exactly as it appeared in the coordinates
/// table. Sentinel outcomes render in place of the annotation, so failures
/// never change the output's row count.
#[derive(Debug)]
pub struct Writer<T>(T)
where
    T: Write;

impl<T> Writer<T>
where
    T: Write,
{
    /// Creates an annotated coordinates writer.
    ///
    /// # Examples
    ///
    /// ```
    /// let writer = annofile::Writer::new(Vec::new());
    /// ```
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Writes the header line.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.0, "{}", HEADER)
    }

    /// Writes one annotated query row.
    pub fn write_record(
        &mut self,
        query: &query::Record,
        annotation: &Annotation,
    ) -> io::Result<()> {
        writeln!(
            self.0,
            "{}\t{}\t{}",
            query.chromosome(),
            query.position(),
            annotation
        )
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }

    /// Consumes self and returns the inner writer.
    ///
    /// # Examples
    ///
    /// ```
    /// let writer = annofile::Writer::new(Vec::new());
    /// assert!(writer.into_inner().is_empty());
    /// ```
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;
    use crate::annotate::machine;

    #[test]
    fn test_writing_annotated_rows() -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = Writer::new(Vec::new());
        writer.write_header()?;

        let query = query::Record::new("chr1", "100");
        writer.write_record(&query, &Annotation::Feature(String::from("geneA")))?;

        let query = query::Record::new("chr2", "50");
        writer.write_record(&query, &Annotation::ChromosomeNotFound)?;

        let written = String::from_utf8(writer.into_inner())?;
        assert_eq!(
            written,
            "chromosome\tposition\tannotation\n\
             chr1\t100\tgeneA\n\
             chr2\t50\tchromosome not found in annotation file\n"
        );

        Ok(())
    }

    #[test]
    fn test_every_query_produces_exactly_one_row_in_order()
    -> Result<(), Box<dyn std::error::Error>> {
        let annotations = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
        let machine = machine::Builder::default().try_build_from(Reader::new(&annotations[..]))?;

        let coordinates = b"chr1\t150\nchr1\t100\nchr2\t50\nchr1\tabc\nchr1\t999";
        let mut reader = Reader::new(&coordinates[..]);

        let mut writer = Writer::new(Vec::new());
        writer.write_header()?;

        for result in reader.queries() {
            let query = result?;
            writer.write_record(&query, &machine.annotate(&query))?;
        }

        let written = String::from_utf8(writer.into_inner())?;
        assert_eq!(
            written,
            "chromosome\tposition\tannotation\n\
             chr1\t150\tgeneA\n\
             chr1\t100\tgeneA\n\
             chr2\t50\tchromosome not found in annotation file\n\
             chr1\tabc\terror - invalid position\n\
             chr1\t999\tposition beyond known range\n"
        );

        Ok(())
    }
}
