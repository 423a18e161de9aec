//! A builder for a [`Machine`].

use std::collections::HashMap;
use std::io::BufRead;

use crate::annotate::Machine;
use crate::annotate::index;
use crate::reader;
use crate::record::Chromosome;
use crate::record::feature;

/// An error related to building a [`Machine`].
#[derive(Debug)]
pub enum Error {
    /// An error reading feature records from the annotation table.
    InvalidFeatures(reader::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFeatures(err) => write!(f, "invalid annotation table: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Machine`].
#[allow(missing_debug_implementations)]
pub struct Builder;

impl Builder {
    /// Builds a [`Machine`] from the builder.
    ///
    /// The annotation table is consumed in full before any query can be
    /// served: records are grouped by chromosome in encounter order, and
    /// each group is frozen into its boundary index. A read or parse
    /// failure here is structural and aborts the build; per-query
    /// degradation only applies once the machine exists.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
    /// let reader = annofile::Reader::new(&data[..]);
    ///
    /// let machine = annofile::annotate::machine::Builder::default().try_build_from(reader)?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from<T>(&self, mut reader: reader::Reader<T>) -> Result<Machine>
    where
        T: BufRead,
    {
        let mut groups = HashMap::<Chromosome, Vec<feature::Record>>::default();

        for result in reader.features() {
            let record = result.map_err(Error::InvalidFeatures)?;

            groups
                .entry(record.chromosome().to_string())
                .or_default()
                .push(record);
        }

        let mut inner = HashMap::<Chromosome, index::Index>::new();

        for (chromosome, records) in groups.into_iter() {
            inner.insert(chromosome, index::Index::new(&records));
        }

        Ok(Machine { inner })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;

    #[test]
    fn test_building_groups_records_by_chromosome() -> Result<()> {
        let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0\n\
                     chr2\tNM_0002.1\t1\t300\t400\t0\t-\t0\tgeneB\t0\n\
                     chr1\tNM_0003.1\t1\t500\t600\t0\t+\t0\tgeneC\t0";
        let reader = Reader::new(&data[..]);

        let machine = Builder.try_build_from(reader)?;

        assert_eq!(machine.index("chr1").unwrap().len(), 4);
        assert_eq!(machine.index("chr2").unwrap().len(), 2);

        Ok(())
    }

    #[test]
    fn test_building_from_a_malformed_table_fails() {
        let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0\n\
                     chr1\tNM_0002.1\t1\tfoo\t400\t0\t-\t0\tgeneB\t0";
        let reader = Reader::new(&data[..]);

        let err = Builder.try_build_from(reader).unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid annotation table: invalid feature record: invalid start position: \
             invalid digit found in string\n\nline: \
             chr1\tNM_0002.1\t1\tfoo\t400\t0\t-\t0\tgeneB\t0"
        );
    }
}
