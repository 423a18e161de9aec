//! A query record within a coordinates table.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::record::Chromosome;
use crate::record::Position;

/// The delimiter between fields in a query record.
pub const DELIMITER: char = '\t';

/// The number of expected fields in a query record.
pub const NUM_FIELDS: usize = 2;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a query record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the record.
    IncorrectNumberOfFields(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(fields) => write!(
                f,
                "invalid number of fields in query record: expected {} fields, found {} fields",
                NUM_FIELDS, fields
            ),
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Records
////////////////////////////////////////////////////////////////////////////////////////

/// A query record within a coordinates table.
///
/// The position is retained in the exact string form it was read in: results
/// echo the position back verbatim, and numeric interpretation is deferred
/// until match time so that a malformed token degrades that row alone rather
/// than failing the whole run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The chromosome to look up.
    chromosome: Chromosome,

    /// The position to look up, as consumed.
    position: String,
}

impl Record {
    /// Creates a new query record.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::query::Record;
    ///
    /// let query = Record::new("chr1", "100");
    /// assert_eq!(query.chromosome(), "chr1");
    /// assert_eq!(query.position(), "100");
    /// ```
    pub fn new(chromosome: impl Into<Chromosome>, position: impl Into<String>) -> Record {
        Record {
            chromosome: chromosome.into(),
            position: position.into(),
        }
    }

    /// Returns the chromosome to look up.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::query::Record;
    ///
    /// let query = "chr1\t100".parse::<Record>()?;
    /// assert_eq!(query.chromosome(), "chr1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Returns the position to look up, exactly as consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::query::Record;
    ///
    /// let query = "chr1\t0100".parse::<Record>()?;
    /// assert_eq!(query.position(), "0100");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Attempts to interpret the position as a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::query::Record;
    ///
    /// let query = "chr1\t100".parse::<Record>()?;
    /// assert_eq!(query.numeric_position()?, 100);
    ///
    /// let query = "chr1\tfoo".parse::<Record>()?;
    /// assert!(query.numeric_position().is_err());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn numeric_position(&self) -> Result<Position, ParseIntError> {
        self.position.parse()
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(DELIMITER).collect::<Vec<_>>();
        if parts.len() != NUM_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        Ok(Record {
            chromosome: parts[0].into(),
            position: parts[1].into(),
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.chromosome, DELIMITER, self.position)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_parsing_query_record() -> Result<(), Box<dyn std::error::Error>> {
        let query = "chr1\t100".parse::<Record>()?;

        assert_eq!(query.chromosome(), "chr1");
        assert_eq!(query.position(), "100");
        assert_eq!(query.numeric_position()?, 100);

        Ok(())
    }

    #[test]
    fn test_invalid_number_of_fields() -> Result<(), Box<dyn std::error::Error>> {
        let err = "chr1\t100\textra".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of fields in query record: expected 2 fields, found 3 fields"
        );
        Ok(())
    }

    #[test]
    fn test_non_numeric_position_is_retained() -> Result<(), Box<dyn std::error::Error>> {
        let query = "chr1\tnot-a-number".parse::<Record>()?;

        assert_eq!(query.position(), "not-a-number");
        assert!(query.numeric_position().is_err());

        Ok(())
    }

    #[test]
    pub fn test_query_record_display() -> Result<(), Box<dyn std::error::Error>> {
        let query = "chr1\t100".parse::<Record>()?;
        assert_eq!(query.to_string(), "chr1\t100");
        Ok(())
    }
}
