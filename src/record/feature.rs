//! A feature record within an annotation table.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::record::Chromosome;
use crate::record::Position;

/// The delimiter between fields in a feature record.
pub const DELIMITER: char = '\t';

/// The number of expected fields in a feature record.
pub const NUM_FIELDS: usize = 10;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error associated with parsing a feature record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields in the record.
    IncorrectNumberOfFields(usize),

    /// An invalid start position.
    InvalidStart(ParseIntError),

    /// An invalid end position.
    InvalidEnd(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(fields) => write!(
                f,
                "invalid number of fields in feature record: expected {} fields, found {} fields",
                NUM_FIELDS, fields
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start position: {}", err),
            ParseError::InvalidEnd(err) => write!(f, "invalid end position: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Records
////////////////////////////////////////////////////////////////////////////////////////

/// A feature record within an annotation table.
///
/// Records follow a fixed ten-column, tab-separated layout: chromosome,
/// transcript, coding flag, start, end, score, strand, score, annotation,
/// and a trailing column. Only the chromosome, the two positions, and the
/// annotation participate in coordinate annotation; the remaining columns
/// are retained untyped so that a record renders back out exactly as it was
/// read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The chromosome upon which the feature is located.
    chromosome: Chromosome,

    /// The transcript name (passthrough).
    transcript: String,

    /// The coding flag (passthrough).
    coding: String,

    /// The start position of the feature.
    start: Position,

    /// The end position of the feature.
    end: Position,

    /// The first score column (passthrough).
    score_one: String,

    /// The strand (passthrough).
    strand: String,

    /// The second score column (passthrough).
    score_two: String,

    /// The annotation label of the feature.
    annotation: String,

    /// The trailing column (passthrough).
    misc: String,
}

impl Record {
    /// Returns the chromosome upon which the feature is located.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::feature::Record;
    ///
    /// let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0".parse::<Record>()?;
    /// assert_eq!(record.chromosome(), "chr1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Returns the start position of the feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::feature::Record;
    ///
    /// let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0".parse::<Record>()?;
    /// assert_eq!(record.start(), 100);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn start(&self) -> Position {
        self.start
    }

    /// Returns the end position of the feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::feature::Record;
    ///
    /// let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0".parse::<Record>()?;
    /// assert_eq!(record.end(), 200);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns the annotation label of the feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::record::feature::Record;
    ///
    /// let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0".parse::<Record>()?;
    /// assert_eq!(record.annotation(), "geneA");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn annotation(&self) -> &str {
        &self.annotation
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(DELIMITER).collect::<Vec<_>>();
        if parts.len() != NUM_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let start = parts[3].parse().map_err(ParseError::InvalidStart)?;
        let end = parts[4].parse().map_err(ParseError::InvalidEnd)?;

        Ok(Record {
            chromosome: parts[0].into(),
            transcript: parts[1].into(),
            coding: parts[2].into(),
            start,
            end,
            score_one: parts[5].into(),
            strand: parts[6].into(),
            score_two: parts[7].into(),
            annotation: parts[8].into(),
            misc: parts[9].into(),
        })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.start.to_string();
        let end = self.end.to_string();

        let parts = [
            self.chromosome.as_str(),
            self.transcript.as_str(),
            self.coding.as_str(),
            start.as_str(),
            end.as_str(),
            self.score_one.as_str(),
            self.strand.as_str(),
            self.score_two.as_str(),
            self.annotation.as_str(),
            self.misc.as_str(),
        ];

        write!(f, "{}", parts.join(DELIMITER.to_string().as_str()))
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_parsing_feature_record() -> Result<(), Box<dyn std::error::Error>> {
        let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0".parse::<Record>()?;

        assert_eq!(record.chromosome(), "chr1");
        assert_eq!(record.start(), 100);
        assert_eq!(record.end(), 200);
        assert_eq!(record.annotation(), "geneA");

        Ok(())
    }

    #[test]
    fn test_invalid_number_of_fields() -> Result<(), Box<dyn std::error::Error>> {
        let err = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA"
            .parse::<Record>()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of fields in feature record: expected 10 fields, found 9 fields"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_start() -> Result<(), Box<dyn std::error::Error>> {
        let err = "chr1\tNM_0001.1\t1\t?\t200\t0\t+\t0\tgeneA\t0"
            .parse::<Record>()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid start position: invalid digit found in string"
        );
        Ok(())
    }

    #[test]
    fn test_invalid_end() -> Result<(), Box<dyn std::error::Error>> {
        let err = "chr1\tNM_0001.1\t1\t100\t?\t0\t+\t0\tgeneA\t0"
            .parse::<Record>()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid end position: invalid digit found in string"
        );
        Ok(())
    }

    #[test]
    pub fn test_feature_record_display() -> Result<(), Box<dyn std::error::Error>> {
        let line = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
        let record = line.parse::<Record>()?;
        assert_eq!(record.to_string(), line);
        Ok(())
    }
}
