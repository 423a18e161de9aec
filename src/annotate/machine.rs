//! A machine for annotating coordinates within a reference genome.

use std::collections::HashMap;

use crate::annotate::Annotation;
use crate::annotate::index;
use crate::record::Chromosome;
use crate::record::Position;
use crate::record::query;

pub mod builder;

pub use builder::Builder;

/// A machine for resolving (chromosome, position) queries to feature
/// annotations.
///
/// The machine holds one boundary [`index::Index`] per chromosome, built
/// once from the full annotation table and read-only afterward. Queries are
/// independent of one another and never mutate the machine.
///
/// Generally, you will want to use a [`builder::Builder`] to construct one
/// of these.
#[derive(Debug)]
pub struct Machine {
    /// The inner per-chromosome boundary indexes.
    inner: HashMap<Chromosome, index::Index>,
}

impl Machine {
    /// Annotates a query, degrading every per-query failure into a sentinel
    /// outcome.
    ///
    /// The query's position string is interpreted as a number here, at match
    /// time: a malformed token yields [`Annotation::InvalidPosition`] for
    /// this row alone. All other outcomes are those of
    /// [`Machine::annotate_position()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile as anno;
    /// use anno::record::query;
    ///
    /// let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
    /// let reader = anno::Reader::new(&data[..]);
    /// let machine = anno::annotate::machine::Builder::default().try_build_from(reader)?;
    ///
    /// let query = query::Record::new("chr1", "100");
    /// assert_eq!(machine.annotate(&query).to_string(), "geneA");
    ///
    /// let query = query::Record::new("chr1", "one-hundred");
    /// assert_eq!(machine.annotate(&query).to_string(), "error - invalid position");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn annotate(&self, query: &query::Record) -> Annotation {
        let position = match query.numeric_position() {
            Ok(position) => position,
            Err(_) => return Annotation::InvalidPosition(query.position().to_string()),
        };

        self.annotate_position(query.chromosome(), position)
    }

    /// Annotates an already-parsed position upon a chromosome.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile as anno;
    /// use anno::annotate::Annotation;
    ///
    /// let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
    /// let reader = anno::Reader::new(&data[..]);
    /// let machine = anno::annotate::machine::Builder::default().try_build_from(reader)?;
    ///
    /// assert_eq!(
    ///     machine.annotate_position("chr1", 100),
    ///     Annotation::Feature(String::from("geneA"))
    /// );
    /// assert_eq!(
    ///     machine.annotate_position("chr9", 100),
    ///     Annotation::ChromosomeNotFound
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn annotate_position(&self, chromosome: &str, position: Position) -> Annotation {
        let index = match self.inner.get(chromosome) {
            Some(index) => index,
            None => return Annotation::ChromosomeNotFound,
        };

        match index.search(position) {
            index::Search::Exact(annotation) => Annotation::Feature(annotation.to_string()),
            index::Search::Following(annotation) => Annotation::Feature(annotation.to_string()),
            index::Search::Ambiguous(count) => Annotation::MoreThanOneMatch(count),
            index::Search::BeyondEnd => Annotation::BeyondKnownRange,
        }
    }

    /// Gets the boundary index for a chromosome, if the chromosome appears
    /// in the annotation table the machine was built from.
    pub fn index(&self, chromosome: &str) -> Option<&index::Index> {
        self.inner.get(chromosome)
    }

    /// Returns an iterator over the chromosomes known to the machine, in no
    /// particular order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &Chromosome> {
        self.inner.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;
    use crate::annotate::machine;

    /// Builds a machine over a small two-chromosome annotation table.
    fn machine() -> Machine {
        let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0\n\
                     chr1\tNM_0002.1\t1\t300\t400\t0\t-\t0\tgeneB\t0\n\
                     chr2\tNM_0003.1\t1\t100\t300\t0\t+\t0\tgeneC\t0\n\
                     chr2\tNM_0004.1\t1\t300\t500\t0\t+\t0\tgeneD\t0";
        let reader = Reader::new(&data[..]);

        machine::Builder::default().try_build_from(reader).unwrap()
    }

    #[test]
    pub fn test_annotating_an_exact_boundary() {
        let machine = machine();

        let query = query::Record::new("chr1", "100");
        assert_eq!(
            machine.annotate(&query),
            Annotation::Feature(String::from("geneA"))
        );

        let query = query::Record::new("chr1", "400");
        assert_eq!(
            machine.annotate(&query),
            Annotation::Feature(String::from("geneB"))
        );
    }

    #[test]
    pub fn test_annotating_between_boundaries() {
        let machine = machine();

        // No boundary sits at 150; the nearest following boundary (geneA's
        // end at 200) resolves the query.
        let query = query::Record::new("chr1", "150");
        assert_eq!(
            machine.annotate(&query),
            Annotation::Feature(String::from("geneA"))
        );

        // 250 falls between geneA's end and geneB's start; the boundary
        // search resolves forward to geneB without any containment test.
        let query = query::Record::new("chr1", "250");
        assert_eq!(
            machine.annotate(&query),
            Annotation::Feature(String::from("geneB"))
        );
    }

    #[test]
    pub fn test_annotating_a_shared_boundary_is_ambiguous() {
        let machine = machine();

        // geneC ends at 300 and geneD starts at 300.
        let query = query::Record::new("chr2", "300");
        assert_eq!(machine.annotate(&query), Annotation::MoreThanOneMatch(2));
        assert_eq!(
            machine.annotate(&query).to_string(),
            "error - more than one match"
        );
    }

    #[test]
    pub fn test_annotating_an_unknown_chromosome() {
        let machine = machine();

        let query = query::Record::new("chr9", "100");
        assert_eq!(machine.annotate(&query), Annotation::ChromosomeNotFound);
        assert_eq!(
            machine.annotate(&query).to_string(),
            "chromosome not found in annotation file"
        );
    }

    #[test]
    pub fn test_annotating_past_the_known_range() {
        let machine = machine();

        let query = query::Record::new("chr1", "401");
        assert_eq!(machine.annotate(&query), Annotation::BeyondKnownRange);
        assert_eq!(
            machine.annotate(&query).to_string(),
            "position beyond known range"
        );
    }

    #[test]
    pub fn test_annotating_an_invalid_position() {
        let machine = machine();

        let query = query::Record::new("chr1", "12a");
        assert_eq!(
            machine.annotate(&query),
            Annotation::InvalidPosition(String::from("12a"))
        );
        assert_eq!(
            machine.annotate(&query).to_string(),
            "error - invalid position"
        );
    }

    #[test]
    pub fn test_chromosomes_and_indexes() {
        let machine = machine();

        let mut chromosomes = machine.chromosomes().collect::<Vec<_>>();
        chromosomes.sort();
        assert_eq!(chromosomes, ["chr1", "chr2"]);

        assert_eq!(machine.index("chr1").unwrap().len(), 4);
        assert_eq!(machine.index("chr2").unwrap().len(), 4);
        assert!(machine.index("chr9").is_none());
    }
}
