//! A per-chromosome index of feature boundaries.
//!
//! An [`Index`] holds one chromosome's feature boundaries as a flat, sorted
//! sequence of positions, each carrying the annotation of the feature it was
//! taken from. Lookups are boundary-point searches: a query position is
//! matched against the recorded `start` and `end` values themselves, not
//! tested for containment within `[start, end]`.

use crate::record::Position;
use crate::record::feature;

////////////////////////////////////////////////////////////////////////////////////////
// Boundaries
////////////////////////////////////////////////////////////////////////////////////////

/// A single feature boundary within an [`Index`].
///
/// Every feature record contributes two boundaries: one at its start
/// position and one at its end position, both carrying the record's
/// annotation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Boundary {
    /// The position of the boundary upon the chromosome.
    position: Position,

    /// The annotation of the feature the boundary was taken from.
    annotation: String,
}

impl Boundary {
    /// Returns the position of the boundary upon the chromosome.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the annotation of the feature the boundary was taken from.
    pub fn annotation(&self) -> &str {
        &self.annotation
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Searches
////////////////////////////////////////////////////////////////////////////////////////

/// The result of searching an [`Index`] for a position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Search<'a> {
    /// Exactly one boundary sits at the searched position; its annotation is
    /// carried.
    Exact(&'a str),

    /// No boundary sits at the searched position; the annotation of the
    /// nearest boundary after it is carried.
    Following(&'a str),

    /// More than one boundary sits at the searched position; the number of
    /// such boundaries is carried.
    Ambiguous(usize),

    /// The searched position lies past the last boundary in the index.
    BeyondEnd,
}

////////////////////////////////////////////////////////////////////////////////////////
// Indexes
////////////////////////////////////////////////////////////////////////////////////////

/// A per-chromosome index of feature boundaries, sorted ascending by
/// position.
///
/// Duplicate positions are retained: they are what makes ambiguity
/// detection possible during [`Index::search()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Index {
    /// The boundary entries, sorted ascending by position.
    boundaries: Vec<Boundary>,
}

impl Index {
    /// Creates a new [`Index`] from one chromosome's feature records.
    ///
    /// All start boundaries are laid down first in record order, then all
    /// end boundaries in record order, and the whole sequence is stably
    /// sorted by position. Entries with equal positions therefore keep
    /// first-seen-first order, start-derived entries ahead of end-derived
    /// ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::annotate::index::Index;
    /// use annofile::record::feature;
    ///
    /// let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0"
    ///     .parse::<feature::Record>()?;
    ///
    /// let index = Index::new(&[record]);
    /// assert_eq!(index.len(), 2);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(records: &[feature::Record]) -> Index {
        let mut boundaries = Vec::with_capacity(records.len() * 2);

        for record in records {
            boundaries.push(Boundary {
                position: record.start(),
                annotation: record.annotation().to_string(),
            });
        }

        for record in records {
            boundaries.push(Boundary {
                position: record.end(),
                annotation: record.annotation().to_string(),
            });
        }

        // `sort_by_key` is stable, which is what keeps the tie-break order
        // above deterministic.
        boundaries.sort_by_key(|boundary| boundary.position);

        Index { boundaries }
    }

    /// Returns the boundary entries, sorted ascending by position.
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Returns the number of boundary entries.
    ///
    /// This is always exactly twice the number of feature records the index
    /// was built from.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Returns whether the index contains no boundaries.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Searches the index for a position.
    ///
    /// Both insertion points for the position are computed: `left`, the
    /// first entry at or after the position, and `right`, the first entry
    /// strictly after it. `right - left` is then the number of boundaries
    /// sitting exactly at the position, and the search classifies on that
    /// count:
    ///
    /// - a count of one is an unambiguous [`Search::Exact`] match;
    /// - a count of two or more is [`Search::Ambiguous`];
    /// - a count of zero resolves to the nearest boundary after the
    ///   position ([`Search::Following`]), or to [`Search::BeyondEnd`] when
    ///   no such boundary exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use annofile::annotate::index::Index;
    /// use annofile::annotate::index::Search;
    /// use annofile::record::feature;
    ///
    /// let record = "chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0"
    ///     .parse::<feature::Record>()?;
    /// let index = Index::new(&[record]);
    ///
    /// assert_eq!(index.search(100), Search::Exact("geneA"));
    /// assert_eq!(index.search(150), Search::Following("geneA"));
    /// assert_eq!(index.search(201), Search::BeyondEnd);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn search(&self, position: Position) -> Search<'_> {
        let left = self
            .boundaries
            .partition_point(|boundary| boundary.position < position);
        let right = self
            .boundaries
            .partition_point(|boundary| boundary.position <= position);

        match right - left {
            0 => match self.boundaries.get(left) {
                Some(boundary) => Search::Following(boundary.annotation()),
                None => Search::BeyondEnd,
            },
            1 => Search::Exact(self.boundaries[left].annotation()),
            count => Search::Ambiguous(count),
        }
    }
}
