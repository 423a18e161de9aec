//! `annofile` is a crate for reading genomic feature annotation tables and
//! annotating coordinates against them.
//!
//! The crate provides two main points of entry:
//!
//! - Parsing and reading feature annotation tables directly.
//! - Providing a machine for annotating coordinates given an annotation
//!   table.
//!
//! Since the main purpose of an annotation table is to resolve coordinates to
//! the features they fall against, we expect that most users will be
//! interested in the latter functionality. However, we have exposed the
//! former functionality in the event that it is needed for some other
//! purpose.
//!
//! ## Parsing and reading annotation tables
//!
//! If you're interested in parsing and reading annotation tables directly,
//! you can use the [`Reader`] facility to accomplish that. Annotation tables
//! are tab-separated with a fixed ten-column layout (see
//! [`record::feature::Record`]); most users will want to read the parsed
//! [feature records](crate::record::feature::Record) using
//! [`Reader::features()`](crate::Reader::features()).
//!
//! ```
//! use annofile as anno;
//!
//! let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
//! let mut reader = anno::Reader::new(&data[..]);
//!
//! for result in reader.features() {
//!     let record = result?;
//!     println!(
//!         "{}:{}-{} is {}",
//!         record.chromosome(),
//!         record.start(),
//!         record.end(),
//!         record.annotation()
//!     );
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Annotation Machine
//!
//! Most often, users won't want to deal with the accounting that goes into
//! grouping and searching feature boundaries manually. To that end, this
//! crate provides the [`annotate::Machine`] facility to ease the experience
//! of annotating coordinates.
//!
//! A [`annotate::Machine`] resolves a (chromosome, position) query to the
//! annotation of the feature whose boundary matches the position (see
//! [`annotate::index::Index::search()`] for the exact matching rules). The
//! machine is built once from the full annotation table and is read-only
//! thereafter; queries that cannot be resolved unambiguously degrade to
//! typed sentinel outcomes (see [`annotate::Annotation`]) rather than
//! failing the run.
//!
//! A [`annotate::Machine`] cannot be instantiated directly. Instead, you
//! should use [`annotate::machine::Builder`] and the associated
//! [`annotate::machine::Builder::try_build_from()`] method to construct one.
//!
//! ```
//! use annofile as anno;
//! use anno::record::query;
//!
//! let data = b"chr1\tNM_0001.1\t1\t100\t200\t0\t+\t0\tgeneA\t0";
//! let reader = anno::Reader::new(&data[..]);
//! let machine = anno::annotate::machine::Builder::default().try_build_from(reader)?;
//!
//! let query = "chr1\t100".parse::<query::Record>()?;
//! assert_eq!(machine.annotate(&query).to_string(), "geneA");
//!
//! let query = "chr2\t100".parse::<query::Record>()?;
//! assert_eq!(
//!     machine.annotate(&query).to_string(),
//!     "chromosome not found in annotation file"
//! );
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod annotate;
pub mod reader;
pub mod record;
pub mod writer;

pub use self::reader::Reader;
pub use self::writer::Writer;
