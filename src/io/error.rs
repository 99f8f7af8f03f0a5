//! Error types for parsing, reconstruction and export
//!
//! Every reconstruction failure is an input precondition violation: the
//! pipeline assumes a unique, consistent, square tiling and stops at the
//! first sign that the input breaks that guarantee.

use crate::spatial::tiles::{Fingerprint, TileId};
use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save an exported image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Puzzle or motif text could not be decoded
    Parse {
        /// 1-based line number where decoding failed
        line: usize,
        /// Description of the problem
        reason: String,
    },

    /// A tile or tile set violates the geometry requirements
    InvalidTile {
        /// Offending tile, when one can be named
        tile: Option<TileId>,
        /// Description of the problem
        reason: String,
    },

    /// A border fingerprint is shared by more than two tiles
    IndexInconsistency {
        /// The overloaded fingerprint
        fingerprint: Fingerprint,
        /// Every tile presenting it, including the rejected one
        tiles: Vec<TileId>,
    },

    /// Tile topology does not describe a square mosaic
    ///
    /// Raised for tiles with fewer than two matched edges and for corner
    /// counts other than four.
    ClassificationInconsistency {
        /// Description of the problem
        reason: String,
    },

    /// Zero or several orientations satisfy a required match
    OrientationAmbiguity {
        /// Tile being oriented
        tile: TileId,
        /// The constraint that had to be satisfied
        requirement: String,
        /// Number of orientations that satisfied it
        matches: usize,
    },

    /// The grid walk did not close into a perfect square
    AssemblyShape {
        /// Description of the problem
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced an invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Parse { line, reason } => {
                write!(f, "Parse error on line {line}: {reason}")
            }
            Self::InvalidTile { tile, reason } => match tile {
                Some(id) => write!(f, "Invalid tile {id}: {reason}"),
                None => write!(f, "Invalid tile set: {reason}"),
            },
            Self::IndexInconsistency { fingerprint, tiles } => {
                let ids: Vec<String> = tiles.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Index inconsistency: fingerprint {fingerprint} is shared by tiles {}",
                    ids.join(", ")
                )
            }
            Self::ClassificationInconsistency { reason } => {
                write!(f, "Classification inconsistency: {reason}")
            }
            Self::OrientationAmbiguity {
                tile,
                requirement,
                matches,
            } => {
                write!(
                    f,
                    "Orientation ambiguity: {matches} orientations of tile {tile} satisfy '{requirement}' (expected exactly 1)"
                )
            }
            Self::AssemblyShape { reason } => {
                write!(f, "Assembly shape error: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a parse error at a 1-based line number
pub fn parse_error(line: usize, reason: &impl ToString) -> MosaicError {
    MosaicError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Create an assembly shape error
pub fn assembly_error(reason: &impl ToString) -> MosaicError {
    MosaicError::AssemblyShape {
        reason: reason.to_string(),
    }
}

/// Create a classification error
pub fn classification_error(reason: &impl ToString) -> MosaicError {
    MosaicError::ClassificationInconsistency {
        reason: reason.to_string(),
    }
}
