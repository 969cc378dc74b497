use std::{io, num::ParseFloatError, path::PathBuf};
use thiserror::Error;

/// Errors raised while reading a measurement log.
///
/// Line numbers are 1-based. [`crate::record::Record::parse`] does not know
/// which line it is parsing and reports `0`, which
/// [`crate::averager::LineAverager::add_line`] replaces.
#[derive(Error, Debug)]
pub enum AverageError {
    /// The input file could not be opened.
    #[error("failed to open {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be read from the input.
    #[error("failed to read line {line_no}")]
    Read {
        line_no: usize,
        #[source]
        source: io::Error,
    },

    /// The line has no field at the expected index.
    #[error("line {line_no} has {n_fields} fields, but field {index} is required")]
    FieldIndex {
        line_no: usize,
        index: usize,
        n_fields: usize,
    },

    /// The field at the expected index is not a floating-point number.
    #[error("line {line_no} field {index} is not a number: {field:?}")]
    NumericParse {
        line_no: usize,
        index: usize,
        field: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("no records to average")]
    EmptyInput,
}

impl AverageError {
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::FieldIndex {
                index, n_fields, ..
            } => Self::FieldIndex {
                line_no,
                index,
                n_fields,
            },
            Self::NumericParse {
                index,
                field,
                source,
                ..
            } => Self::NumericParse {
                line_no,
                index,
                field,
                source,
            },
            other => other,
        }
    }
}
