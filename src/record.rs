use crate::error::AverageError;

/// Character separating the fields of a line.
///
/// Runs of separators produce empty fields, so indices are only stable for
/// lines written with exactly one space between fields.
pub const DELIMITER: char = ' ';

/// Index of the time field.
pub const TIME_FIELD: usize = 2;
/// Index of the percentage field.
pub const PERCENTAGE_FIELD: usize = 8;

/// Time and percentage samples of one log line.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Record {
    pub time: f64,
    pub percentage: f64,
}

impl Record {
    /// Parse a [`Record`] from a single line (without its terminator).
    ///
    /// # Errors
    /// Returns [`AverageError::FieldIndex`] if the line has too few fields and
    /// [`AverageError::NumericParse`] if a field is not a number. The line
    /// number of the returned error is `0`.
    pub fn parse(line: &str) -> Result<Self, AverageError> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();

        let time = parse_field(&fields, TIME_FIELD)?;
        let percentage = parse_field(&fields, PERCENTAGE_FIELD)?;

        Ok(Self { time, percentage })
    }
}

fn parse_field(fields: &[&str], index: usize) -> Result<f64, AverageError> {
    let field = fields.get(index).ok_or(AverageError::FieldIndex {
        line_no: 0,
        index,
        n_fields: fields.len(),
    })?;
    field
        .trim()
        .parse()
        .map_err(|source| AverageError::NumericParse {
            line_no: 0,
            index,
            field: field.to_string(),
            source,
        })
}
