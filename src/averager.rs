use crate::error::AverageError;
use crate::record::Record;
use crate::stats::{Accumulators, Summary};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

pub struct LineAverager {
    acc: Accumulators,
}

impl LineAverager {
    pub fn new() -> Self {
        Self {
            acc: Accumulators::new(),
        }
    }

    /// Parse one line and add its samples.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn add_line(&mut self, line_no: usize, line: &str) -> Result<(), AverageError> {
        let record = Record::parse(line).map_err(|err| err.at_line(line_no))?;
        log::trace!("line {line_no}: {record:?}");
        self.acc.push(record);
        Ok(())
    }

    /// Add every line of `reader`, stopping at the first malformed one.
    pub fn add_reader<R: BufRead>(&mut self, reader: R) -> Result<(), AverageError> {
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| AverageError::Read { line_no, source })?;
            self.add_line(line_no, &line)?;
        }
        Ok(())
    }

    pub fn add_file<P: AsRef<Path>>(&mut self, file: P) -> Result<(), AverageError> {
        let path = file.as_ref();
        let file = File::open(path).map_err(|source| AverageError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        self.add_reader(reader)?;
        log::info!("read {} records from {path:?}", self.acc.len());
        Ok(())
    }

    /// # Errors
    /// Returns [`AverageError::EmptyInput`] if no line was added.
    pub fn summary(&self) -> Result<Summary, AverageError> {
        self.acc.summary().ok_or(AverageError::EmptyInput)
    }
}
