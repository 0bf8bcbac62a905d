// src/table/writer.rs

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Writer, WriterBuilder};

use crate::error::OutputError;
use crate::flatten::FlatRow;
use crate::schema::ColumnSchema;

/// CSV sink bound to one schema for its whole life.
///
/// The destination is opened and the header written on [`RowWriter::create`];
/// rows are projected onto the schema as they arrive. The file handle is held
/// until [`RowWriter::finish`] or drop.
pub struct RowWriter<'s> {
    writer: Writer<File>,
    schema: &'s ColumnSchema,
    path: PathBuf,
    rows: usize,
}

impl<'s> RowWriter<'s> {
    pub fn create<P: AsRef<Path>>(path: P, schema: &'s ColumnSchema) -> Result<Self, OutputError> {
        let path = path.as_ref().to_path_buf();
        let mut writer = WriterBuilder::new()
            .from_path(&path)
            .map_err(|source| OutputError::Create {
                path: path.clone(),
                source,
            })?;
        writer
            .write_record(schema.iter())
            .map_err(|source| OutputError::Csv {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            writer,
            schema,
            path,
            rows: 0,
        })
    }

    pub fn write_row(&mut self, row: &FlatRow) -> Result<(), OutputError> {
        self.writer
            .write_record(row.project(self.schema))
            .map_err(|source| OutputError::Csv {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    /// Flush and close; returns the number of data rows written.
    pub fn finish(mut self) -> Result<usize, OutputError> {
        self.writer.flush().map_err(|source| OutputError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.rows)
    }
}

/// Read back the header of a written file and compare it to `schema`.
/// Returns the number of data rows on success.
pub fn verify_header<P: AsRef<Path>>(path: P, schema: &ColumnSchema) -> Result<usize, OutputError> {
    let path = path.as_ref();
    let csv_err = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(csv_err)?;

    let found: Vec<String> = rdr
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();
    if found.as_slice() != schema.columns() {
        return Err(OutputError::HeaderMismatch {
            path: path.to_path_buf(),
            expected: schema.columns().to_vec(),
            found,
        });
    }

    let mut rows = 0;
    for record in rdr.records() {
        record.map_err(csv_err)?;
        rows += 1;
    }
    Ok(rows)
}
