//! Plain CSV persistence for matrices and vectors.
//!
//! A matrix file holds one line per row with comma separated values and no
//! header; the column count comes from the first line. A vector file is a
//! single line of comma separated values.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};

use crate::error::{Error, Result};
use crate::{Matrix, Vector};

fn reader<R: Read>(source: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .trim(Trim::All)
        .from_reader(source)
}

fn parse_record(record: &StringRecord, row: usize) -> Result<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .map(|(column, field)| {
            field.parse::<f64>().map_err(|_| Error::Parse {
                row,
                column,
                value: field.to_string(),
            })
        })
        .collect()
}

/// Reads a matrix from CSV text. Rows with a different length than the first are rejected.
pub fn read_matrix_from<R: Read>(source: R) -> Result<Matrix> {
    let mut reader = reader(source);
    let mut data = Vec::new();
    let mut rows = 0;
    let mut cols = 0;

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let values = parse_record(&record, row)?;
        if row == 0 {
            cols = values.len();
        }
        data.extend(values);
        rows += 1;
    }

    log::debug!("read {}x{} matrix", rows, cols);
    crate::matrix::from_shape_vec(rows, cols, data)
}

pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    read_matrix_from(File::open(path)?)
}

/// Reads a vector from the first line of CSV text.
pub fn read_vector_from<R: Read>(source: R) -> Result<Vector> {
    let mut reader = reader(source);
    let mut record = StringRecord::new();

    if !reader.read_record(&mut record)? {
        return Ok(Vector::zeros(0));
    }
    let values = parse_record(&record, 0)?;
    log::debug!("read vector of length {}", values.len());
    Ok(Vector::from(values))
}

pub fn read_vector<P: AsRef<Path>>(path: P) -> Result<Vector> {
    read_vector_from(File::open(path)?)
}

/// Writes one line per row. A matrix without columns writes nothing, so it
/// reads back as an empty `0 x 0` matrix.
pub fn write_matrix_to<W: Write>(sink: W, m: &Matrix) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    if m.ncols() > 0 {
        for row in m.rows() {
            writer.write_record(row.iter().map(|v| v.to_string()))?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn write_matrix<P: AsRef<Path>>(path: P, m: &Matrix) -> Result<()> {
    write_matrix_to(BufWriter::new(File::create(path)?), m)
}

pub fn write_vector_to<W: Write>(sink: W, v: &Vector) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);
    if !v.is_empty() {
        writer.write_record(v.iter().map(|x| x.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_vector<P: AsRef<Path>>(path: P, v: &Vector) -> Result<()> {
    write_vector_to(BufWriter::new(File::create(path)?), v)
}
