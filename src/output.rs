use crate::error::{PathwayError, Result};
use crate::types::*;
use log::info;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Checks that every input path is an existing regular file.
///
/// Paths are checked in order and the first missing one is reported.
pub fn check_input_files<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        if !path.as_ref().is_file() {
            return Err(PathwayError::missing_file(path));
        }
    }
    Ok(())
}

/// Converts a totalled matrix to the output table.
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with:
///   - "GeneID": one row per gene, then the "Total Genes" row
///   - one UInt32 column per pathway label, in catalog order
///   - "Total Pathways": per-gene totals (null where cleared), then the grand total
pub fn to_frame(totalled: &TotalledMatrix) -> Result<DataFrame> {
    let matrix = &totalled.matrix;
    let mut columns = Vec::with_capacity(matrix.pathway_count() + 2);

    let gene_ids: Vec<&str> = matrix
        .genes
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(TOTAL_GENES_ROW))
        .collect();
    columns.push(Column::new(GENE_ID_COLUMN.into(), gene_ids));

    for (col, label) in matrix.pathways.iter().enumerate() {
        let values: Vec<u32> = matrix
            .cells
            .column(col)
            .iter()
            .map(|&cell| u32::from(cell))
            .chain(std::iter::once(totalled.pathway_totals[col]))
            .collect();
        columns.push(Column::new(label.as_str().into(), values));
    }

    let totals: Vec<Option<u32>> = totalled
        .gene_totals
        .iter()
        .copied()
        .chain(std::iter::once(Some(totalled.grand_total)))
        .collect();
    columns.push(Column::new(TOTAL_PATHWAYS_COLUMN.into(), totals));

    Ok(DataFrame::new(columns)?)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

/// Writes a table as CSV, creating parent directories as needed.
///
/// The data goes to a sibling `.partial` file first and is renamed into
/// place, so `path` only ever holds a complete table.
///
/// # Errors
/// * `PathwayError::Write` if the directory, file, or rename fails
pub fn write_csv(df: &mut DataFrame, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PathwayError::write(parent, e))?;
    }

    let staging = staging_path(path);
    let written = File::create(&staging)
        .map_err(|e| PathwayError::write(&staging, e))
        .and_then(|mut file| {
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(df)
                .map_err(|e| PathwayError::write(&staging, e))
        })
        .and_then(|_| fs::rename(&staging, path).map_err(|e| PathwayError::write(path, e)));

    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written?;

    info!(
        "{} rows x {} columns written to {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(())
}

/// Writes the totalled incidence matrix to `path` as CSV.
pub fn write_matrix(totalled: &TotalledMatrix, path: impl AsRef<Path>) -> Result<()> {
    let mut df = to_frame(totalled)?;
    write_csv(&mut df, path)
}
