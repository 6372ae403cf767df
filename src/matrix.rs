use crate::catalog::read_table;
use crate::error::{PathwayError, Result};
use crate::types::*;
use log::info;
use ndarray::Array2;
use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Separator between the organism code and the gene number, as in "hsa:7157"
pub const GENE_ID_SEPARATOR: char = ':';

/// Strips the organism prefix from a KEGG gene identifier.
///
/// Returns the second `separator`-delimited segment, so "hsa:7157" yields
/// "7157". Returns `None` when there is no separator or the segment is empty.
pub fn strip_gene_prefix(gene_id: &str, separator: char) -> Option<&str> {
    gene_id
        .split(separator)
        .nth(1)
        .filter(|segment| !segment.is_empty())
}

/// Builds membership records from a DataFrame with "PathID" and "GeneID" columns.
///
/// # Errors
/// * `PathwayError::MalformedRecord` if a PathID or GeneID is missing
/// * `PathwayError::InvalidGeneId` if a GeneID has no organism prefix
/// * `PathwayError::Polars` if either column is absent or not a string column
pub fn memberships_from_frame(df: &DataFrame, separator: char) -> Result<Vec<MembershipRecord>> {
    let path_ids = df.column(PATH_ID_COLUMN)?.str()?;
    let gene_ids = df.column(GENE_ID_COLUMN)?.str()?;

    path_ids
        .into_iter()
        .zip(gene_ids)
        .enumerate()
        .map(|(idx, (path_id, gene_id))| -> Result<MembershipRecord> {
            let line = idx + 2;
            let path_id = path_id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| PathwayError::malformed_record(line, "empty PathID"))?;
            let raw_gene = gene_id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| PathwayError::malformed_record(line, "empty GeneID"))?;
            let gene_id = strip_gene_prefix(raw_gene, separator).ok_or_else(|| {
                PathwayError::InvalidGeneId {
                    line,
                    value: raw_gene.to_string(),
                }
            })?;

            Ok(MembershipRecord {
                path_id: path_id.to_string(),
                gene_id: gene_id.to_string(),
                line,
            })
        })
        .collect()
}

/// Loads the gene/pathway membership file.
///
/// # Arguments
/// * `path` - Path to the membership CSV, header with at least "PathID" and "GeneID"
/// * `separator` - Organism prefix separator, normally `GENE_ID_SEPARATOR`
///
/// # Errors
/// * `PathwayError::MissingColumn` if a required column is absent
/// * `PathwayError::MalformedRecord` / `PathwayError::InvalidGeneId` for bad rows
/// * `PathwayError::Polars` if the file cannot be parsed
pub fn load_memberships(path: impl AsRef<Path>, separator: char) -> Result<Vec<MembershipRecord>> {
    let path = path.as_ref();
    let df = read_table(path, &[PATH_ID_COLUMN, GENE_ID_COLUMN])?;
    let records = memberships_from_frame(&df, separator)?;
    info!("{} gene/pathway records loaded from {}", records.len(), path.display());
    Ok(records)
}

/// Builds the binary gene × pathway incidence matrix.
///
/// Rows are the unique GeneIDs in first-seen order, columns are every catalog
/// pathway in catalog order (pathways without members stay all-zero). Cells
/// are set rather than incremented, so repeated records have no effect.
///
/// # Errors
/// * `PathwayError::UnknownPathway` if a record's PathID is not in the catalog
pub fn build_incidence_matrix(
    catalog: &PathwayCatalog,
    records: &[MembershipRecord],
) -> Result<IncidenceMatrix> {
    let mut genes: Vec<String> = Vec::new();
    let mut gene_rows: HashMap<&str, usize> = HashMap::new();
    for record in records {
        gene_rows.entry(record.gene_id.as_str()).or_insert_with(|| {
            genes.push(record.gene_id.clone());
            genes.len() - 1
        });
    }

    let mut cells = Array2::<u8>::zeros((genes.len(), catalog.len()));
    for record in records {
        let col = catalog
            .position(&record.path_id)
            .ok_or_else(|| PathwayError::UnknownPathway {
                line: record.line,
                path_id: record.path_id.clone(),
            })?;
        let row = gene_rows[record.gene_id.as_str()];
        cells[[row, col]] = 1;
    }

    info!(
        "Incidence matrix built: {} genes x {} pathways",
        genes.len(),
        catalog.len()
    );

    Ok(IncidenceMatrix {
        genes,
        pathways: catalog.labels(),
        cells,
    })
}
