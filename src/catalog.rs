use crate::error::{PathwayError, Result};
use crate::types::*;
use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

/// Separator after which a KEGG pathway description carries the organism name
pub const DESCRIPTION_SEPARATOR: &str = " - ";

/// Reads a delimited file with a header row, keeping every column as a string.
///
/// Fails with `PathwayError::MissingColumn` if any of `required` is absent.
pub(crate) fn read_table(path: &Path, required: &[&str]) -> Result<DataFrame> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()?
        .collect()?;

    let names = df.get_column_names();
    for column in required {
        if !names.iter().any(|name| name.as_str() == *column) {
            return Err(PathwayError::missing_column(path, *column));
        }
    }

    Ok(df)
}

/// Truncates a pathway description at the first `separator`.
///
/// "Glycolysis / Gluconeogenesis - Homo sapiens (human)" becomes
/// "Glycolysis / Gluconeogenesis". Descriptions without the separator are
/// returned unchanged.
pub fn normalize_description<'a>(description: &'a str, separator: &str) -> &'a str {
    description
        .split_once(separator)
        .map_or(description, |(head, _)| head)
}

/// Builds a pathway catalog from a DataFrame with "PathID" and "Description" columns.
///
/// # Errors
/// * `PathwayError::MalformedRecord` if a PathID is missing
/// * `PathwayError::Polars` if either column is absent or not a string column
pub fn catalog_from_frame(df: &DataFrame, separator: &str) -> Result<PathwayCatalog> {
    let path_ids = df.column(PATH_ID_COLUMN)?.str()?;
    let descriptions = df.column(DESCRIPTION_COLUMN)?.str()?;

    let mut catalog = PathwayCatalog::new();
    for (idx, (path_id, description)) in path_ids.into_iter().zip(descriptions).enumerate() {
        let line = idx + 2;
        let path_id = match path_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(PathwayError::malformed_record(line, "empty PathID")),
        };
        let description = normalize_description(description.unwrap_or_default(), separator);

        let replaced = catalog.insert(PathwayCatalogEntry {
            path_id: path_id.to_string(),
            description: description.to_string(),
        });
        if replaced {
            warn!("PathID {} repeated at line {}, using the later description", path_id, line);
        }
    }

    Ok(catalog)
}

/// Loads the pathway catalog file.
///
/// The file needs a header with at least "PathID" and "Description"; any
/// other columns are ignored.
///
/// # Arguments
/// * `path` - Path to the catalog CSV
/// * `separator` - Description truncation point, normally `DESCRIPTION_SEPARATOR`
///
/// # Errors
/// * `PathwayError::MissingColumn` if a required column is absent
/// * `PathwayError::MalformedRecord` if a row has no PathID
/// * `PathwayError::Polars` if the file cannot be parsed
pub fn load_catalog(path: impl AsRef<Path>, separator: &str) -> Result<PathwayCatalog> {
    let path = path.as_ref();
    let df = read_table(path, &[PATH_ID_COLUMN, DESCRIPTION_COLUMN])?;
    let catalog = catalog_from_frame(&df, separator)?;
    info!("{} pathways loaded from {}", catalog.len(), path.display());
    Ok(catalog)
}
