use ndarray::Array2;
use std::collections::HashMap;

/// Pathway identifier column, shared by both input files
pub const PATH_ID_COLUMN: &str = "PathID";

/// Pathway name column of the catalog file
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Gene identifier column of the membership file, and first column of the output
pub const GENE_ID_COLUMN: &str = "GeneID";

/// Row-wise total column appended to the matrix
pub const TOTAL_PATHWAYS_COLUMN: &str = "Total Pathways";

/// Label of the column-wise total row appended to the matrix
pub const TOTAL_GENES_ROW: &str = "Total Genes";

/// One row of the pathway catalog, with its description already truncated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayCatalogEntry {
    pub path_id: String,
    pub description: String,
}

impl PathwayCatalogEntry {
    /// Column label used in the incidence matrix: `<PathID>: <Description>`
    pub fn label(&self) -> String {
        format!("{}: {}", self.path_id, self.description)
    }
}

/// Ordered pathway catalog with a PathID lookup
///
/// Entries keep the order in which their PathID first appeared in the
/// catalog file; that order is the column order of the matrix.
#[derive(Debug, Clone, Default)]
pub struct PathwayCatalog {
    entries: Vec<PathwayCatalogEntry>,
    index: HashMap<String, usize>,
}

impl PathwayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning true if the PathID was already present.
    ///
    /// A repeated PathID keeps its original position and takes the new description.
    pub fn insert(&mut self, entry: PathwayCatalogEntry) -> bool {
        match self.index.get(&entry.path_id) {
            Some(&idx) => {
                self.entries[idx] = entry;
                true
            }
            None => {
                self.index.insert(entry.path_id.clone(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    /// Column index of a PathID
    pub fn position(&self, path_id: &str) -> Option<usize> {
        self.index.get(path_id).copied()
    }

    /// Label for a PathID
    pub fn label(&self, path_id: &str) -> Option<String> {
        self.position(path_id).map(|idx| self.entries[idx].label())
    }

    /// All labels, in column order
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(PathwayCatalogEntry::label).collect()
    }

    pub fn entries(&self) -> &[PathwayCatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One (pathway, gene) observation from the membership file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MembershipRecord {
    pub path_id: String,
    /// GeneID with the organism prefix already stripped
    pub gene_id: String,
    /// 1-based line in the source file (header is line 1)
    pub line: usize,
}

/// Dense binary gene × pathway matrix
///
/// Rows follow first-seen GeneID order, columns follow catalog order.
/// Every cell is 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    pub genes: Vec<String>,
    pub pathways: Vec<String>,
    pub cells: Array2<u8>,
}

impl IncidenceMatrix {
    pub fn gene_count(&self) -> usize {
        self.genes.len()
    }

    pub fn pathway_count(&self) -> usize {
        self.pathways.len()
    }

    /// Cell value for a gene and pathway label, if both exist
    pub fn get(&self, gene_id: &str, label: &str) -> Option<u8> {
        let row = self.genes.iter().position(|g| g == gene_id)?;
        let col = self.pathways.iter().position(|p| p == label)?;
        Some(self.cells[[row, col]])
    }
}

/// Incidence matrix with its "Total Pathways" column and "Total Genes" row
#[derive(Debug, Clone, PartialEq)]
pub struct TotalledMatrix {
    pub matrix: IncidenceMatrix,
    /// "Total Pathways" per gene; `None` where the cell was cleared
    pub gene_totals: Vec<Option<u32>>,
    /// "Total Genes" per pathway column
    pub pathway_totals: Vec<u32>,
    /// "Total Genes" entry of the "Total Pathways" column
    pub grand_total: u32,
}
