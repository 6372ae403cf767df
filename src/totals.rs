use crate::types::*;
use log::{debug, info};
use ndarray::Axis;

/// Totals cells to blank out after aggregation
///
/// Some published versions of the KEGG binary table leave the "Total Pathways"
/// cell of particular genes empty. Each GeneID listed here gets a missing value
/// in that column; its membership cells and the "Total Genes" row are not
/// affected. GeneIDs not present in the matrix are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TotalsPolicy {
    pub cleared_gene_totals: Vec<String>,
}

impl TotalsPolicy {
    pub fn clearing<I, S>(gene_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cleared_gene_totals: gene_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Appends the "Total Pathways" column and the "Total Genes" row.
///
/// The grand total is the sum of all per-gene totals, taken before any cell
/// is cleared by `policy`.
pub fn append_totals(matrix: IncidenceMatrix, policy: &TotalsPolicy) -> TotalledMatrix {
    let counts = matrix.cells.mapv(u32::from);
    let per_gene = counts.sum_axis(Axis(1));
    let per_pathway = counts.sum_axis(Axis(0));
    let grand_total = per_gene.sum();

    let mut gene_totals: Vec<Option<u32>> = per_gene.iter().copied().map(Some).collect();
    for gene_id in &policy.cleared_gene_totals {
        match matrix.genes.iter().position(|g| g == gene_id) {
            Some(row) => {
                debug!("Clearing {} for GeneID {}", TOTAL_PATHWAYS_COLUMN, gene_id);
                gene_totals[row] = None;
            }
            None => debug!("GeneID {} not in matrix, nothing to clear", gene_id),
        }
    }

    info!("{} gene/pathway associations in total", grand_total);

    TotalledMatrix {
        matrix,
        gene_totals,
        pathway_totals: per_pathway.to_vec(),
        grand_total,
    }
}
