use crate::catalog::{load_catalog, DESCRIPTION_SEPARATOR};
use crate::error::Result;
use crate::matrix::{build_incidence_matrix, load_memberships, GENE_ID_SEPARATOR};
use crate::output::{check_input_files, write_matrix};
use crate::totals::{append_totals, TotalsPolicy};
use log::info;
use std::path::PathBuf;

/// Pathway catalog produced by getPathwayList
pub const PATHWAY_FILE: &str = "human_pathways_all.csv";

/// Gene/pathway list produced by getPathway_Gene
pub const GENES_FILE: &str = "human_pathways_genes.csv";

/// Binary pathway table
pub const OUT_FILE: &str = "./out_files/KEGG_binary_pathways.csv";

/// GeneIDs whose "Total Pathways" cell is left empty in the written table
pub const CLEARED_GENE_TOTALS: &[&str] = &["7127"];

/// Inputs, output and parsing rules for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub pathway_file: PathBuf,
    pub genes_file: PathBuf,
    pub out_file: PathBuf,
    pub description_separator: String,
    pub gene_id_separator: char,
    pub totals: TotalsPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pathway_file: PATHWAY_FILE.into(),
            genes_file: GENES_FILE.into(),
            out_file: OUT_FILE.into(),
            description_separator: DESCRIPTION_SEPARATOR.to_string(),
            gene_id_separator: GENE_ID_SEPARATOR,
            totals: TotalsPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// The configuration of the `binary-pathways` tool: default paths plus
    /// the cleared totals of `CLEARED_GENE_TOTALS`.
    pub fn kegg_human() -> Self {
        Self {
            totals: TotalsPolicy::clearing(CLEARED_GENE_TOTALS.iter().copied()),
            ..Self::default()
        }
    }

    /// Same rules, with every path resolved against `dir`
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.pathway_file = dir.join(&self.pathway_file);
        self.genes_file = dir.join(&self.genes_file);
        self.out_file = dir.join(&self.out_file);
        self
    }
}

/// Counts reported after a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    pub pathways: usize,
    pub records: usize,
    pub genes: usize,
    pub associations: u32,
    pub out_file: PathBuf,
}

/// Runs the whole transform: validate, load, build, total, write.
///
/// Nothing is written unless every earlier stage succeeds.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    check_input_files(&[&config.genes_file, &config.pathway_file])?;

    let catalog = load_catalog(&config.pathway_file, &config.description_separator)?;
    let records = load_memberships(&config.genes_file, config.gene_id_separator)?;

    let matrix = build_incidence_matrix(&catalog, &records)?;
    let totalled = append_totals(matrix, &config.totals);

    write_matrix(&totalled, &config.out_file)?;
    info!("Binary pathway table saved to {}", config.out_file.display());

    Ok(PipelineSummary {
        pathways: catalog.len(),
        records: records.len(),
        genes: totalled.matrix.gene_count(),
        associations: totalled.grand_total,
        out_file: config.out_file.clone(),
    })
}
