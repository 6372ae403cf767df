use pathway_matrix::config::{self, PipelineConfig, GENES_FILE, PATHWAY_FILE};
use pathway_matrix::error::PathwayError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EXPECTED: &str = "\
GeneID,hsa00010: Glycolysis / Gluconeogenesis,hsa00020: Citrate cycle (TCA cycle),\"hsa00280: Valine, leucine and isoleucine degradation\",hsa04210: Apoptosis,Total Pathways
3101,1,1,0,0,2
5211,1,0,0,1,2
1431,0,1,0,0,1
7127,0,0,0,1,
Total Genes,2,2,0,2,6
";

fn stage_inputs(dir: &Path) {
    fs::copy("tests/data/human_pathways_all.csv", dir.join(PATHWAY_FILE)).unwrap();
    fs::copy("tests/data/human_pathways_genes.csv", dir.join(GENES_FILE)).unwrap();
}

#[test]
fn test_run_writes_binary_table() {
    let tmp = TempDir::new().unwrap();
    stage_inputs(tmp.path());
    let config = PipelineConfig::kegg_human().in_dir(tmp.path());

    let summary = config::run(&config).unwrap();
    assert_eq!(summary.pathways, 4);
    assert_eq!(summary.records, 7);
    assert_eq!(summary.genes, 4);
    assert_eq!(summary.associations, 6);

    let written = fs::read_to_string(&config.out_file).unwrap();
    assert_eq!(written, EXPECTED);
    assert!(tmp.path().join("out_files").is_dir());
}

#[test]
fn test_default_policy_keeps_every_total() {
    let tmp = TempDir::new().unwrap();
    stage_inputs(tmp.path());
    let config = PipelineConfig::default().in_dir(tmp.path());

    config::run(&config).unwrap();
    let written = fs::read_to_string(&config.out_file).unwrap();
    assert!(written.lines().any(|line| line == "7127,0,0,0,1,1"));
}

#[test]
fn test_run_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    stage_inputs(tmp.path());
    let config = PipelineConfig::kegg_human().in_dir(tmp.path());

    config::run(&config).unwrap();
    let first = fs::read(&config.out_file).unwrap();
    config::run(&config).unwrap();
    let second = fs::read(&config.out_file).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_catalog_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::copy(
        "tests/data/human_pathways_genes.csv",
        tmp.path().join(GENES_FILE),
    )
    .unwrap();
    let config = PipelineConfig::kegg_human().in_dir(tmp.path());

    let err = config::run(&config).unwrap_err();
    assert!(matches!(err, PathwayError::MissingFile { ref path } if path == &config.pathway_file));
    assert!(err.to_string().contains(PATHWAY_FILE));
    assert!(!config.out_file.exists());
}

#[test]
fn test_bad_gene_id_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    stage_inputs(tmp.path());
    fs::write(
        tmp.path().join(GENES_FILE),
        "PathID,GeneID\nhsa00010,hsa:3101\nhsa00020,3102\n",
    )
    .unwrap();
    let config = PipelineConfig::kegg_human().in_dir(tmp.path());

    let err = config::run(&config).unwrap_err();
    assert!(matches!(err, PathwayError::InvalidGeneId { line: 3, .. }));
    assert!(!config.out_file.exists());
    assert!(!tmp.path().join("out_files").exists());
}

#[test]
fn test_unwritable_output() {
    let tmp = TempDir::new().unwrap();
    stage_inputs(tmp.path());
    // a plain file where the output directory should go
    fs::write(tmp.path().join("out_files"), "").unwrap();
    let config = PipelineConfig::kegg_human().in_dir(tmp.path());

    let err = config::run(&config).unwrap_err();
    assert!(matches!(err, PathwayError::Write { .. }));
}
