use clap::Parser;
use log::info;
use pathway_matrix::config::{self, PipelineConfig};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "binary-pathways",
    about = "Builds a binary gene x pathway association table from KEGG pathway lists",
    long_about = "Reads the KEGG pathway catalog (human_pathways_all.csv) and the KEGG \
                  pathway/gene list (human_pathways_genes.csv) from the current directory \
                  and writes a 0/1 association table with per-gene and per-pathway totals \
                  to ./out_files/KEGG_binary_pathways.csv.",
    version,
    color = clap::ColorChoice::Auto
)]
struct Args {}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let _args = Args::parse();

    let start_time = std::time::Instant::now();

    match config::run(&PipelineConfig::kegg_human()) {
        Ok(summary) => {
            info!(
                "{} genes x {} pathways ({} records, {} associations)",
                summary.genes, summary.pathways, summary.records, summary.associations
            );
            info!(
                "Total execution time: {:.4} seconds",
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}
