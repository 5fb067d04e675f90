//! Prints triplet samples from a small built-in corpus (or a document
//! directory) so the flattening and sampling output can be inspected.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use bridge_triplets::{
    DocumentStore, FlatCorpus, FlattenConfig, JsonDirStore, LabeledLine, RawDocument,
    SamplerConfig, TripletDataset,
};

#[derive(Parser, Debug)]
#[command(
    name = "corpus_demo",
    about = "Sample time-ordered sentence triplets from a flattened corpus"
)]
struct Cli {
    /// RNG seed for the sampler.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Number of query positions to sample.
    #[arg(long, default_value_t = 6)]
    count: usize,
    /// Directory of per-document JSON payloads; defaults to a built-in corpus.
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let cli = Cli::parse();

    let documents = match &cli.root {
        Some(root) => JsonDirStore::new("demo_corpus", root).load()?,
        None => demo_documents(),
    };
    let corpus = Arc::new(FlatCorpus::flatten(&documents, &FlattenConfig::default())?);
    let dataset = TripletDataset::new(corpus, &SamplerConfig { seed: cli.seed });

    println!(
        "Corpus holds {} sentence records across {} documents; {} query positions are addressable.",
        dataset.corpus().record_count(),
        dataset.corpus().spans().len(),
        dataset.len()
    );

    let step = (dataset.len() / cli.count.max(1)).max(1);
    for index in (0..dataset.len()).step_by(step).take(cli.count) {
        match dataset.sample(index) {
            Ok(sample) => {
                println!(
                    "index {index}: t_={} t={} T={} total_t={}",
                    sample.t_early, sample.t_later, sample.t_query, sample.total_t
                );
                println!("  y_0: {}", sample.y_early.trim_end());
                println!("  y_t: {}", sample.y_later.trim_end());
                println!("  y_T: {}", sample.y_query.trim_end());
            }
            Err(error) => println!("index {index}: {error}"),
        }
    }

    Ok(())
}

fn demo_documents() -> Vec<RawDocument> {
    let line = |label: &str, content: &str| LabeledLine {
        label: label.to_string(),
        content: content.to_string(),
    };
    vec![
        RawDocument {
            id: "largest_number".to_string(),
            prompt: "Read a list of integers. Print the largest one. ".to_string(),
            candidates: vec![vec![
                line("def", "def largest(xs):"),
                line("return", "return max(xs)"),
            ]],
        },
        RawDocument {
            id: "count_evens".to_string(),
            prompt: "Count the even numbers in the input. ".to_string(),
            candidates: vec![
                vec![
                    line("def", "def count_evens(xs):"),
                    line("expression", "total = 0"),
                    line("for", "for x in xs:"),
                    line("if", "if x % 2 == 0:"),
                    line("expression", "total += 1"),
                    line("return", "return total"),
                ],
                vec![
                    line("import", "import itertools"),
                    line("return", "return sum(1 for x in xs if x % 2 == 0)"),
                ],
            ],
        },
    ]
}
