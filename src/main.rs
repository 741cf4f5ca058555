use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use canonical_huffman::HuffmanCodec;

/// Encode text files with canonical Huffman codes, writing `<file>.hf`.
#[derive(Parser, Debug)]
#[command(name = "hfenc", version, about)]
struct Args {
    /// Text files to encode
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to install tracing subscriber");
    }

    let codec = HuffmanCodec::default();
    for path in &args.paths {
        match codec.encode_file(path) {
            Ok((output, summary)) => {
                info!(
                    input = %path.display(),
                    output = %output.display(),
                    symbols = summary.input_symbols,
                    distinct = summary.distinct_symbols,
                    max_code_length = summary.max_code_length,
                    bytes = summary.total_bytes(),
                    "encoded"
                );
            }
            Err(e) => {
                error!(input = %path.display(), "encoding failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
