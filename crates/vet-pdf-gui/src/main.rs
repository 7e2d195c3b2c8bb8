use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vet-pdf", about = "Desktop client for a PDF forensics scanning service")]
struct Args {
    /// Upload endpoint of the analysis service.
    #[arg(long, default_value = vet_pdf_client::DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = vet_pdf_gui::start_native(args.endpoint) {
        eprintln!("Failed to launch vet-pdf: {err}");
        std::process::exit(1);
    }
}
