use anyhow::Context;
use clap::{Parser, Subcommand};
use labwise_core::{AnalysisService, CoreConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "labwise")]
#[command(about = "LabWise CBC analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse CBC values against the reference ranges
    Analyse {
        /// Demographic group (male or female)
        group: String,
        /// Haemoglobin (g/dL)
        hb: f64,
        /// White blood cell count (cells/mcL)
        wbc: f64,
        /// Platelet count (/mcL)
        platelets: f64,
        /// Explicit path to the knowledge corpus
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Print the structured analysis as JSON instead of the text report
        #[arg(long)]
        json: bool,
        /// Also write the text report to a file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("labwise_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyse {
            group,
            hb,
            wbc,
            platelets,
            corpus,
            json,
            output,
        }) => {
            // The core is total over non-negative numbers; boundary
            // validation is the shell's job.
            for (name, value) in [("hb", hb), ("wbc", wbc), ("platelets", platelets)] {
                anyhow::ensure!(
                    value.is_finite() && value >= 0.0,
                    "{name} must be a non-negative number"
                );
            }

            let service = AnalysisService::new(CoreConfig::new(corpus));
            let analysis = service.analyse(&group, hb, wbc, platelets);

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{}", analysis.document);
            }

            if let Some(path) = output {
                std::fs::write(&path, &analysis.document)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                eprintln!("Report written to {}", path.display());
            }
        }
        None => {
            println!("Use 'labwise --help' for commands");
        }
    }

    Ok(())
}
