use std::path::PathBuf;
use std::process;

use clap::Parser;

use myturn_core::analysis::domain::analysis_result::AnalysisResult;
use myturn_core::analysis::domain::audio_analyzer::AudioAnalyzer;
use myturn_core::analysis::infrastructure::http_analyzer::HttpAnalyzer;
use myturn_core::capture::domain::audio_payload::AudioPayload;
use myturn_core::shared::constants::DEFAULT_ENDPOINT;

/// Submit a meeting recording for speaking-time analysis.
#[derive(Parser)]
#[command(name = "myturn")]
struct Cli {
    /// Audio file to analyze.
    input: PathBuf,

    /// Analysis service address.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let payload = match AudioPayload::from_file(&cli.input) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    log::info!("analyzing {}", payload.source_name());
    let analyzer = HttpAnalyzer::new(cli.endpoint);

    match analyzer.analyze(&payload) {
        AnalysisResult::Analysis(stats) => {
            println!("Transcript:");
            for (line, gender) in stats.transcript_lines() {
                println!("  [{gender}] {line}");
            }
            println!();
            println!(
                "Speaking time: male {:.1}s, female {:.1}s, total {:.1}s",
                stats.male_seconds, stats.female_seconds, stats.total_seconds
            );
            println!(
                "Split: male {}%, female {}%",
                stats.male_percent_label(),
                stats.female_percent_label()
            );
        }
        AnalysisResult::Failed(message) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    }
}
