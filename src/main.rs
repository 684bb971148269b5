use clap::Parser;
use std::process;
use tv_show_length::{
    DEFAULT_BASE_URL, EXIT_FAILURE, EXIT_SUCCESS, init_logging, log_progress_event,
    lookup_total_runtime,
};

/// Prints the total runtime in minutes of all episodes of a tv show.
///
/// When several shows match the title, the most recently premiered one is used.
#[derive(Parser, Debug)]
#[command(name = "tv-show-length", version, about, long_about = None)]
struct Cli {
    /// Title of the show to look up
    #[arg(allow_hyphen_values = true)]
    title: String,

    /// Accepted for compatibility, not used
    #[arg(hide = true, allow_hyphen_values = true)]
    #[allow(dead_code)]
    extra: Option<String>,

    /// Base URL of the TVMaze API
    #[arg(long, env = "TVMAZE_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    base_url: String,
}

fn main() {
    // Usage errors exit with 1 instead of clap's default of 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    init_logging();

    match lookup_total_runtime(&cli.base_url, &cli.title, log_progress_event) {
        Ok(report) => {
            println!("{}", report.total_minutes);
        }
        Err(e) => {
            tracing::debug!(error = ?e, "lookup failed");
            eprintln!("{}", e.diagnostic(&cli.title));
            process::exit(e.exit_code());
        }
    }
}
