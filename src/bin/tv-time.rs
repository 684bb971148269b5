use clap::Parser;
use std::io::{self, BufRead};
use std::panic;
use std::process;
use std::thread;
use tv_show_length::{
    DEFAULT_BASE_URL, EXIT_FAILURE, EXIT_SUCCESS, LookupError, format_hours_minutes,
    init_logging, log_progress_event, lookup_total_runtime, shortest_and_longest,
};

/// Reads show titles from stdin, one per line, and reports the shortest
/// and the longest show by total runtime.
#[derive(Parser, Debug)]
#[command(name = "tv-time", version, about, long_about = None)]
struct Cli {
    /// Base URL of the TVMaze API
    #[arg(long, env = "TVMAZE_BASE_URL", default_value = DEFAULT_BASE_URL, hide = true)]
    base_url: String,
}

/// Collects the non-blank, trimmed lines of `input`
fn read_titles<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    let mut titles = Vec::new();

    for line in input.lines() {
        let line = line?;
        let title = line.trim();
        if !title.is_empty() {
            titles.push(title.to_string());
        }
    }

    Ok(titles)
}

/// Number of titles looked up at the same time
const MAX_CONCURRENT_LOOKUPS: usize = 4;

/// Looks up `titles` in batches of at most `batch_size` parallel threads
///
/// Results are returned in input order. A panicking lookup is re-raised.
fn lookup_all<F>(
    titles: &[String],
    batch_size: usize,
    lookup: F,
) -> Vec<Result<u64, LookupError>>
where
    F: Fn(&str) -> Result<u64, LookupError> + Sync,
{
    let lookup = &lookup;
    let mut results = Vec::with_capacity(titles.len());

    for batch in titles.chunks(batch_size.max(1)) {
        thread::scope(|scope| {
            let handles: Vec<_> = batch
                .iter()
                .map(|title| scope.spawn(move || lookup(title)))
                .collect();

            for handle in handles {
                results.push(
                    handle
                        .join()
                        .unwrap_or_else(|payload| panic::resume_unwind(payload)),
                );
            }
        });
    }

    results
}

fn main() {
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

    let titles = match read_titles(io::stdin().lock()) {
        Ok(titles) => titles,
        Err(e) => {
            eprintln!("Failed to read shows from stdin: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    if titles.is_empty() {
        eprintln!("No shows provided.");
        process::exit(EXIT_FAILURE);
    }

    let results = lookup_all(&titles, MAX_CONCURRENT_LOOKUPS, |title| {
        lookup_total_runtime(&cli.base_url, title, log_progress_event)
            .map(|report| report.total_minutes)
    });

    let mut runtimes = Vec::new();
    for (title, result) in titles.into_iter().zip(results) {
        match result {
            Ok(minutes) => runtimes.push((title, minutes)),
            Err(e) => eprintln!("Error for {}: {}", title, e),
        }
    }

    let Some((shortest, longest)) = shortest_and_longest(&runtimes) else {
        eprintln!("No valid data retrieved.");
        process::exit(EXIT_FAILURE);
    };

    println!(
        "The shortest show: {} ({})",
        shortest.0,
        format_hours_minutes(shortest.1)
    );
    println!(
        "The longest show: {} ({})",
        longest.0,
        format_hours_minutes(longest.1)
    );
}
