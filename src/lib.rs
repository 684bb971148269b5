//! tv_show_length - How long does it take to watch a whole show?
//!
//! This library looks up a tv series in a catalog (TVMaze by default),
//! picks the most recently premiered match and adds up the runtime of all
//! of its episodes.

mod catalog;
mod logging;
mod runtime;

pub use catalog::{
    CatalogError, CatalogProvider, DEFAULT_BASE_URL, Episode, Show, TvMazeProvider,
};
pub use logging::{init_logging, log_progress_event};
pub use runtime::{format_hours_minutes, select_latest_show, shortest_and_longest, total_runtime};

use chrono::NaiveDate;
use thiserror::Error;

/// Exit code for a successful lookup
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage errors and failed requests
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the catalog knows no show with the given title
pub const EXIT_NOT_FOUND: i32 = 10;

/// Progress event emitted during a lookup
///
/// These events allow library users to track progress and provide feedback
/// while the catalog is queried.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Searching the catalog for the title
    Searching { title: String },

    /// Search returned candidates and one was picked
    ShowSelected {
        candidates: usize,
        show_id: u64,
        show_name: String,
        premiered: Option<NaiveDate>,
    },

    /// Fetching the episode list of the selected show
    FetchingEpisodes { show_id: u64 },

    /// Episodes fetched
    EpisodesFetched {
        episode_count: usize,
        with_runtime: usize,
    },
}

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeReport {
    /// The show the runtime was computed for
    pub show: Show,

    /// Number of episodes the catalog listed
    pub episode_count: usize,

    /// Sum of all known episode runtimes in minutes
    pub total_minutes: u64,
}

/// Top-level error type for a lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// The catalog search returned no results
    #[error("Show not found: {0}")]
    ShowNotFound(String),

    /// Error while talking to the catalog
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl LookupError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LookupError::ShowNotFound(_) => EXIT_NOT_FOUND,
            LookupError::Catalog(_) => EXIT_FAILURE,
        }
    }

    /// One line diagnostic for `title`, as printed on stderr
    ///
    /// Rejected requests and unknown shows get a plain message, every other
    /// failure carries the underlying error text.
    pub fn diagnostic(&self, title: &str) -> String {
        match self {
            LookupError::ShowNotFound(_)
            | LookupError::Catalog(CatalogError::HttpStatus { .. }) => {
                format!("Could not get info for {}.", title)
            }
            LookupError::Catalog(e) => format!("Could not get info for {}. Error: {}", title, e),
        }
    }
}

/// Computes the total runtime of the show matching `title`
///
/// Searches `provider` for `title`, selects the match with the latest
/// premiere date and sums the runtime of its episodes. Episodes without a
/// runtime are skipped. The episode list is only requested after a
/// successful, non-empty search.
///
/// # Examples
///
/// ```no_run
/// use tv_show_length::{investigate_runtime, TvMazeProvider};
///
/// let provider = TvMazeProvider::new().unwrap();
/// let report = investigate_runtime(&provider, "Breaking Bad", |_| {}).unwrap();
/// println!("{} minutes", report.total_minutes);
/// ```
pub fn investigate_runtime<P, F>(
    provider: &P,
    title: &str,
    mut progress_callback: F,
) -> Result<RuntimeReport, LookupError>
where
    P: CatalogProvider + ?Sized,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Searching {
        title: title.to_string(),
    });

    let shows = provider.search_shows(title)?;

    let show = select_latest_show(&shows)
        .cloned()
        .ok_or_else(|| LookupError::ShowNotFound(title.to_string()))?;

    progress_callback(ProgressEvent::ShowSelected {
        candidates: shows.len(),
        show_id: show.id,
        show_name: show.name.clone(),
        premiered: show.premiered,
    });

    progress_callback(ProgressEvent::FetchingEpisodes { show_id: show.id });
    let episodes = provider.fetch_episodes(show.id)?;

    progress_callback(ProgressEvent::EpisodesFetched {
        episode_count: episodes.len(),
        with_runtime: episodes.iter().filter(|e| e.runtime.is_some()).count(),
    });

    Ok(RuntimeReport {
        total_minutes: total_runtime(&episodes),
        episode_count: episodes.len(),
        show,
    })
}

/// Computes the total runtime of `title` using the TVMaze API at `base_url`
///
/// The HTTP client lives for this single lookup only.
pub fn lookup_total_runtime<F>(
    base_url: &str,
    title: &str,
    progress_callback: F,
) -> Result<RuntimeReport, LookupError>
where
    F: FnMut(ProgressEvent),
{
    let provider = TvMazeProvider::with_base_url(base_url)?;
    investigate_runtime(&provider, title, progress_callback)
}
