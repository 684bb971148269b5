/// Data structures and traits for looking up shows in a tv catalog.
///
/// This module provides the catalog-independent representation of shows and
/// episodes, as well as the trait implemented by catalog providers.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::{DEFAULT_BASE_URL, TvMazeProvider};

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while talking to a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request to the catalog failed before a response was received
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The catalog answered with a non-success status code
    #[error("HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Failed to parse the catalog's JSON response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),
}

/// A show as returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Catalog identifier of the show
    pub id: u64,
    /// The name of the show
    pub name: String,
    /// Date of the first episode, if the catalog knows it
    pub premiered: Option<NaiveDate>,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Length in minutes, `None` when unknown
    pub runtime: Option<u32>,
}

/// Trait for catalogs that can search shows and list their episodes.
pub trait CatalogProvider {
    /// Searches the catalog for shows matching `query`.
    ///
    /// The returned shows keep the order in which the catalog ranked them.
    fn search_shows(&self, query: &str) -> Result<Vec<Show>, CatalogError>;

    /// Fetches every episode of the show with the given identifier.
    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError>;
}
