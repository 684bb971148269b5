/// TVMaze catalog provider implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogError, CatalogProvider, Episode, Show};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// Public TVMaze API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.tvmaze.com";

/// Catalog provider for the TVMaze API.
///
/// Uses the `search/shows` endpoint to find candidates and
/// `shows/{id}/episodes` to list the episodes of a show.
pub struct TvMazeProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeProvider {
    /// Creates a provider talking to the public TVMaze API.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a provider talking to a TVMaze compatible API at `base_url`.
    ///
    /// Every request carries an `Accept: application/json` header.
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request and decodes the JSON body.
    fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| CatalogError::RequestError(e.to_string()))?;

        parse_body(&body)
    }
}

/// Decodes a JSON response body.
fn parse_body<T>(body: &str) -> Result<T, CatalogError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| CatalogError::ParseError(e.to_string()))
}

/// Converts TVMaze search results into shows, keeping the response order.
fn convert_search_results(results: Vec<TvMazeSearchResult>) -> Vec<Show> {
    results
        .into_iter()
        .map(|result| Show {
            id: result.show.id,
            name: result.show.name,
            premiered: result.show.premiered,
        })
        .collect()
}

fn convert_episodes(episodes: Vec<TvMazeEpisode>) -> Vec<Episode> {
    episodes
        .into_iter()
        .map(|episode| Episode {
            runtime: episode.runtime,
        })
        .collect()
}

impl CatalogProvider for TvMazeProvider {
    fn search_shows(&self, query: &str) -> Result<Vec<Show>, CatalogError> {
        let results: Vec<TvMazeSearchResult> = self.get_json("search/shows", &[("q", query)])?;
        Ok(convert_search_results(results))
    }

    fn fetch_episodes(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        let path = format!("shows/{}/episodes", show_id);
        let episodes: Vec<TvMazeEpisode> = self.get_json(&path, &[])?;
        Ok(convert_episodes(episodes))
    }
}
