/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Only the fields the lookup needs are declared; everything else is ignored.
use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// One entry of the `search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matched show
    pub show: TvMazeShow,
}

/// A show object as embedded in search results.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    /// TVMaze show id
    pub id: u64,
    /// The name of the show
    #[serde(default)]
    pub name: String,
    /// Premiere date as `YYYY-MM-DD` (null for unaired shows)
    pub premiered: Option<NaiveDate>,
}

/// A single episode from the `shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    /// Runtime in minutes (may be null)
    #[serde(default, deserialize_with = "deserialize_runtime")]
    pub runtime: Option<u32>,
}

/// Reads a runtime given as an integer or as a float without a fractional
/// part (`30` and `30.0` are both 30 minutes).
fn deserialize_runtime<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Some(minutes) = number.as_u64() {
        return u32::try_from(minutes)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("runtime {} is out of range", number)));
    }

    match number.as_f64() {
        Some(minutes) if minutes.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&minutes) => {
            Ok(Some(minutes as u32))
        }
        _ => Err(D::Error::custom(format!(
            "invalid runtime {}, expected whole minutes",
            number
        ))),
    }
}
