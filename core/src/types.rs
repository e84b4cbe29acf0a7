//! Entity DTOs mirroring the remote API's resources.
//!
//! # Design
//! Every struct here is a plain immutable transfer object: decoded once from
//! a response body, or assembled once (via the consuming builder setters)
//! right before a request is sent. Fields are `Option` wherever the API may
//! omit them — most endpoints return a minimal shape unless `extended=` asks
//! for more — and list fields default to empty. Unknown incoming fields are
//! ignored for forward compatibility.
//!
//! Serialization omits unset fields (`skip_serializing_if`), so outgoing
//! bodies contain exactly what the caller set and nothing else. Timestamp
//! fields all route through `codec::timestamps`; there is no other way to
//! put a date on the wire.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Privacy, Rating, Status};

// ---------------------------------------------------------------------------
// Ids
// ---------------------------------------------------------------------------

/// Identifiers of a movie across Trakt and the usual third-party databases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
}

impl MovieIds {
    pub fn trakt(id: u32) -> Self {
        Self {
            trakt: Some(id),
            ..Self::default()
        }
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            imdb: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Identifiers of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u32>,
}

impl ShowIds {
    pub fn trakt(id: u32) -> Self {
        Self {
            trakt: Some(id),
            ..Self::default()
        }
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            imdb: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Identifiers of an episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u32>,
}

impl EpisodeIds {
    pub fn trakt(id: u32) -> Self {
        Self {
            trakt: Some(id),
            ..Self::default()
        }
    }

    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            imdb: Some(id.into()),
            ..Self::default()
        }
    }
}

/// Identifiers of a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u32>,
}

/// Identifiers of a user list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// A movie. Minimal responses carry title/year/ids; `extended=full` fills in
/// the rest. `released` arrives as a bare date on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<MovieIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub released: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_translations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
}

/// A show. `first_aired` is a full timestamp, unlike a movie's `released`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<ShowIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airs: Option<Airs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_translations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aired_episodes: Option<u32>,
}

/// Weekly airing slot of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// An episode of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<EpisodeIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_abs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_translations: Vec<String>,
}

/// A cast or crew person. `birthday` and `death` arrive as bare dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<PersonIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birthday: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub death: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

/// Community rating summary with the 1–10 vote distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub distribution: BTreeMap<String, u32>,
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// A user profile. `private` is a reserved word in Rust, hence the rename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "private", skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vip: Option<bool>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// The authenticated user's settings bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<Connections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharing_text: Option<SharingText>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_24hr: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tumblr: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharingText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watching: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched: Option<String>,
}

// ---------------------------------------------------------------------------
// Credits
// ---------------------------------------------------------------------------

/// Cast and crew of a movie or show, or a person's credited work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cast: Vec<CastMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<Crew>,
}

/// One cast credit. Exactly one of `person`/`movie`/`show` is populated,
/// depending on which resource the credits were requested for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
}

/// Crew credits grouped by department. Note the literal `costume & make-up`
/// wire key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub production: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub art: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sound: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directing: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub writing: Vec<CrewMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub camera: Vec<CrewMember>,
    #[serde(
        rename = "costume & make-up",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub costume_and_make_up: Vec<CrewMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
}

// ---------------------------------------------------------------------------
// Collection, history, watched, rated
// ---------------------------------------------------------------------------

/// A movie in a user's collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectedMovie {
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
}

/// A show in a user's collection, with the collected episodes nested per
/// season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectedShow {
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<CollectedSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectedSeason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<CollectedEpisode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectedEpisode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
}

/// One watch of a movie, most recent first in history listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieHistoryEntry {
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
}

/// One watch of an episode; the owning show rides along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeHistoryEntry {
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<Episode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
}

/// Aggregate play count for a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
}

/// Aggregate play counts for a show, nested per season and episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedShow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<WatchedSeason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedSeason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<WatchedEpisode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedEpisode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plays: Option<u32>,
}

/// A movie the user has rated on the 1–10 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
}

/// A show the user has rated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedShow {
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// A comment on a movie, show, or episode.
///
/// Doubles as the request body for posting: build one with [`Comment::new`]
/// and the setters, attach the target media, and only the set fields go on
/// the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<Episode>,
}

impl Comment {
    /// Start an outgoing comment with the given text. Reviews need at least
    /// 200 words server-side; set the flag with [`Comment::review`].
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            comment: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = Some(spoiler);
        self
    }

    pub fn review(mut self, review: bool) -> Self {
        self.review = Some(review);
        self
    }

    pub fn movie(mut self, movie: Movie) -> Self {
        self.movie = Some(movie);
        self
    }

    pub fn show(mut self, show: Show) -> Self {
        self.show = Some(show);
        self
    }

    pub fn episode(mut self, episode: Episode) -> Self {
        self.episode = Some(episode);
        self
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// A user's custom list. Also the request body for creating one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraktList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_comments: Option<bool>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<ListIds>,
}

impl TraktList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn privacy(mut self, privacy: Privacy) -> Self {
        self.privacy = Some(privacy);
        self
    }

    pub fn display_numbers(mut self, display_numbers: bool) -> Self {
        self.display_numbers = Some(display_numbers);
        self
    }

    pub fn allow_comments(mut self, allow_comments: bool) -> Self {
        self.allow_comments = Some(allow_comments);
        self
    }
}

// ---------------------------------------------------------------------------
// Sync
// ---------------------------------------------------------------------------

/// Items to add to or remove from the authenticated user's data.
///
/// Assemble with the fluent setters; each media item carries optional
/// `collected_at`/`watched_at`/`rated_at` stamps and a rating where the
/// target endpoint uses them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncItems {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movies: Vec<SyncMovie>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<SyncShow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncEpisode>,
}

impl SyncItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movie(mut self, movie: SyncMovie) -> Self {
        self.movies.push(movie);
        self
    }

    pub fn show(mut self, show: SyncShow) -> Self {
        self.shows.push(show);
        self
    }

    pub fn episode(mut self, episode: SyncEpisode) -> Self {
        self.episodes.push(episode);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncMovie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<MovieIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncMovie {
    pub fn new(ids: MovieIds) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    pub fn collected_at(mut self, collected_at: DateTime<Utc>) -> Self {
        self.collected_at = Some(collected_at);
        self
    }

    pub fn watched_at(mut self, watched_at: DateTime<Utc>) -> Self {
        self.watched_at = Some(watched_at);
        self
    }

    pub fn rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rated_at = Some(rated_at);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncShow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<ShowIds>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<SyncSeason>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncShow {
    pub fn new(ids: ShowIds) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    pub fn season(mut self, season: SyncSeason) -> Self {
        self.seasons.push(season);
        self
    }

    pub fn collected_at(mut self, collected_at: DateTime<Utc>) -> Self {
        self.collected_at = Some(collected_at);
        self
    }

    pub fn watched_at(mut self, watched_at: DateTime<Utc>) -> Self {
        self.watched_at = Some(watched_at);
        self
    }

    pub fn rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rated_at = Some(rated_at);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// A season within a [`SyncShow`], scoping the operation to specific
/// episodes when they are listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncSeason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncEpisode>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncSeason {
    pub fn new(number: u32) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    pub fn episode(mut self, episode: SyncEpisode) -> Self {
        self.episodes.push(episode);
        self
    }

    pub fn collected_at(mut self, collected_at: DateTime<Utc>) -> Self {
        self.collected_at = Some(collected_at);
        self
    }

    pub fn watched_at(mut self, watched_at: DateTime<Utc>) -> Self {
        self.watched_at = Some(watched_at);
        self
    }

    pub fn rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rated_at = Some(rated_at);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// An episode inside a [`SyncSeason`] (by number) or standalone (by ids).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncEpisode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<EpisodeIds>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::codec::timestamps::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncEpisode {
    pub fn new(number: u32) -> Self {
        Self {
            number: Some(number),
            ..Self::default()
        }
    }

    pub fn with_ids(ids: EpisodeIds) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    pub fn collected_at(mut self, collected_at: DateTime<Utc>) -> Self {
        self.collected_at = Some(collected_at);
        self
    }

    pub fn watched_at(mut self, watched_at: DateTime<Utc>) -> Self {
        self.watched_at = Some(watched_at);
        self
    }

    pub fn rated_at(mut self, rated_at: DateTime<Utc>) -> Self {
        self.rated_at = Some(rated_at);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Outcome counters for a sync operation, plus an echo of anything the
/// server could not match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<SyncStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing: Option<SyncStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<SyncStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<SyncNotFound>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shows: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
}

/// Unmatched items echoed back as bare id objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncNotFound {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movies: Vec<SyncMovie>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<SyncShow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncEpisode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn collected_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2013, 8, 1, 10, 0, 0).single().unwrap()
    }

    #[test]
    fn comment_builder_serializes_only_set_fields() {
        let comment = Comment::new("Oh, I wasn't aware of that!")
            .spoiler(true)
            .movie(Movie {
                title: Some("TRON: Legacy".to_string()),
                year: Some(2010),
                ids: Some(MovieIds::slug("tron-legacy-2010")),
                ..Movie::default()
            });

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["comment"], "Oh, I wasn't aware of that!");
        assert_eq!(json["spoiler"], true);
        assert_eq!(json["movie"]["ids"]["slug"], "tron-legacy-2010");
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3, "unexpected keys: {keys:?}");
    }

    #[test]
    fn sync_movie_serializes_collected_at_in_wire_form() {
        let item = SyncMovie::new(MovieIds::imdb("tt1104001")).collected_at(collected_instant());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["collected_at"], "2013-08-01T10:00:00.000+0000");
        let ids: Vec<&String> = json["ids"].as_object().unwrap().keys().collect();
        assert_eq!(ids, ["imdb"]);
    }

    #[test]
    fn sync_show_nests_seasons_and_episodes() {
        let show = SyncShow::new(ShowIds::slug("breaking-bad")).season(
            SyncSeason::new(1)
                .episode(SyncEpisode::new(1).collected_at(collected_instant()))
                .episode(SyncEpisode::new(2)),
        );
        let json = serde_json::to_value(&show).unwrap();
        assert_eq!(json["seasons"][0]["number"], 1);
        assert_eq!(
            json["seasons"][0]["episodes"][0]["collected_at"],
            "2013-08-01T10:00:00.000+0000"
        );
        assert_eq!(json["seasons"][0]["episodes"][1]["number"], 2);
    }

    #[test]
    fn sync_items_carries_standalone_episodes_by_ids() {
        let items = SyncItems::new()
            .show(SyncShow::new(ShowIds::imdb("tt0903747")))
            .episode(SyncEpisode::with_ids(EpisodeIds::trakt(16)));
        let json = serde_json::to_value(&items).unwrap();
        assert!(json.get("movies").is_none());
        assert_eq!(json["shows"][0]["ids"]["imdb"], "tt0903747");
        assert_eq!(json["episodes"][0]["ids"]["trakt"], 16);
        let keys: Vec<&String> = json["episodes"][0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["ids"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let movie: Movie = serde_json::from_str(
            r#"{"title":"TRON: Legacy","year":2010,"ids":{"trakt":1},"brand_new_field":42}"#,
        )
        .unwrap();
        assert_eq!(movie.title.as_deref(), Some("TRON: Legacy"));
        assert_eq!(movie.ids.unwrap().trakt, Some(1));
    }

    #[test]
    fn user_private_flag_maps_to_wire_key() {
        let user: User = serde_json::from_str(r#"{"username":"sean","private":true}"#).unwrap();
        assert_eq!(user.is_private, Some(true));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["private"], true);
        assert!(json.get("is_private").is_none());
    }

    #[test]
    fn crew_costume_department_uses_the_literal_wire_key() {
        let crew: Crew =
            serde_json::from_str(r#"{"costume & make-up":[{"job":"Costume Design"}]}"#).unwrap();
        assert_eq!(crew.costume_and_make_up.len(), 1);
        assert_eq!(
            crew.costume_and_make_up[0].job.as_deref(),
            Some("Costume Design")
        );

        let json = serde_json::to_value(&crew).unwrap();
        assert!(json.get("costume & make-up").is_some());
    }

    #[test]
    fn collected_show_decodes_nested_timestamps() {
        let body = r#"{
            "collected_at": "2014-07-14T01:00:00.000+0000",
            "show": {"title": "Breaking Bad", "ids": {"slug": "breaking-bad"}},
            "seasons": [
                {"number": 1, "episodes": [
                    {"number": 1, "collected_at": "2014-07-14T01:00:00.000+0000"},
                    {"number": 2, "collected_at": "2014-07-14T01:00:00.000+0000"}
                ]}
            ]
        }"#;
        let collected: CollectedShow = serde_json::from_str(body).unwrap();
        assert!(collected.collected_at.is_some());
        assert_eq!(collected.seasons.len(), 1);
        for episode in &collected.seasons[0].episodes {
            assert!(episode.collected_at.is_some());
        }
    }

    #[test]
    fn rated_movie_decodes_the_rating_scale() {
        let rated: RatedMovie = serde_json::from_str(
            r#"{"rated_at":"2014-09-01T09:10:11.000+0000","rating":10,"movie":{"title":"TRON: Legacy"}}"#,
        )
        .unwrap();
        assert_eq!(rated.rating, Some(crate::enums::Rating::TotallyNinja));
        assert!(rated.rated_at.is_some());
    }

    #[test]
    fn list_builder_produces_wire_privacy_token() {
        let list = TraktList::new("Star Wars in machete order")
            .description("Next time you want to introduce someone to Star Wars.")
            .privacy(Privacy::Private)
            .display_numbers(true);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["privacy"], "private");
        assert_eq!(json["display_numbers"], true);
        assert!(json.get("ids").is_none());
    }

    #[test]
    fn ratings_distribution_keeps_all_ten_buckets() {
        let body = r#"{"rating":8.0,"votes":111,"distribution":
            {"1":5,"2":2,"3":1,"4":1,"5":3,"6":6,"7":20,"8":42,"9":25,"10":6}}"#;
        let ratings: Ratings = serde_json::from_str(body).unwrap();
        assert_eq!(ratings.distribution.len(), 10);
        assert_eq!(ratings.distribution.get("8"), Some(&42));
    }
}
