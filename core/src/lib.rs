//! Typed client core for the Trakt API (v2).
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable
//! with any transport, sync or async.
//!
//! # Design
//! - `TraktClient` is immutable after construction — base URL, API key, and
//!   optional access token — so one instance can be shared freely across
//!   threads.
//! - Every operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), grouped per resource under `services`.
//! - All JSON crossing the boundary goes through `codec` and `enums`:
//!   timestamps land as `DateTime<Utc>`, closed vocabularies as real enums,
//!   and any wire value outside those tables fails the whole decode with
//!   the offending value in the error.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod codec;
pub mod enums;
pub mod error;
pub mod http;
pub mod services;
pub mod types;

pub use client::{TraktClient, DEFAULT_API_URL};
pub use enums::{Extended, Privacy, Rating, Status};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    Account, Airs, CastMember, CollectedEpisode, CollectedMovie, CollectedSeason, CollectedShow,
    Comment, Connections, Credits, Crew, CrewMember, Episode, EpisodeHistoryEntry, EpisodeIds,
    ListIds, Movie, MovieHistoryEntry, MovieIds, Person, PersonIds, RatedMovie, RatedShow, Ratings,
    Settings, SharingText, Show, ShowIds, SyncEpisode, SyncItems, SyncMovie, SyncNotFound,
    SyncResponse, SyncSeason, SyncShow, SyncStats, TraktList, User, WatchedEpisode, WatchedMovie,
    WatchedSeason, WatchedShow,
};
