//! `/shows` endpoints.

use crate::client::{parse_json, query_string, TraktClient};
use crate::enums::Extended;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Credits, Ratings, Show};

/// Media ids (trakt id, slug, or IMDB id) are spliced into request paths
/// verbatim; all of those forms are URL-safe.
pub struct Shows<'a> {
    pub(crate) client: &'a TraktClient,
}

impl<'a> Shows<'a> {
    /// `GET /shows/{id}`. The id may be a trakt id, a slug, or an IMDB id.
    pub fn build_summary(&self, id: &str, extended: Option<Extended>) -> HttpRequest {
        let query = query_string(&[("extended", extended.map(|e| e.as_str().to_string()))]);
        self.client.get(&format!("/shows/{id}{query}"))
    }

    pub fn parse_summary(&self, response: HttpResponse) -> Result<Show, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /shows/{id}/people`
    pub fn build_people(&self, id: &str) -> HttpRequest {
        self.client.get(&format!("/shows/{id}/people"))
    }

    pub fn parse_people(&self, response: HttpResponse) -> Result<Credits, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /shows/{id}/ratings`
    pub fn build_ratings(&self, id: &str) -> HttpRequest {
        self.client.get(&format!("/shows/{id}/ratings"))
    }

    pub fn parse_ratings(&self, response: HttpResponse) -> Result<Ratings, ApiError> {
        parse_json(response, 200)
    }
}
