//! `/sync` endpoints: add and remove collection, history, and rating data
//! for the authenticated user. All operations require an access token.

use crate::client::{parse_json, TraktClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{SyncItems, SyncResponse};

pub struct Sync<'a> {
    pub(crate) client: &'a TraktClient,
}

impl<'a> Sync<'a> {
    /// `POST /sync/collection`. Items without a `collected_at` stamp are
    /// recorded as collected now.
    pub fn build_add_to_collection(&self, items: &SyncItems) -> Result<HttpRequest, ApiError> {
        self.client.post_json("/sync/collection", items)
    }

    pub fn parse_add_to_collection(&self, response: HttpResponse) -> Result<SyncResponse, ApiError> {
        parse_json(response, 201)
    }

    /// `POST /sync/collection/remove`. Any stamps on the items are ignored.
    pub fn build_remove_from_collection(&self, items: &SyncItems) -> Result<HttpRequest, ApiError> {
        self.client.post_json("/sync/collection/remove", items)
    }

    pub fn parse_remove_from_collection(
        &self,
        response: HttpResponse,
    ) -> Result<SyncResponse, ApiError> {
        parse_json(response, 200)
    }

    /// `POST /sync/history`. Items without a `watched_at` stamp are recorded
    /// as watched now.
    pub fn build_add_to_history(&self, items: &SyncItems) -> Result<HttpRequest, ApiError> {
        self.client.post_json("/sync/history", items)
    }

    pub fn parse_add_to_history(&self, response: HttpResponse) -> Result<SyncResponse, ApiError> {
        parse_json(response, 201)
    }

    /// `POST /sync/ratings`. Each item carries its rating; `rated_at`
    /// defaults to now on the server.
    pub fn build_add_ratings(&self, items: &SyncItems) -> Result<HttpRequest, ApiError> {
        self.client.post_json("/sync/ratings", items)
    }

    pub fn parse_add_ratings(&self, response: HttpResponse) -> Result<SyncResponse, ApiError> {
        parse_json(response, 201)
    }
}
