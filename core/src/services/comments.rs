//! `/comments` endpoints. All four operations require an access token.

use crate::client::{parse_empty, parse_json, TraktClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::Comment;

pub struct Comments<'a> {
    pub(crate) client: &'a TraktClient,
}

impl<'a> Comments<'a> {
    /// `POST /comments`. The comment must name exactly one target via
    /// [`Comment::movie`], [`Comment::show`], or [`Comment::episode`];
    /// reviews need at least 200 words of text.
    pub fn build_post(&self, comment: &Comment) -> Result<HttpRequest, ApiError> {
        self.client.post_json("/comments", comment)
    }

    pub fn parse_post(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        parse_json(response, 201)
    }

    /// `GET /comments/{id}`
    pub fn build_get(&self, id: u32) -> HttpRequest {
        self.client.get(&format!("/comments/{id}"))
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        parse_json(response, 200)
    }

    /// `POST /comments/{id}`. Updates go over POST, not PUT; only the text
    /// and the spoiler/review flags can change.
    pub fn build_update(&self, id: u32, comment: &Comment) -> Result<HttpRequest, ApiError> {
        self.client.post_json(&format!("/comments/{id}"), comment)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Comment, ApiError> {
        parse_json(response, 200)
    }

    /// `DELETE /comments/{id}`. Only the author may delete, and only while
    /// the comment has no replies.
    pub fn build_delete(&self, id: u32) -> HttpRequest {
        self.client.delete(&format!("/comments/{id}"))
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        parse_empty(response, 204)
    }
}
