//! `/users` endpoints: settings, profiles, and per-user collection,
//! history, watched, ratings, and list data.

use crate::client::{parse_json, query_string, TraktClient};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{
    CollectedMovie, CollectedShow, EpisodeHistoryEntry, MovieHistoryEntry, RatedMovie, RatedShow,
    Settings, TraktList, User, WatchedMovie, WatchedShow,
};

/// Usernames are spliced into request paths verbatim; pass the URL-safe
/// slug form the API knows the user by.
pub struct Users<'a> {
    pub(crate) client: &'a TraktClient,
}

impl<'a> Users<'a> {
    /// `GET /users/settings`. Settings of the authenticated user; requires
    /// an access token.
    pub fn build_settings(&self) -> HttpRequest {
        self.client.get("/users/settings")
    }

    pub fn parse_settings(&self, response: HttpResponse) -> Result<Settings, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}`
    pub fn build_profile(&self, username: &str) -> HttpRequest {
        self.client.get(&format!("/users/{username}"))
    }

    pub fn parse_profile(&self, response: HttpResponse) -> Result<User, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/collection/movies`
    pub fn build_collection_movies(&self, username: &str) -> HttpRequest {
        self.client
            .get(&format!("/users/{username}/collection/movies"))
    }

    pub fn parse_collection_movies(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CollectedMovie>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/collection/shows`
    pub fn build_collection_shows(&self, username: &str) -> HttpRequest {
        self.client
            .get(&format!("/users/{username}/collection/shows"))
    }

    pub fn parse_collection_shows(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<CollectedShow>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/history/movies`. Most recent watch first.
    /// Unset `page`/`limit` leave paging to the server defaults.
    pub fn build_history_movies(
        &self,
        username: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> HttpRequest {
        let query = query_string(&[
            ("page", page.map(|p| p.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ]);
        self.client
            .get(&format!("/users/{username}/history/movies{query}"))
    }

    pub fn parse_history_movies(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<MovieHistoryEntry>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/history/episodes`
    pub fn build_history_episodes(
        &self,
        username: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> HttpRequest {
        let query = query_string(&[
            ("page", page.map(|p| p.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ]);
        self.client
            .get(&format!("/users/{username}/history/episodes{query}"))
    }

    pub fn parse_history_episodes(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<EpisodeHistoryEntry>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/watched/movies`
    pub fn build_watched_movies(&self, username: &str) -> HttpRequest {
        self.client.get(&format!("/users/{username}/watched/movies"))
    }

    pub fn parse_watched_movies(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<WatchedMovie>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/watched/shows`
    pub fn build_watched_shows(&self, username: &str) -> HttpRequest {
        self.client.get(&format!("/users/{username}/watched/shows"))
    }

    pub fn parse_watched_shows(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<WatchedShow>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/ratings/movies`
    pub fn build_ratings_movies(&self, username: &str) -> HttpRequest {
        self.client.get(&format!("/users/{username}/ratings/movies"))
    }

    pub fn parse_ratings_movies(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<RatedMovie>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/ratings/shows`
    pub fn build_ratings_shows(&self, username: &str) -> HttpRequest {
        self.client.get(&format!("/users/{username}/ratings/shows"))
    }

    pub fn parse_ratings_shows(&self, response: HttpResponse) -> Result<Vec<RatedShow>, ApiError> {
        parse_json(response, 200)
    }

    /// `GET /users/{username}/lists`
    pub fn build_lists(&self, username: &str) -> HttpRequest {
        self.client.get(&format!("/users/{username}/lists"))
    }

    pub fn parse_lists(&self, response: HttpResponse) -> Result<Vec<TraktList>, ApiError> {
        parse_json(response, 200)
    }

    /// `POST /users/{username}/lists`. Requires an access token; the server
    /// echoes the created list with its ids filled in.
    pub fn build_create_list(
        &self,
        username: &str,
        list: &TraktList,
    ) -> Result<HttpRequest, ApiError> {
        self.client
            .post_json(&format!("/users/{username}/lists"), list)
    }

    pub fn parse_create_list(&self, response: HttpResponse) -> Result<TraktList, ApiError> {
        parse_json(response, 201)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Privacy;
    use crate::http::HttpMethod;

    fn client() -> TraktClient {
        TraktClient::new("key123").with_base_url("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_profile_produces_correct_request() {
        let req = client().users().build_profile("sean");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/users/sean");
        assert!(req.body.is_none());
    }

    #[test]
    fn usernames_pass_into_the_path_unaltered() {
        let req = client().users().build_profile("sean.rudford-78");
        assert_eq!(req.path, "http://localhost:3000/users/sean.rudford-78");
    }

    #[test]
    fn parse_profile_reads_the_private_flag() {
        let client = client();
        let user = client
            .users()
            .parse_profile(ok(r#"{"username":"sean","private":false,"name":"Sean Rudford","vip":true}"#))
            .unwrap();
        assert_eq!(user.username.as_deref(), Some("sean"));
        assert_eq!(user.is_private, Some(false));
        assert_eq!(user.vip, Some(true));
    }

    #[test]
    fn history_paging_is_absent_unless_requested() {
        let client = client();
        let req = client.users().build_history_movies("sean", None, None);
        assert_eq!(req.path, "http://localhost:3000/users/sean/history/movies");

        let req = client.users().build_history_movies("sean", Some(2), Some(5));
        assert_eq!(
            req.path,
            "http://localhost:3000/users/sean/history/movies?page=2&limit=5"
        );
    }

    #[test]
    fn history_limit_alone_still_forms_a_query() {
        let req = client().users().build_history_episodes("sean", None, Some(3));
        assert_eq!(
            req.path,
            "http://localhost:3000/users/sean/history/episodes?limit=3"
        );
    }

    #[test]
    fn parse_collection_movies_decodes_collected_at() {
        let client = client();
        let body = r#"[{
            "collected_at": "2014-03-12T20:14:09.000+0000",
            "movie": {"title": "TRON: Legacy", "year": 2010, "ids": {"trakt": 1}}
        }]"#;
        let collected = client.users().parse_collection_movies(ok(body)).unwrap();
        assert_eq!(collected.len(), 1);
        assert!(collected[0].collected_at.is_some());
        assert_eq!(
            collected[0].movie.as_ref().unwrap().title.as_deref(),
            Some("TRON: Legacy")
        );
    }

    #[test]
    fn parse_collection_movies_rejects_a_corrupt_timestamp() {
        let client = client();
        let body = r#"[{"collected_at": "last tuesday", "movie": {"title": "TRON: Legacy"}}]"#;
        let err = client.users().parse_collection_movies(ok(body)).unwrap_err();
        match err {
            ApiError::DeserializationError(msg) => {
                assert!(msg.contains("last tuesday"), "message was: {msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_watched_shows_reads_nested_plays() {
        let client = client();
        let body = r#"[{
            "plays": 62,
            "show": {"title": "Breaking Bad", "ids": {"slug": "breaking-bad"}},
            "seasons": [{"number": 1, "episodes": [{"number": 1, "plays": 2}]}]
        }]"#;
        let watched = client.users().parse_watched_shows(ok(body)).unwrap();
        assert_eq!(watched[0].plays, Some(62));
        assert_eq!(watched[0].seasons[0].episodes[0].plays, Some(2));
    }

    #[test]
    fn parse_ratings_movies_maps_the_scale() {
        let client = client();
        let body = r#"[{
            "rated_at": "2014-09-01T09:10:11.000+0000",
            "rating": 9,
            "movie": {"title": "TRON: Legacy", "year": 2010}
        }]"#;
        let rated = client.users().parse_ratings_movies(ok(body)).unwrap();
        assert_eq!(rated[0].rating, Some(crate::enums::Rating::Superb));
    }

    #[test]
    fn parse_ratings_movies_rejects_an_off_scale_value() {
        let client = client();
        let body = r#"[{"rating": 11, "movie": {"title": "TRON: Legacy"}}]"#;
        let err = client.users().parse_ratings_movies(ok(body)).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn build_create_list_serializes_only_set_fields() {
        let list = TraktList::new("Star Wars in machete order")
            .privacy(Privacy::Public)
            .display_numbers(true);
        let req = client().users().build_create_list("sean", &list).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/users/sean/lists");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Star Wars in machete order");
        assert_eq!(body["privacy"], "public");
        assert!(body.get("description").is_none());
    }

    #[test]
    fn parse_create_list_expects_created() {
        let client = client();
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"name":"Star Wars in machete order","privacy":"public","ids":{"trakt":55,"slug":"star-wars-in-machete-order"}}"#.to_string(),
        };
        let list = client.users().parse_create_list(response).unwrap();
        assert_eq!(list.privacy, Some(Privacy::Public));
        assert_eq!(list.ids.unwrap().trakt, Some(55));
    }

    #[test]
    fn parse_settings_requires_authorization() {
        let client = client();
        let response = HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client.users().parse_settings(response).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }
}
