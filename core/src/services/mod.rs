//! Endpoint groups, one module per top-level API resource.
//!
//! Each group is a cheap borrow of the client, obtained from an accessor
//! like [`crate::TraktClient::users`]. Operations come in `build_*`/`parse_*`
//! pairs; the caller performs the HTTP round-trip in between.

pub mod comments;
pub mod movies;
pub mod shows;
pub mod sync;
pub mod users;

pub use comments::Comments;
pub use movies::Movies;
pub use shows::Shows;
pub use sync::Sync;
pub use users::Users;
