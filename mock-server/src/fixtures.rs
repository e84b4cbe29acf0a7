//! Canned wire-format bodies. Timestamps use the `+0000` offset spelling
//! and `released` is a bare date, like the real service emits. Several
//! fixtures carry fields the client does not model (`action`, `type`,
//! `last_watched_at`) so decoding also proves unknown-field tolerance.

use serde_json::{json, Value};

pub const USERNAME: &str = "sean";
pub const COMMENT_CREATED_AT: &str = "2014-08-04T06:46:01.000+0000";
pub const LIST_CREATED_AT: &str = "2014-10-11T17:00:54.000+0000";

const BREAKING_BAD_EPISODES: [&str; 12] = [
    "Pilot",
    "Cat's in the Bag...",
    "...And the Bag's in the River",
    "Cancer Man",
    "Gray Matter",
    "Crazy Handful of Nothin'",
    "A No-Rough-Stuff-Type Deal",
    "Seven Thirty-Seven",
    "Grilled",
    "Bit by a Dead Bee",
    "Down",
    "Breakage",
];

pub fn is_tron_id(id: &str) -> bool {
    matches!(id, "1" | "tron-legacy-2010" | "tt1104001")
}

pub fn is_breaking_bad_id(id: &str) -> bool {
    matches!(id, "1388" | "breaking-bad" | "tt0903747")
}

pub fn profile() -> Value {
    json!({
        "username": USERNAME,
        "private": false,
        "name": "Sean Rudford",
        "vip": true,
        "joined_at": "2010-09-25T17:49:25.000+0000",
        "location": "SF",
        "about": "I have all your cassette tapes.",
        "gender": "male",
        "age": 35
    })
}

pub fn settings() -> Value {
    json!({
        "user": profile(),
        "account": {
            "timezone": "America/Los_Angeles",
            "time_24hr": false,
            "cover_image": "https://walter.trakt.us/images/movies/000/001/fanarts/original/3bcde.jpg"
        },
        "connections": {
            "facebook": true,
            "twitter": true,
            "google": false,
            "tumblr": false
        },
        "sharing_text": {
            "watching": "I'm watching [item]",
            "watched": "I just watched [item]"
        }
    })
}

pub fn tron_legacy(full: bool) -> Value {
    let mut movie = json!({
        "title": "TRON: Legacy",
        "year": 2010,
        "ids": {"trakt": 1, "slug": "tron-legacy-2010", "imdb": "tt1104001", "tmdb": 20526}
    });
    if full {
        merge(&mut movie, json!({
            "tagline": "The Game Has Changed.",
            "overview": "Sam Flynn, the tech-savvy 27-year-old son of Kevin Flynn, looks into his father's disappearance.",
            "released": "2010-12-16",
            "runtime": 125,
            "trailer": "http://youtube.com/watch?v=L9szn1QQfas",
            "homepage": "http://disney.go.com/tron/",
            "rating": 7.3,
            "votes": 1880,
            "updated_at": "2014-07-23T03:21:46.000+0000",
            "language": "en",
            "available_translations": ["en", "de", "fr"],
            "genres": ["action", "science-fiction"],
            "certification": "PG-13"
        }));
    }
    movie
}

fn dark_knight() -> Value {
    json!({
        "title": "The Dark Knight",
        "year": 2008,
        "ids": {"trakt": 4, "slug": "the-dark-knight-2008", "imdb": "tt0468569", "tmdb": 155}
    })
}

pub fn breaking_bad(full: bool) -> Value {
    let mut show = json!({
        "title": "Breaking Bad",
        "year": 2008,
        "ids": {"trakt": 1388, "slug": "breaking-bad", "imdb": "tt0903747", "tmdb": 1396, "tvdb": 81189, "tvrage": 18164}
    });
    if full {
        merge(&mut show, json!({
            "overview": "A high school chemistry teacher diagnosed with cancer teams up with a former student.",
            "first_aired": "2008-01-20T02:00:00.000+0000",
            "airs": {"day": "Sunday", "time": "21:00", "timezone": "America/New_York"},
            "runtime": 45,
            "certification": "TV-MA",
            "network": "AMC",
            "country": "us",
            "status": "ended",
            "rating": 9.4,
            "votes": 44773,
            "updated_at": "2014-07-23T03:21:46.000+0000",
            "language": "en",
            "available_translations": ["en", "de", "es"],
            "genres": ["drama", "crime"],
            "aired_episodes": 62
        }));
    }
    show
}

fn merge(target: &mut Value, extra: Value) {
    if let (Some(target), Value::Object(extra)) = (target.as_object_mut(), extra) {
        target.extend(extra);
    }
}

pub fn movie_credits() -> Value {
    json!({
        "cast": [
            {"character": "Kevin Flynn", "person": {"name": "Jeff Bridges", "ids": {"trakt": 776, "slug": "jeff-bridges", "imdb": "nm0000313"}}},
            {"character": "Sam Flynn", "person": {"name": "Garrett Hedlund", "ids": {"trakt": 9541, "slug": "garrett-hedlund"}}},
            {"character": "Quorra", "person": {"name": "Olivia Wilde", "ids": {"trakt": 451, "slug": "olivia-wilde"}}}
        ],
        "crew": {
            "production": [
                {"job": "Producer", "person": {"name": "Sean Bailey", "ids": {"trakt": 13939}}}
            ],
            "directing": [
                {"job": "Director", "person": {"name": "Joseph Kosinski", "ids": {"trakt": 12096, "slug": "joseph-kosinski"}}}
            ],
            "writing": [
                {"job": "Screenplay", "person": {"name": "Edward Kitsis", "ids": {"trakt": 14204}}}
            ],
            "costume & make-up": [
                {"job": "Costume Design", "person": {"name": "Michael Wilkinson", "ids": {"trakt": 21541}}}
            ]
        }
    })
}

pub fn show_credits() -> Value {
    json!({
        "cast": [
            {"character": "Walter White", "person": {"name": "Bryan Cranston", "ids": {"trakt": 142, "slug": "bryan-cranston", "imdb": "nm0186505"}}},
            {"character": "Jesse Pinkman", "person": {"name": "Aaron Paul", "ids": {"trakt": 1893, "slug": "aaron-paul"}}}
        ],
        "crew": {
            "production": [
                {"job": "Executive Producer", "person": {"name": "Vince Gilligan", "ids": {"trakt": 796, "slug": "vince-gilligan"}}}
            ]
        }
    })
}

pub fn movie_rating_summary() -> Value {
    json!({
        "rating": 7.3,
        "votes": 1880,
        "distribution": {
            "1": 15, "2": 4, "3": 11, "4": 26, "5": 78,
            "6": 226, "7": 536, "8": 456, "9": 256, "10": 272
        }
    })
}

pub fn show_rating_summary() -> Value {
    json!({
        "rating": 9.4,
        "votes": 44773,
        "distribution": {
            "1": 258, "2": 57, "3": 59, "4": 116, "5": 262,
            "6": 448, "7": 1427, "8": 3893, "9": 8467, "10": 29786
        }
    })
}

pub fn movie_collection() -> Value {
    json!([
        {"collected_at": "2014-03-12T20:14:09.000+0000", "movie": tron_legacy(false)},
        {"collected_at": "2014-03-13T18:05:21.000+0000", "movie": dark_knight()}
    ])
}

pub fn show_collection() -> Value {
    json!([{
        "collected_at": "2014-07-14T01:00:00.000+0000",
        "show": breaking_bad(false),
        "seasons": [{
            "number": 1,
            "episodes": [
                {"number": 1, "collected_at": "2014-07-14T01:00:00.000+0000"},
                {"number": 2, "collected_at": "2014-07-14T01:00:00.000+0000"},
                {"number": 3, "collected_at": "2014-07-14T01:00:00.000+0000"}
            ]
        }]
    }])
}

/// Twelve entries, so the default page size of ten leaves two for page two.
pub fn movie_history() -> Vec<Value> {
    (1..=12)
        .map(|n: u32| {
            let movie = if n % 2 == 0 { dark_knight() } else { tron_legacy(false) };
            json!({
                "id": 1_982_300 + n,
                "watched_at": format!("2014-09-{n:02}T09:10:11.000+0000"),
                "action": "watch",
                "type": "movie",
                "movie": movie
            })
        })
        .collect()
}

pub fn episode_history() -> Vec<Value> {
    (1u32..=12)
        .map(|n| {
            let (season, number) = if n <= 7 { (1, n) } else { (2, n - 7) };
            json!({
                "id": 1_982_500 + n,
                "watched_at": format!("2014-10-{n:02}T20:00:00.000+0000"),
                "action": "watch",
                "type": "episode",
                "episode": {
                    "season": season,
                    "number": number,
                    "title": BREAKING_BAD_EPISODES[(n - 1) as usize],
                    "ids": {"tvdb": 349_232 + n}
                },
                "show": breaking_bad(false)
            })
        })
        .collect()
}

pub fn watched_movies() -> Value {
    json!([
        {"plays": 4, "last_watched_at": "2014-10-11T17:00:54.000+0000", "movie": tron_legacy(false)},
        {"plays": 2, "last_watched_at": "2014-10-12T17:00:54.000+0000", "movie": dark_knight()}
    ])
}

pub fn watched_shows() -> Value {
    json!([{
        "plays": 62,
        "last_watched_at": "2014-10-11T17:00:54.000+0000",
        "show": breaking_bad(false),
        "seasons": [{
            "number": 1,
            "episodes": [
                {"number": 1, "plays": 2, "last_watched_at": "2014-10-11T17:00:54.000+0000"},
                {"number": 2, "plays": 1, "last_watched_at": "2014-10-11T17:00:54.000+0000"}
            ]
        }]
    }])
}

pub fn rated_movies() -> Value {
    json!([
        {"rated_at": "2014-09-01T09:10:11.000+0000", "rating": 9, "movie": tron_legacy(false)},
        {"rated_at": "2014-09-02T09:10:11.000+0000", "rating": 10, "movie": dark_knight()}
    ])
}

pub fn rated_shows() -> Value {
    json!([
        {"rated_at": "2014-09-01T09:10:11.000+0000", "rating": 10, "show": breaking_bad(false)}
    ])
}

pub fn lists() -> Value {
    json!([{
        "name": "Star Wars in machete order",
        "description": "Next time you want to introduce someone to Star Wars for the first time, watch the films with them in this order: IV, V, II, III, VI.",
        "privacy": "public",
        "display_numbers": true,
        "allow_comments": true,
        "created_at": LIST_CREATED_AT,
        "updated_at": LIST_CREATED_AT,
        "item_count": 5,
        "comment_count": 0,
        "likes": 0,
        "ids": {"trakt": 55, "slug": "star-wars-in-machete-order"}
    }])
}
