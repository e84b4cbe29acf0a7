//! Closed enumerations with fixed wire tokens.
//!
//! # Design
//! Each enumeration maps every variant to exactly one wire token and back.
//! Both directions are exhaustive `match`es, so the compiler enforces that
//! the table stays total whenever a variant is added; the bijection tests
//! below catch duplicate tokens. Unknown tokens decode to a [`DecodeError`]
//! naming the enumeration and the raw value — never to a fallback variant,
//! which would hide contract drift on the remote side.
//!
//! `Privacy` and `Status` are string-keyed in JSON bodies. `Rating` is
//! integer-keyed (the 1–10 scale). `Extended` is a query-string token only
//! and never appears in JSON, but keeps the same closed-set discipline.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::DecodeError;

/// Privacy level of a user list: `private`, `friends`, or `public`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Privacy {
    Private,
    Friends,
    Public,
}

impl Privacy {
    pub const ALL: [Privacy; 3] = [Privacy::Private, Privacy::Friends, Privacy::Public];

    pub fn as_str(self) -> &'static str {
        match self {
            Privacy::Private => "private",
            Privacy::Friends => "friends",
            Privacy::Public => "public",
        }
    }
}

impl FromStr for Privacy {
    type Err = DecodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "private" => Ok(Privacy::Private),
            "friends" => Ok(Privacy::Friends),
            "public" => Ok(Privacy::Public),
            other => Err(DecodeError::new("privacy", other)),
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Privacy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Privacy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Airing status of a show. Tokens contain spaces on the wire
/// (`"returning series"`, `"in production"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    ReturningSeries,
    InProduction,
    Planned,
    Canceled,
    Ended,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::ReturningSeries,
        Status::InProduction,
        Status::Planned,
        Status::Canceled,
        Status::Ended,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ReturningSeries => "returning series",
            Status::InProduction => "in production",
            Status::Planned => "planned",
            Status::Canceled => "canceled",
            Status::Ended => "ended",
        }
    }
}

impl FromStr for Status {
    type Err = DecodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "returning series" => Ok(Status::ReturningSeries),
            "in production" => Ok(Status::InProduction),
            "planned" => Ok(Status::Planned),
            "canceled" => Ok(Status::Canceled),
            "ended" => Ok(Status::Ended),
            other => Err(DecodeError::new("status", other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// The 1–10 user rating scale, integer-keyed on the wire.
///
/// There is no "unrated" variant: absence is `None` on the surrounding
/// `Option<Rating>` field, and an explicit out-of-range integer is a decode
/// error rather than a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rating {
    WeakSauce = 1,
    Terrible = 2,
    Bad = 3,
    Poor = 4,
    Meh = 5,
    Fair = 6,
    Good = 7,
    Great = 8,
    Superb = 9,
    TotallyNinja = 10,
}

impl Rating {
    pub const ALL: [Rating; 10] = [
        Rating::WeakSauce,
        Rating::Terrible,
        Rating::Bad,
        Rating::Poor,
        Rating::Meh,
        Rating::Fair,
        Rating::Good,
        Rating::Great,
        Rating::Superb,
        Rating::TotallyNinja,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: i64) -> Result<Rating, DecodeError> {
        match value {
            1 => Ok(Rating::WeakSauce),
            2 => Ok(Rating::Terrible),
            3 => Ok(Rating::Bad),
            4 => Ok(Rating::Poor),
            5 => Ok(Rating::Meh),
            6 => Ok(Rating::Fair),
            7 => Ok(Rating::Good),
            8 => Ok(Rating::Great),
            9 => Ok(Rating::Superb),
            10 => Ok(Rating::TotallyNinja),
            other => Err(DecodeError::new("rating", other.to_string())),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Rating::from_value(raw).map_err(de::Error::custom)
    }
}

/// Level of detail requested via the `extended=` query parameter.
///
/// Never part of a JSON body, so no serde impls — only the token table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extended {
    Min,
    Images,
    Full,
    FullImages,
}

impl Extended {
    pub const ALL: [Extended; 4] = [
        Extended::Min,
        Extended::Images,
        Extended::Full,
        Extended::FullImages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Extended::Min => "min",
            Extended::Images => "images",
            Extended::Full => "full",
            Extended::FullImages => "full,images",
        }
    }
}

impl FromStr for Extended {
    type Err = DecodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "min" => Ok(Extended::Min),
            "images" => Ok(Extended::Images),
            "full" => Ok(Extended::Full),
            "full,images" => Ok(Extended::FullImages),
            other => Err(DecodeError::new("extended", other)),
        }
    }
}

impl fmt::Display for Extended {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
