//! Closed vocabularies accepted by the News API.
//!
//! Every enum here mirrors a fixed list of values the API accepts for a query
//! parameter. The wire strings (two-letter codes, `publishedAt`, ...) are
//! dictated by the API and must not be changed.
//!
//! Each enum provides:
//! - `as_str()`: the wire value
//! - `ALL`: every variant, in the API's documented order
//! - [`Display`](std::fmt::Display) / [`FromStr`] using the wire value
//! - serde `Serialize` / `Deserialize` using the wire value

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest `pageSize` the API accepts.
pub const PAGE_SIZE_MAX: u32 = 100;

/// Returned by `FromStr` when a string is not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    /// Which vocabulary was being parsed (e.g. `"country"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = concat!("`", $wire, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in wire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value sent on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// News category, used by `top-headlines` and `sources`.
    Category, "category" {
        Business => "business",
        Entertainment => "entertainment",
        General => "general",
        Health => "health",
        Science => "science",
        Sports => "sports",
        Technology => "technology",
    }
}

wire_enum! {
    /// Country a headline or source belongs to (ISO 3166-1 alpha-2, lowercase).
    Country, "country" {
        UnitedArabEmirates => "ae",
        Argentina => "ar",
        Austria => "at",
        Australia => "au",
        Belgium => "be",
        Bulgaria => "bg",
        Brazil => "br",
        Canada => "ca",
        Switzerland => "ch",
        China => "cn",
        Colombia => "co",
        Cuba => "cu",
        Czechia => "cz",
        Germany => "de",
        Egypt => "eg",
        France => "fr",
        UnitedKingdom => "gb",
        Greece => "gr",
        HongKong => "hk",
        Hungary => "hu",
        Indonesia => "id",
        Ireland => "ie",
        Israel => "il",
        India => "in",
        Italy => "it",
        Japan => "jp",
        SouthKorea => "kr",
        Lithuania => "lt",
        Latvia => "lv",
        Morocco => "ma",
        Mexico => "mx",
        Malaysia => "my",
        Nigeria => "ng",
        Netherlands => "nl",
        Norway => "no",
        NewZealand => "nz",
        Philippines => "ph",
        Poland => "pl",
        Portugal => "pt",
        Romania => "ro",
        Serbia => "rs",
        Russia => "ru",
        SaudiArabia => "sa",
        Sweden => "se",
        Singapore => "sg",
        Slovenia => "si",
        Slovakia => "sk",
        Thailand => "th",
        Turkey => "tr",
        Taiwan => "tw",
        Ukraine => "ua",
        UnitedStates => "us",
        Venezuela => "ve",
        SouthAfrica => "za",
    }
}

wire_enum! {
    /// Article language (ISO 639-1, with the API's own `se` and `ud` codes).
    Language, "language" {
        Arabic => "ar",
        German => "de",
        English => "en",
        Spanish => "es",
        French => "fr",
        Hebrew => "he",
        Italian => "it",
        Dutch => "nl",
        Norwegian => "no",
        Portuguese => "pt",
        Russian => "ru",
        Swedish => "se",
        Urdu => "ud",
        Chinese => "zh",
    }
}

wire_enum! {
    /// Ordering for the `everything` endpoint.
    SortBy, "sortBy" {
        Relevancy => "relevancy",
        Popularity => "popularity",
        PublishedAt => "publishedAt",
    }
}
