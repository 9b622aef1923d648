use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::str::FromStr;

/// Voices accepted by the realtime session endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Voice {
    Alloy,
    Ash,
    Ballad,
    Coral,
    Echo,
    Sage,
    Shimmer,
    Verse,
    Custom(String),
}

impl Voice {
    pub fn as_str(&self) -> &str {
        match self {
            Voice::Alloy => "alloy",
            Voice::Ash => "ash",
            Voice::Ballad => "ballad",
            Voice::Coral => "coral",
            Voice::Echo => "echo",
            Voice::Sage => "sage",
            Voice::Shimmer => "shimmer",
            Voice::Verse => "verse",
            Voice::Custom(s) => s,
        }
    }
}

impl Serialize for Voice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "alloy" => Voice::Alloy,
            "ash" => Voice::Ash,
            "ballad" => Voice::Ballad,
            "coral" => Voice::Coral,
            "echo" => Voice::Echo,
            "sage" => Voice::Sage,
            "shimmer" => Voice::Shimmer,
            "verse" => Voice::Verse,
            _ => Voice::Custom(s.to_string()),
        })
    }
}

impl<'de> Deserialize<'de> for Voice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Unknown names fall through to `Custom`, so parsing cannot fail.
        match Voice::from_str(&s) {
            Ok(voice) => Ok(voice),
            Err(never) => match never {},
        }
    }
}
