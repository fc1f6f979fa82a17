use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! name_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_newtype!(ChannelId);
id_newtype!(PlaylistOwnerId);

name_newtype!(TriggerId);
name_newtype!(TargetId);
name_newtype!(InputId);

/// Sveriges Radio channels with a bound trigger.
pub const SR_P1: ChannelId = ChannelId(132);
pub const SR_P2: ChannelId = ChannelId(163);
pub const SR_P3: ChannelId = ChannelId(164);
pub const SR_P4: ChannelId = ChannelId(207);

pub const DEFAULT_PLAYLIST_OWNER: PlaylistOwnerId = PlaylistOwnerId(10);
