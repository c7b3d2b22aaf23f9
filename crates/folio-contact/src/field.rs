use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three contact form inputs, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form field name as submitted by the browser
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Fixed message shown when this field fails its rule
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::Name => "Name must be at least 2 characters",
            Field::Email => "Please enter a valid email address",
            Field::Message => "Message must be at least 10 characters",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
