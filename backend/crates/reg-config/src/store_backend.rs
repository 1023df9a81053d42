use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which record store the server is built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Database,
    File,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::File => "file",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "database" | "db" => Ok(Self::Database),
            "file" | "json" => Ok(Self::File),
            _ => Err(()),
        }
    }
}
