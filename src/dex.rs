use crate::error::LookupError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// How a record is addressed on the dex service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// Free text from the search field, lowercased.
    Name(String),
    /// An id taken from a record that was already fetched.
    Number(u32),
}

impl Identifier {
    /// Normalize search-field text. Digits stay text: the service resolves them on the same path.
    pub fn parse(text: &str) -> Result<Self, LookupError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(Self::Name(trimmed.to_lowercase()))
    }

    pub fn from_id(id: u32) -> Self {
        Self::Number(id)
    }

    /// Final path segment of the request URL.
    pub fn path_segment(&self) -> String {
        match self {
            Self::Name(name) => name.to_lowercase(),
            Self::Number(id) => id.to_string(),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path_segment())
    }
}

/// Height and weight in the service's tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Measurements {
    pub height: u32,
    pub weight: u32,
}

impl Measurements {
    pub fn height_m(&self) -> f64 {
        self.height as f64 / 10.0
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight as f64 / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistic {
    pub name: String,
    pub value: u32,
}

/// The single creature currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    pub categories: Vec<String>,
    pub measurements: Measurements,
    pub statistics: Vec<Statistic>,
}

impl Record {
    /// Parse a response body into a record.
    pub fn from_json(body: &[u8]) -> Result<Self, LookupError> {
        let wire: WireRecord = serde_json::from_slice(body)?;
        Ok(wire.into())
    }
}

// ── Wire shape ──

#[derive(Debug, Deserialize)]
struct WireRecord {
    id: u32,
    name: String,
    sprites: WireSprites,
    types: Vec<WireTypeSlot>,
    height: u32,
    weight: u32,
    stats: Vec<WireStat>,
}

#[derive(Debug, Deserialize)]
struct WireSprites {
    #[serde(default)]
    other: HashMap<String, WireArtwork>,
}

#[derive(Debug, Deserialize)]
struct WireArtwork {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireTypeSlot {
    #[serde(rename = "type")]
    kind: WireNamed,
}

#[derive(Debug, Deserialize)]
struct WireStat {
    base_stat: u32,
    stat: WireNamed,
}

#[derive(Debug, Deserialize)]
struct WireNamed {
    name: String,
}

impl From<WireRecord> for Record {
    fn from(wire: WireRecord) -> Self {
        let image_url = wire
            .sprites
            .other
            .get("official-artwork")
            .and_then(|art| art.front_default.clone());
        Self {
            id: wire.id,
            name: wire.name,
            image_url,
            categories: wire.types.into_iter().map(|t| t.kind.name).collect(),
            measurements: Measurements {
                height: wire.height,
                weight: wire.weight,
            },
            statistics: wire
                .stats
                .into_iter()
                .map(|s| Statistic {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}

/// Anything that can resolve an identifier to a record.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self, identifier: &Identifier) -> Result<Record, LookupError>;
}

/// HTTP client for the dex service.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    base_url: String,
}

impl DexClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, identifier: &Identifier) -> String {
        format!("{}/{}", self.base_url, identifier.path_segment())
    }
}

#[async_trait::async_trait]
impl RecordSource for DexClient {
    async fn fetch(&self, identifier: &Identifier) -> Result<Record, LookupError> {
        let url = self.url_for(identifier);
        tracing::debug!(%url, "requesting record");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Record::from_json(&body)
    }
}
