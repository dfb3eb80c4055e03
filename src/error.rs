use thiserror::Error;

/// Message shown for every failed lookup, whatever the underlying cause.
pub const NOT_FOUND_MESSAGE: &str = "Pokémon no encontrado. Verifica el nombre e intenta de nuevo.";

/// Everything that can go wrong between a submitted identifier and a record.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Empty search query")]
    EmptyQuery,

    #[error("Dex API error: HTTP {status}")]
    Status { status: u16 },

    #[error("HTTP request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LookupError {
    /// Get the message displayed to the user.
    ///
    /// Fetch failures all collapse to one message; the detail only goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::EmptyQuery => "Escribe un nombre o número".to_string(),
            LookupError::Status { .. } | LookupError::Network(_) | LookupError::Malformed(_) => {
                NOT_FOUND_MESSAGE.to_string()
            }
        }
    }

    /// Whether the service answered but had nothing for this identifier.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::Status { status: 404 })
    }
}
