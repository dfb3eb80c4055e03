use crate::dex::{Identifier, Record};
use crate::error::LookupError;

/// Optional behaviour on top of the basic search-and-show cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Previous/next stepping through ids.
    pub navigation: bool,
    /// Measurement tiles and stat bars.
    pub statistics: bool,
    /// Keep the current record on screen until the next one arrives.
    pub keep_record_while_loading: bool,
}

impl Capabilities {
    pub fn basic() -> Self {
        Self {
            navigation: false,
            statistics: false,
            keep_record_while_loading: false,
        }
    }

    pub fn full() -> Self {
        Self {
            navigation: true,
            statistics: true,
            keep_record_while_loading: true,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::full()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Sequence number of an issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What applying a finished request did to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Loaded { id: u32 },
    Failed,
    /// A newer request was issued after this one; the result was dropped.
    Stale,
}

/// Display state for the lookup cycle: Idle -> Loading -> (Success | Failure).
#[derive(Debug, Clone)]
pub struct LookupState {
    pub loading: bool,
    pub error: Option<String>,
    pub record: Option<Record>,
    pub capabilities: Capabilities,
    issued: u64,
}

impl LookupState {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            loading: false,
            error: None,
            record: None,
            capabilities,
            issued: 0,
        }
    }

    /// Start a lookup. The caller performs the fetch and reports back with the ticket.
    pub fn begin(&mut self, identifier: &Identifier) -> Ticket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        if !self.capabilities.keep_record_while_loading {
            self.record = None;
        }
        tracing::info!(ticket = self.issued, %identifier, "lookup started");
        Ticket(self.issued)
    }

    /// Search-form path. Blank text issues nothing.
    pub fn submit(&mut self, text: &str) -> Option<(Ticket, Identifier)> {
        let identifier = Identifier::parse(text).ok()?;
        let ticket = self.begin(&identifier);
        Some((ticket, identifier))
    }

    /// Id of the neighbour in `direction`, if one can be requested.
    pub fn target_id(&self, direction: Direction) -> Option<u32> {
        if !self.capabilities.navigation {
            return None;
        }
        let current = self.record.as_ref()?.id;
        let target = match direction {
            Direction::Previous => current.checked_sub(1)?,
            Direction::Next => current.checked_add(1)?,
        };
        (target >= 1).then_some(target)
    }

    pub fn navigate(&mut self, direction: Direction) -> Option<(Ticket, Identifier)> {
        let target = self.target_id(direction)?;
        let identifier = Identifier::from_id(target);
        let ticket = self.begin(&identifier);
        Some((ticket, identifier))
    }

    pub fn can_go_previous(&self) -> bool {
        self.target_id(Direction::Previous).is_some()
    }

    pub fn can_go_next(&self) -> bool {
        self.target_id(Direction::Next).is_some()
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Record, LookupError>) -> Completion {
        if ticket.0 != self.issued {
            tracing::debug!(ticket = ticket.0, latest = self.issued, "discarding stale completion");
            return Completion::Stale;
        }

        self.loading = false;
        match result {
            Ok(record) => {
                let id = record.id;
                tracing::info!(ticket = ticket.0, id, name = %record.name, "lookup succeeded");
                self.record = Some(record);
                Completion::Loaded { id }
            }
            Err(e) => {
                tracing::warn!(ticket = ticket.0, not_found = e.is_not_found(), error = %e, "lookup failed");
                self.error = Some(e.user_message());
                Completion::Failed
            }
        }
    }
}
