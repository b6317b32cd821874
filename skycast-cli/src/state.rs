//! Search lifecycle for the dashboard.
//!
//! `Idle -> Searching -> (Success | Failed)` and back around; every new
//! search re-enters `Searching` regardless of the prior terminal state.
//! Each search is issued a monotonically increasing ticket, and a
//! completion carrying anything but the latest ticket is discarded, so a
//! slow early request can never overwrite a later result with stale data.

use skycast_core::model::WeatherData;

#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    Success(WeatherData),
    Failed(String),
}

#[derive(Debug, Default)]
pub struct Dashboard {
    phase: Phase,
    issued: u64,
}

impl Dashboard {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, Phase::Searching)
    }

    /// Enter `Searching` and issue a ticket for the in-flight request.
    pub fn begin_search(&mut self) -> u64 {
        self.issued += 1;
        self.phase = Phase::Searching;
        self.issued
    }

    /// Apply a completion. Returns `false` when the ticket is stale and the
    /// result was discarded.
    pub fn complete(&mut self, ticket: u64, result: Result<WeatherData, String>) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.phase = match result {
            Ok(data) => Phase::Success(data),
            Err(message) => Phase::Failed(message),
        };
        true
    }
}
