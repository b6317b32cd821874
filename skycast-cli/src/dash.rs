//! Interactive dashboard loop.
//!
//! A prompt with ranked city autocomplete, recent-search hints, and rendered
//! results. Empty input (or Esc) exits.
//!
//! Unlike the browser flow this was modelled on, a search enters the recent
//! list only after it renders successfully; a submitted or selected city
//! that fails lookup is deliberately kept out of the history.

use anyhow::Result;
use inquire::{
    CustomUserError, Text,
    autocompletion::{Autocomplete, Replacement},
};
use skycast_core::{
    recent::{FileStore, RecentSearches},
    suggest,
};

use crate::{
    client::ProxyClient,
    display,
    state::{Dashboard, Phase},
};

#[derive(Clone, Default)]
struct CitySuggester;

impl Autocomplete for CitySuggester {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(suggest::suggest(input))
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

pub async fn run(server: &str) -> Result<()> {
    let client = ProxyClient::new(server);
    let store = FileStore::open_default()?;
    let mut recents = RecentSearches::load(store);
    let mut dashboard = Dashboard::default();

    println!("Skycast — type a city name; empty input quits.");

    loop {
        if !recents.entries().is_empty() {
            println!("Recent: {}", recents.entries().join(", "));
        }

        let input = Text::new("City:")
            .with_autocomplete(CitySuggester)
            .with_help_message("start typing for suggestions")
            .prompt_skippable()?;

        let Some(city) = input
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
        else {
            break;
        };

        let ticket = dashboard.begin_search();
        if dashboard.is_searching() {
            println!("Searching...");
        }

        // The terminal flow runs one search at a time, so this ticket is
        // always the latest; the guard matters for embedders driving
        // searches concurrently.
        let outcome = client.get_weather(&city).await.map_err(|e| e.to_string());
        dashboard.complete(ticket, outcome);

        match dashboard.phase() {
            Phase::Success(data) => {
                print!("{}", display::render(data));
                // Only successful lookups are remembered; see module doc.
                recents.record(&city)?;
            }
            Phase::Failed(message) => println!("Something went wrong: {message}"),
            Phase::Idle | Phase::Searching => {}
        }
        println!();
    }

    Ok(())
}
