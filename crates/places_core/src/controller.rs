use shared::domain::{LatLng, Place, PlaceId};
use tracing::{debug, info};

use crate::capture::{NewPlace, PlaceDraft};
use crate::ids::{IdProvider, RandomIds};
use crate::prompts::{Prompter, NOTES_PROMPT, RESET_CONFIRMATION, TITLE_PROMPT};

/// Places are only ever appended or cleared all at once.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesState {
    places: Vec<Place>,
    collecting: bool,
}

impl Default for PlacesState {
    fn default() -> Self {
        Self {
            places: Vec::new(),
            collecting: true,
        }
    }
}

impl PlacesState {
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn is_collecting(&self) -> bool {
        self.collecting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Not collecting; nothing was asked.
    Ignored,
    /// The title prompt was cancelled.
    Cancelled,
    Added(PlaceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    Cleared { removed: usize },
    Declined,
}

pub struct PlacesController<I = RandomIds> {
    state: PlacesState,
    ids: I,
}

impl PlacesController<RandomIds> {
    pub fn new() -> Self {
        Self::with_id_provider(RandomIds)
    }
}

impl Default for PlacesController<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdProvider> PlacesController<I> {
    pub fn with_id_provider(ids: I) -> Self {
        Self {
            state: PlacesState::default(),
            ids,
        }
    }

    pub fn state(&self) -> &PlacesState {
        &self.state
    }

    pub fn places(&self) -> &[Place] {
        &self.state.places
    }

    pub fn is_collecting(&self) -> bool {
        self.state.collecting
    }

    pub fn len(&self) -> usize {
        self.state.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.places.is_empty()
    }

    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.state.places.iter().find(|place| place.id == id)
    }

    pub fn set_collecting(&mut self, collecting: bool) {
        if self.state.collecting != collecting {
            debug!(collecting, "collecting mode changed");
        }
        self.state.collecting = collecting;
    }

    /// Starts capturing a place at `position`, or `None` while not collecting.
    pub fn begin_capture(&self, position: LatLng) -> Option<PlaceDraft> {
        if !self.state.collecting {
            debug!(%position, "map click ignored while paused");
            return None;
        }
        Some(PlaceDraft::new(position))
    }

    pub fn commit(&mut self, new_place: NewPlace) -> PlaceId {
        let id = self.ids.next_id();
        debug_assert!(
            self.get(id).is_none(),
            "id provider returned a duplicate id {id}"
        );

        let NewPlace {
            position,
            title,
            notes,
        } = new_place;
        info!(%id, %position, title = %title, "place added");
        self.state.places.push(Place {
            id,
            position,
            title,
            notes,
        });
        id
    }

    /// Runs the whole click flow with blocking prompts.
    pub fn handle_map_click<P>(&mut self, position: LatLng, prompter: &mut P) -> ClickOutcome
    where
        P: Prompter + ?Sized,
    {
        let Some(draft) = self.begin_capture(position) else {
            return ClickOutcome::Ignored;
        };

        let title = prompter.ask_text(TITLE_PROMPT, "");
        let Some(titled) = draft.answer_title(title) else {
            debug!(%position, "title prompt cancelled; click discarded");
            return ClickOutcome::Cancelled;
        };

        let notes = prompter.ask_text(NOTES_PROMPT, "");
        let new_place = titled.answer_notes(notes);
        ClickOutcome::Added(self.commit(new_place))
    }

    pub fn answer_reset(&mut self, confirmed: bool) -> ResetOutcome {
        if !confirmed {
            debug!("reset declined");
            return ResetOutcome::Declined;
        }

        let removed = self.state.places.len();
        self.state.places.clear();
        self.state.collecting = true;
        info!(removed, "places reset");
        ResetOutcome::Cleared { removed }
    }

    pub fn reset<P>(&mut self, prompter: &mut P) -> ResetOutcome
    where
        P: Prompter + ?Sized,
    {
        let confirmed = prompter.confirm(RESET_CONFIRMATION);
        self.answer_reset(confirmed)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
