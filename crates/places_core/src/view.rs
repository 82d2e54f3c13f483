use shared::domain::{Place, PlaceId};

use crate::controller::PlacesState;

pub const EMPTY_LIST_HEADLINE: &str = "No places yet.";
pub const EMPTY_LIST_HINT: &str = "Click the map to add your first place.";
pub const LIST_HEADING: &str = "Places (live)";
pub const LIST_NO_NOTES: &str = "No notes";
pub const POPUP_NO_NOTES: &str = "No notes provided";
pub const PAUSED_HEADLINE: &str = "Collection paused.";
pub const PAUSED_HINT: &str = "Markers remain on the map. Click Collect to continue adding.";

pub const HOW_TO_USE: [&str; 5] = [
    "While Collect is active, click anywhere on the map.",
    "Enter a name and notes when prompted.",
    "Click Done to stop adding (list will hide).",
    "Click any marker to see its info.",
    "Reset clears everything.",
];

#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Paused,
    Empty,
    Entries(Vec<ListEntry<'a>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry<'a> {
    pub id: PlaceId,
    pub title: &'a str,
    /// Notes, or the "no notes" placeholder.
    pub notes: &'a str,
    pub has_notes: bool,
    pub coordinates: String,
}

pub fn list_view(state: &PlacesState) -> ListView<'_> {
    if !state.is_collecting() {
        return ListView::Paused;
    }
    if state.places().is_empty() {
        return ListView::Empty;
    }

    ListView::Entries(
        state
            .places()
            .iter()
            .map(|place| ListEntry {
                id: place.id,
                title: &place.title,
                notes: notes_or(place, LIST_NO_NOTES),
                has_notes: place.has_notes(),
                coordinates: place.position.to_string(),
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup<'a> {
    pub title: &'a str,
    pub notes: &'a str,
    pub has_notes: bool,
    pub coordinates: String,
}

pub fn marker_popup(place: &Place) -> MarkerPopup<'_> {
    MarkerPopup {
        title: &place.title,
        notes: notes_or(place, POPUP_NO_NOTES),
        has_notes: place.has_notes(),
        coordinates: place.position.to_string(),
    }
}

fn notes_or<'a>(place: &'a Place, placeholder: &'static str) -> &'a str {
    if place.has_notes() {
        &place.notes
    } else {
        placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlacesController, ScriptedPrompter, SequentialIds};
    use shared::domain::LatLng;

    fn controller_with(entries: &[(&str, &str)]) -> PlacesController<SequentialIds> {
        let mut controller = PlacesController::with_id_provider(SequentialIds::new());
        let mut prompter = ScriptedPrompter::new();
        for (title, notes) in entries {
            prompter = prompter.answer(*title).answer(*notes);
        }
        for (idx, _) in entries.iter().enumerate() {
            let pos = LatLng::new(idx as f64, 12.3456789).expect("pos");
            controller.handle_map_click(pos, &mut prompter);
        }
        controller
    }

    #[test]
    fn empty_collection_shows_placeholder() {
        let controller = controller_with(&[]);
        assert_eq!(list_view(controller.state()), ListView::Empty);
    }

    #[test]
    fn paused_hides_entries_even_with_places() {
        let mut controller = controller_with(&[("Home", "")]);
        controller.set_collecting(false);
        assert_eq!(list_view(controller.state()), ListView::Paused);
    }

    #[test]
    fn entries_follow_insertion_order_with_formatted_coordinates() {
        let controller = controller_with(&[("Home", "nice view"), ("Work", "")]);

        let ListView::Entries(entries) = list_view(controller.state()) else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Home");
        assert_eq!(entries[0].notes, "nice view");
        assert!(entries[0].has_notes);
        assert_eq!(entries[0].coordinates, "0.00000, 12.34568");
        assert_eq!(entries[1].title, "Work");
        assert_eq!(entries[1].notes, LIST_NO_NOTES);
        assert!(!entries[1].has_notes);
    }

    #[test]
    fn popup_uses_its_own_empty_notes_wording() {
        let controller = controller_with(&[("Home", "")]);
        let popup = marker_popup(&controller.places()[0]);
        assert_eq!(popup.title, "Home");
        assert_eq!(popup.notes, POPUP_NO_NOTES);
        assert_eq!(popup.coordinates, "0.00000, 12.34568");
    }
}
