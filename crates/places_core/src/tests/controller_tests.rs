use super::*;
use crate::capture::UNTITLED_PLACE;
use crate::ids::SequentialIds;
use crate::prompts::ScriptedPrompter;
use std::collections::HashSet;
use uuid::Uuid;

fn controller() -> PlacesController<SequentialIds> {
    PlacesController::with_id_provider(SequentialIds::new())
}

fn at(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng).expect("valid coordinates")
}

#[test]
fn starts_collecting_with_no_places() {
    let controller = controller();
    assert!(controller.is_collecting());
    assert!(controller.is_empty());
    assert_eq!(controller.state(), &PlacesState::default());
}

#[test]
fn accepted_click_appends_place_with_answers() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("Home").answer("nice view");

    let outcome = controller.handle_map_click(at(10.0, 20.0), &mut prompter);

    let id = PlaceId(Uuid::from_u128(1));
    assert_eq!(outcome, ClickOutcome::Added(id));
    assert_eq!(
        controller.places(),
        &[Place {
            id,
            position: at(10.0, 20.0),
            title: "Home".to_string(),
            notes: "nice view".to_string(),
        }]
    );
}

#[test]
fn asks_title_then_notes_with_fixed_wording() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("Home").answer("");

    controller.handle_map_click(at(0.0, 0.0), &mut prompter);

    assert_eq!(prompter.asked(), &[TITLE_PROMPT, NOTES_PROMPT]);
    assert_eq!(prompter.asked_defaults(), &["", ""]);
}

#[test]
fn cancelled_title_discards_click_without_asking_notes() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().cancel().answer("never read");

    let outcome = controller.handle_map_click(at(5.0, 5.0), &mut prompter);

    assert_eq!(outcome, ClickOutcome::Cancelled);
    assert!(controller.is_empty());
    assert_eq!(prompter.asked(), &[TITLE_PROMPT]);
    assert_eq!(prompter.remaining_text_answers(), 1);
}

#[test]
fn cancelled_notes_still_add_place_with_empty_notes() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("A").cancel();

    let outcome = controller.handle_map_click(at(1.0, 1.0), &mut prompter);

    assert!(matches!(outcome, ClickOutcome::Added(_)));
    let place = &controller.places()[0];
    assert_eq!(place.title, "A");
    assert_eq!(place.notes, "");
    assert_eq!(place.position, at(1.0, 1.0));
}

#[test]
fn whitespace_title_uses_placeholder_and_trims_notes() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("   ").answer("  lived here 2010-2014 ");

    controller.handle_map_click(at(-33.9, 151.2), &mut prompter);

    let place = &controller.places()[0];
    assert_eq!(place.title, UNTITLED_PLACE);
    assert_eq!(place.notes, "lived here 2010-2014");
}

#[test]
fn clicks_while_paused_never_prompt() {
    let mut controller = controller();
    controller.set_collecting(false);
    let mut prompter = ScriptedPrompter::new().answer("Home").answer("notes");

    let outcome = controller.handle_map_click(at(10.0, 20.0), &mut prompter);

    assert_eq!(outcome, ClickOutcome::Ignored);
    assert!(prompter.asked().is_empty());
    assert!(controller.is_empty());
    assert!(controller.begin_capture(at(10.0, 20.0)).is_none());
}

#[test]
fn toggling_collecting_keeps_existing_places() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("A").answer("").answer("B").answer("");
    controller.handle_map_click(at(1.0, 1.0), &mut prompter);
    controller.handle_map_click(at(2.0, 2.0), &mut prompter);
    let before = controller.places().to_vec();

    controller.set_collecting(false);
    controller.set_collecting(true);

    assert_eq!(controller.places(), before.as_slice());
    assert!(controller.is_collecting());
}

#[test]
fn places_keep_click_order_and_unique_ids() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new();
    for title in ["first", "second", "third"] {
        prompter = prompter.answer(title).answer("");
    }

    for lng in [10.0, 20.0, 30.0] {
        controller.handle_map_click(at(0.0, lng), &mut prompter);
    }

    let titles: Vec<_> = controller.places().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["first", "second", "third"]);
    let ids: HashSet<_> = controller.places().iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn get_finds_place_by_id() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("Home").answer("");
    let ClickOutcome::Added(id) = controller.handle_map_click(at(3.0, 4.0), &mut prompter) else {
        panic!("expected place to be added");
    };

    assert_eq!(controller.get(id).map(|p| p.title.as_str()), Some("Home"));
    assert!(controller.get(PlaceId(Uuid::from_u128(99))).is_none());
}

#[test]
fn confirmed_reset_clears_and_resumes_collecting() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new()
        .answer("A")
        .answer("")
        .confirm_with(true);
    controller.handle_map_click(at(1.0, 1.0), &mut prompter);
    controller.set_collecting(false);

    let outcome = controller.reset(&mut prompter);

    assert_eq!(outcome, ResetOutcome::Cleared { removed: 1 });
    assert!(controller.is_empty());
    assert!(controller.is_collecting());
    assert_eq!(prompter.asked().last().map(String::as_str), Some(RESET_CONFIRMATION));
}

#[test]
fn declined_reset_changes_nothing() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new()
        .answer("A")
        .answer("")
        .confirm_with(false);
    controller.handle_map_click(at(1.0, 1.0), &mut prompter);
    controller.set_collecting(false);
    let before = controller.state().clone();

    let outcome = controller.reset(&mut prompter);

    assert_eq!(outcome, ResetOutcome::Declined);
    assert_eq!(controller.state(), &before);
    assert!(!controller.is_collecting());
}

#[test]
fn ids_are_not_reused_after_reset() {
    let mut controller = controller();
    let mut prompter = ScriptedPrompter::new().answer("A").answer("").answer("B").answer("");
    controller.handle_map_click(at(1.0, 1.0), &mut prompter);
    controller.answer_reset(true);
    controller.handle_map_click(at(1.0, 1.0), &mut prompter);

    assert_eq!(controller.places()[0].id, PlaceId(Uuid::from_u128(2)));
}

#[test]
fn stepwise_capture_matches_blocking_flow() {
    let mut controller = controller();
    let draft = controller.begin_capture(at(10.0, 20.0)).expect("collecting");
    let titled = draft.answer_title(Some(" Home ".to_string())).expect("title given");
    let id = controller.commit(titled.answer_notes(Some("nice view".to_string())));

    let place = controller.get(id).expect("committed");
    assert_eq!(place.title, "Home");
    assert_eq!(place.notes, "nice view");
    assert_eq!(place.position, at(10.0, 20.0));
}
