pub mod capture;
pub mod controller;
pub mod ids;
pub mod prompts;
pub mod view;

pub use capture::{NewPlace, PlaceDraft, TitledDraft, UNTITLED_PLACE};
pub use controller::{ClickOutcome, PlacesController, PlacesState, ResetOutcome};
pub use ids::{IdProvider, RandomIds, SequentialIds};
pub use prompts::{Prompter, ScriptedPrompter};
pub use shared::domain::{LatLng, Place, PlaceId};
