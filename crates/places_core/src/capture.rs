use shared::domain::LatLng;

pub const UNTITLED_PLACE: &str = "Untitled place";

pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNTITLED_PLACE.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn normalize_notes(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct PlaceDraft {
    position: LatLng,
}

impl PlaceDraft {
    pub(crate) fn new(position: LatLng) -> Self {
        Self { position }
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    /// `None` means the title prompt was cancelled.
    pub fn answer_title(self, answer: Option<String>) -> Option<TitledDraft> {
        let title = normalize_title(&answer?);
        Some(TitledDraft {
            position: self.position,
            title,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct TitledDraft {
    position: LatLng,
    title: String,
}

impl TitledDraft {
    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// A cancelled notes prompt still yields a place.
    pub fn answer_notes(self, answer: Option<String>) -> NewPlace {
        NewPlace {
            position: self.position,
            title: self.title,
            notes: normalize_notes(answer.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct NewPlace {
    pub(crate) position: LatLng,
    pub(crate) title: String,
    pub(crate) notes: String,
}

impl NewPlace {
    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PlaceDraft {
        PlaceDraft::new(LatLng::new(1.0, 2.0).expect("pos"))
    }

    #[test]
    fn whitespace_title_becomes_placeholder() {
        assert_eq!(normalize_title("   "), UNTITLED_PLACE);
        assert_eq!(normalize_title(""), UNTITLED_PLACE);
        assert_eq!(normalize_title("\t\n"), UNTITLED_PLACE);
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(normalize_title("  Home  "), "Home");
        assert_eq!(normalize_title("Vacation spot"), "Vacation spot");
    }

    #[test]
    fn notes_are_trimmed_and_default_to_empty() {
        assert_eq!(normalize_notes(Some("  nice view \n")), "nice view");
        assert_eq!(normalize_notes(Some("   ")), "");
        assert_eq!(normalize_notes(None), "");
    }

    #[test]
    fn cancelled_title_drops_the_draft() {
        assert!(draft().answer_title(None).is_none());
    }

    #[test]
    fn cancelled_notes_keep_the_place() {
        let place = draft()
            .answer_title(Some("A".to_string()))
            .expect("titled")
            .answer_notes(None);
        assert_eq!(place.title(), "A");
        assert_eq!(place.notes(), "");
        assert_eq!(place.position(), LatLng::new(1.0, 2.0).expect("pos"));
    }
}
