use places_core::{
    prompts::{NOTES_PROMPT, RESET_CONFIRMATION, TITLE_PROMPT},
    ClickOutcome, IdProvider, LatLng, PlaceDraft, PlacesController, ResetOutcome, TitledDraft,
};

/// The single modal prompt the UI may show; OK/Cancel feeds [`PendingPrompt::respond`].
#[derive(Debug, Clone, PartialEq)]
pub enum PendingPrompt {
    Title { draft: PlaceDraft, input: String },
    Notes { draft: TitledDraft, input: String },
    ConfirmReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    Accept,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptStep {
    Open(PendingPrompt),
    Click(ClickOutcome),
    Reset(ResetOutcome),
}

impl PendingPrompt {
    /// The title prompt for a map click, or `None` while not collecting.
    pub fn for_click<I: IdProvider>(
        controller: &PlacesController<I>,
        position: LatLng,
    ) -> Option<Self> {
        controller
            .begin_capture(position)
            .map(|draft| PendingPrompt::Title {
                draft,
                input: String::new(),
            })
    }

    pub fn message(&self) -> &'static str {
        match self {
            PendingPrompt::Title { .. } => TITLE_PROMPT,
            PendingPrompt::Notes { .. } => NOTES_PROMPT,
            PendingPrompt::ConfirmReset => RESET_CONFIRMATION,
        }
    }

    pub fn window_title(&self) -> &'static str {
        match self {
            PendingPrompt::Title { .. } => "New place",
            PendingPrompt::Notes { .. } => "Notes",
            PendingPrompt::ConfirmReset => "Reset",
        }
    }

    pub fn input_mut(&mut self) -> Option<&mut String> {
        match self {
            PendingPrompt::Title { input, .. } | PendingPrompt::Notes { input, .. } => Some(input),
            PendingPrompt::ConfirmReset => None,
        }
    }

    pub fn respond<I: IdProvider>(
        self,
        controller: &mut PlacesController<I>,
        response: PromptResponse,
    ) -> PromptStep {
        let accepted = response == PromptResponse::Accept;
        match self {
            PendingPrompt::Title { draft, input } => {
                let answer = accepted.then_some(input);
                match draft.answer_title(answer) {
                    Some(draft) => PromptStep::Open(PendingPrompt::Notes {
                        draft,
                        input: String::new(),
                    }),
                    None => PromptStep::Click(ClickOutcome::Cancelled),
                }
            }
            PendingPrompt::Notes { draft, input } => {
                let answer = accepted.then_some(input);
                let id = controller.commit(draft.answer_notes(answer));
                PromptStep::Click(ClickOutcome::Added(id))
            }
            PendingPrompt::ConfirmReset => PromptStep::Reset(controller.answer_reset(accepted)),
        }
    }
}
