use shared::domain::PlaceId;
use uuid::Uuid;

/// Source of fresh place ids. A provider must never hand out the same id twice.
pub trait IdProvider {
    fn next_id(&mut self) -> PlaceId;
}

/// Monotonic counter starting at 1, encoded into the low bits of a UUID.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> u128 {
        self.issued
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&mut self) -> PlaceId {
        self.issued += 1;
        PlaceId(Uuid::from_u128(self.issued))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&mut self) -> PlaceId {
        PlaceId(Uuid::new_v4())
    }
}
