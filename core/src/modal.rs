/// Which overlay the card is currently showing. Exactly one value at a time,
/// so two modals can never be visible together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    Identity,
    Success,
}

impl ModalState {
    pub fn label(self) -> &'static str {
        match self {
            ModalState::None => "none",
            ModalState::Identity => "identity",
            ModalState::Success => "success",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    AffirmativeTriggered,
    /// `generation` is the identity form that accepted the data.
    IdentityValidated { generation: u32 },
    Closed,
}

/// Modal state plus the generation of the identity form currently (or last)
/// opened. A validation only counts for the form that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalFlow {
    pub state: ModalState,
    pub generation: u32,
}

impl ModalFlow {
    pub fn apply(self, event: ModalEvent) -> ModalFlow {
        match event {
            ModalEvent::Closed => ModalFlow {
                state: ModalState::None,
                ..self
            },
            ModalEvent::AffirmativeTriggered => {
                if self.state == ModalState::Identity {
                    return self;
                }
                ModalFlow {
                    state: ModalState::Identity,
                    generation: self.generation.wrapping_add(1),
                }
            }
            ModalEvent::IdentityValidated { generation } => {
                if self.state == ModalState::Identity && generation == self.generation {
                    ModalFlow {
                        state: ModalState::Success,
                        ..self
                    }
                } else {
                    self
                }
            }
        }
    }

    pub fn validated(&self) -> ModalEvent {
        ModalEvent::IdentityValidated {
            generation: self.generation,
        }
    }
}
