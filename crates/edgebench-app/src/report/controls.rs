//! Control registry for rendered report cards
//!
//! Each interactive control is registered with a binding that carries
//! everything its activation needs. Copy bindings hold the original snippet
//! itself, so no escaping round trip sits on the copy path.

use std::collections::HashMap;
use std::sync::Arc;

use crate::message::Message;

/// Index of a function card in the rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

/// One edge-case sub-card: its function card plus position within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaseId {
    pub card: CardId,
    pub case: usize,
}

impl CaseId {
    pub fn new(card: usize, case: usize) -> Self {
        Self {
            card: CardId(card),
            case,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Collapse toggle in a card header
    Toggle(CardId),
    /// Copy button of an edge-case sub-card
    Copy(CaseId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlBinding {
    ToggleCard(CardId),
    CopySnippet { case: CaseId, snippet: Arc<str> },
}

impl ControlBinding {
    /// The message this control posts when activated
    pub fn activate(&self) -> Message {
        match self {
            Self::ToggleCard(card) => Message::ToggleCard(*card),
            Self::CopySnippet { case, snippet } => Message::CopySnippet {
                case: *case,
                snippet: Arc::clone(snippet),
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct ControlRegistry {
    bindings: HashMap<ControlId, ControlBinding>,
}

impl ControlRegistry {
    pub fn register(&mut self, id: ControlId, binding: ControlBinding) {
        self.bindings.insert(id, binding);
    }

    pub fn get(&self, id: ControlId) -> Option<&ControlBinding> {
        self.bindings.get(&id)
    }

    pub fn is_registered(&self, id: ControlId) -> bool {
        self.bindings.contains_key(&id)
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_binding_carries_exact_snippet() {
        let snippet: Arc<str> = Arc::from("print('it''s')\n\t\\x");
        let binding = ControlBinding::CopySnippet {
            case: CaseId::new(0, 1),
            snippet: Arc::clone(&snippet),
        };

        match binding.activate() {
            Message::CopySnippet { case, snippet: got } => {
                assert_eq!(case, CaseId::new(0, 1));
                assert_eq!(&*got, &*snippet);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn test_registry_register_and_clear() {
        let mut registry = ControlRegistry::default();
        registry.register(
            ControlId::Toggle(CardId(0)),
            ControlBinding::ToggleCard(CardId(0)),
        );

        assert!(registry.is_registered(ControlId::Toggle(CardId(0))));
        assert!(!registry.is_registered(ControlId::Toggle(CardId(1))));
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }
}
