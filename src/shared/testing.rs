//! Recording fakes for the flow's seams (test builds only)

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::domain::services::DomNode;
use crate::shared::errors::{DeleteError, Result};
use crate::shared::services::{MovieService, PageEffects};

/// Records every DELETE path and answers with a fixed outcome.
#[derive(Clone)]
pub struct FakeMovieService {
    pub requests: Rc<RefCell<Vec<String>>>,
    outcome: Result<()>,
}

impl FakeMovieService {
    pub fn ok() -> Self {
        Self::answering(Ok(()))
    }

    pub fn failing(error: DeleteError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(outcome: Result<()>) -> Self {
        Self {
            requests: Rc::new(RefCell::new(Vec::new())),
            outcome,
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl MovieService for FakeMovieService {
    async fn delete_movie(&self, path: &str) -> Result<()> {
        self.requests.borrow_mut().push(path.to_string());
        self.outcome.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowModal,
    HideModal,
    Navigate(String),
    LogError(String),
    Alert(String),
}

/// Page stand-in: tracks location and modal visibility, and records effects.
#[derive(Clone)]
pub struct RecordingPage {
    pub effects: Rc<RefCell<Vec<Effect>>>,
    pub location: Rc<RefCell<String>>,
    pub modal_visible: Rc<RefCell<bool>>,
    has_modal: bool,
}

impl RecordingPage {
    pub fn at(location: &str) -> Self {
        Self {
            effects: Rc::new(RefCell::new(Vec::new())),
            location: Rc::new(RefCell::new(location.to_string())),
            modal_visible: Rc::new(RefCell::new(false)),
            has_modal: true,
        }
    }

    /// A page whose markup lacks the confirmation modal.
    pub fn without_modal(location: &str) -> Self {
        Self {
            has_modal: false,
            ..Self::at(location)
        }
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.effects.borrow().clone()
    }

    pub fn location(&self) -> String {
        self.location.borrow().clone()
    }

    pub fn modal_visible(&self) -> bool {
        *self.modal_visible.borrow()
    }
}

impl PageEffects for RecordingPage {
    fn show_modal(&self) -> Result<()> {
        if !self.has_modal {
            return Err(DeleteError::Dom("confirmation modal #myModal not found".to_string()));
        }
        *self.modal_visible.borrow_mut() = true;
        self.effects.borrow_mut().push(Effect::ShowModal);
        Ok(())
    }

    fn hide_modal(&self) {
        *self.modal_visible.borrow_mut() = false;
        self.effects.borrow_mut().push(Effect::HideModal);
    }

    fn navigate(&self, url: &str) {
        *self.location.borrow_mut() = url.to_string();
        self.effects.borrow_mut().push(Effect::Navigate(url.to_string()));
    }

    fn log_error(&self, message: &str) {
        self.effects.borrow_mut().push(Effect::LogError(message.to_string()));
    }

    fn alert(&self, message: &str) {
        self.effects.borrow_mut().push(Effect::Alert(message.to_string()));
    }
}

struct NodeData {
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    parent: Option<FakeNode>,
}

/// Tiny element tree supporting `#id` and `.class` selectors.
#[derive(Clone)]
pub struct FakeNode(Rc<RefCell<NodeData>>);

impl FakeNode {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            parent: None,
        })))
    }

    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_string());
        self
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn child_of(self, parent: &FakeNode) -> Self {
        self.0.borrow_mut().parent = Some(parent.clone());
        self
    }

    fn matches(&self, selector: &str) -> bool {
        let data = self.0.borrow();
        if let Some(id) = selector.strip_prefix('#') {
            data.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            data.classes.iter().any(|c| c == class)
        } else {
            false
        }
    }
}

impl DomNode for FakeNode {
    fn closest(&self, selector: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.matches(selector) {
                return Some(node);
            }
            current = node.0.borrow().parent.clone();
        }
        None
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }
}
