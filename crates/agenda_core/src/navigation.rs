//! Navigation history capability and the in-process address bar behind it.

use std::sync::{Arc, Mutex, MutexGuard};

use shared::error::AgendaError;

pub const LINK_SCHEME: &str = "agenda://";

/// Best-effort history manipulation. Failures are reported, never fatal to callers.
pub trait NavigationHistory: Send {
    /// Current fragment including the leading `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Adds a history entry carrying `fragment` without reloading anything.
    fn push_fragment(&mut self, fragment: &str) -> Result<(), AgendaError>;

    /// Replaces the current entry with the bare path, dropping its fragment.
    fn replace_with_path(&mut self) -> Result<(), AgendaError>;
}

#[derive(Debug, Default)]
struct AddressState {
    path: String,
    current: Option<String>,
    back: Vec<Option<String>>,
    forward: Vec<Option<String>>,
}

/// Shared handle to a path plus fragment history with back/forward stacks.
#[derive(Debug, Clone)]
pub struct AddressBar {
    state: Arc<Mutex<AddressState>>,
}

impl Default for AddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar {
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }
        Self {
            state: Arc::new(Mutex::new(AddressState {
                path,
                ..AddressState::default()
            })),
        }
    }

    /// Address bar opened on `fragment`, as when following a shared link.
    pub fn with_fragment(path: impl Into<String>, fragment: Option<&str>) -> Self {
        let bar = Self::new(path);
        bar.snapshot().current = normalize_fragment(fragment);
        bar
    }

    /// Lock for inspection only. A poisoned lock still yields the last state.
    fn snapshot(&self) -> MutexGuard<'_, AddressState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Lock for moving between entries. A poisoned lock refuses the move.
    fn write(&self) -> Result<MutexGuard<'_, AddressState>, AgendaError> {
        self.state
            .lock()
            .map_err(|_| AgendaError::history_unavailable("address bar lock poisoned"))
    }

    fn moving(&self) -> Option<MutexGuard<'_, AddressState>> {
        match self.write() {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(error = %err, "address bar move refused");
                None
            }
        }
    }

    pub fn path(&self) -> String {
        self.snapshot().path.clone()
    }

    /// Shareable link for the current entry, e.g. `agenda:///#day=2025-12-29`.
    pub fn link(&self) -> String {
        let state = self.snapshot();
        format!(
            "{LINK_SCHEME}{}{}",
            state.path,
            state.current.as_deref().unwrap_or_default()
        )
    }

    /// Follows a typed or pasted fragment as a new entry. The caller raises `HashChange`.
    pub fn navigate(&self, fragment: Option<&str>) -> bool {
        let fragment = normalize_fragment(fragment);
        let Some(mut state) = self.moving() else {
            return false;
        };
        if state.current == fragment {
            return false;
        }
        let previous = state.current.take();
        state.back.push(previous);
        state.forward.clear();
        state.current = fragment;
        true
    }

    /// Steps back one entry. The caller raises `PopState` when this returns true.
    pub fn back(&self) -> bool {
        let Some(mut state) = self.moving() else {
            return false;
        };
        let Some(previous) = state.back.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut state.current, previous);
        state.forward.push(current);
        true
    }

    pub fn forward(&self) -> bool {
        let Some(mut state) = self.moving() else {
            return false;
        };
        let Some(next) = state.forward.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut state.current, next);
        state.back.push(current);
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.snapshot().back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.snapshot().forward.is_empty()
    }

    pub fn history_len(&self) -> usize {
        let state = self.snapshot();
        state.back.len() + 1 + state.forward.len()
    }
}

fn normalize_fragment(fragment: Option<&str>) -> Option<String> {
    let fragment = fragment?.trim();
    if fragment.is_empty() || fragment == "#" {
        return None;
    }
    if fragment.starts_with('#') {
        Some(fragment.to_string())
    } else {
        Some(format!("#{fragment}"))
    }
}

impl NavigationHistory for AddressBar {
    fn fragment(&self) -> Option<String> {
        self.snapshot().current.clone()
    }

    fn push_fragment(&mut self, fragment: &str) -> Result<(), AgendaError> {
        let mut state = self.write()?;
        let previous = state.current.take();
        state.back.push(previous);
        state.forward.clear();
        state.current = normalize_fragment(Some(fragment));
        Ok(())
    }

    fn replace_with_path(&mut self) -> Result<(), AgendaError> {
        self.write()?.current = None;
        Ok(())
    }
}
