//! Toast presenter
//!
//! A single global toast slot: showing a new message replaces whatever is
//! on screen. Each toast carries a fresh id, and dismissal is keyed on that
//! id, so a pending dismissal timer for a replaced toast is simply
//! superseded — the newest message always wins.

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Extra style class applied to the toast element.
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// The single toast slot, provided once by the app shell.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub current: RwSignal<Option<Toast>>,
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Replace the current toast. Returns the id to pass to [`dismiss`]
    /// when the display timer fires.
    ///
    /// [`dismiss`]: ToastState::dismiss
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.current.set(Some(Toast {
            id,
            kind,
            message: message.into(),
        }));
        id
    }

    /// Clear the slot, but only if `id` still identifies the visible toast.
    /// Stale timers from replaced toasts fall through here.
    pub fn dismiss(&self, id: Uuid) {
        self.current.update(|current| {
            if current.as_ref().is_some_and(|t| t.id == id) {
                *current = None;
            }
        });
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.show(ToastKind::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.show(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.show(ToastKind::Error, message)
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toast_state() {
    provide_context(ToastState::new());
}

pub fn use_toast() -> ToastState {
    expect_context::<ToastState>()
}
