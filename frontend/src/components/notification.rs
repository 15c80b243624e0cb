use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub duration_ms: u32,
    pub phase: Phase,
}

pub enum NotificationAction {
    Show {
        message: String,
        kind: NotificationKind,
        duration_ms: u32,
    },
    Reveal(u64),
    Hide(u64),
    Remove(u64),
}

/// Single visible notification. A new `Show` evicts whatever is on screen,
/// and timer actions carrying an old id are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationSlot {
    next_id: u64,
    current: Option<Notification>,
}

impl NotificationSlot {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn apply(&mut self, action: NotificationAction) {
        match action {
            NotificationAction::Show {
                message,
                kind,
                duration_ms,
            } => {
                self.next_id += 1;
                self.current = Some(Notification {
                    id: self.next_id,
                    message,
                    kind,
                    duration_ms,
                    phase: Phase::Entering,
                });
            }
            NotificationAction::Reveal(id) => self.set_phase(id, Phase::Shown),
            NotificationAction::Hide(id) => self.set_phase(id, Phase::Leaving),
            NotificationAction::Remove(id) => {
                if self.current.as_ref().map(|n| n.id) == Some(id) {
                    self.current = None;
                }
            }
        }
    }

    fn set_phase(&mut self, id: u64, phase: Phase) {
        if let Some(notification) = self.current.as_mut().filter(|n| n.id == id) {
            notification.phase = phase;
        }
    }
}

impl Reducible for NotificationSlot {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Handle given to forms so they can show a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
}

impl Notifier {
    pub fn new(dispatch: Callback<NotificationAction>) -> Self {
        Self { dispatch }
    }

    pub fn show(&self, message: &str, kind: NotificationKind, duration_ms: u32) {
        self.dispatch.emit(NotificationAction::Show {
            message: message.to_string(),
            kind,
            duration_ms,
        });
    }
}

const TOAST_STYLES: &str = r#"
.notification {
    position: fixed;
    bottom: 2rem;
    right: 2rem;
    padding: 1rem 1.5rem;
    border-radius: 8px;
    color: #fff;
    opacity: 0;
    transform: translateY(20px);
    transition: all 0.3s ease;
    z-index: 2000;
}
.notification.show {
    opacity: 1;
    transform: translateY(0);
}
.notification.success { background: #2e7d32; }
.notification.error { background: #c62828; }
"#;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub current: Option<Notification>,
    pub dispatch: Callback<NotificationAction>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let current = props.current.clone();

    // Fade in, hold, fade out, remove
    {
        let dispatch = props.dispatch.clone();
        let key = current.as_ref().map(|n| (n.id, n.phase, n.duration_ms));
        use_effect_with_deps(
            move |key| {
                let timeout = (*key).map(|(id, phase, duration_ms)| match phase {
                    Phase::Entering => Timeout::new(10, move || {
                        dispatch.emit(NotificationAction::Reveal(id))
                    }),
                    Phase::Shown => Timeout::new(duration_ms, move || {
                        dispatch.emit(NotificationAction::Hide(id))
                    }),
                    Phase::Leaving => Timeout::new(config::MODAL_TRANSITION_MS, move || {
                        dispatch.emit(NotificationAction::Remove(id))
                    }),
                });
                move || drop(timeout)
            },
            key,
        );
    }

    match current {
        Some(notification) => html! {
            <>
                <style>{TOAST_STYLES}</style>
                <div
                    class={classes!(
                        "notification",
                        notification.kind.class(),
                        (notification.phase == Phase::Shown).then(|| "show")
                    )}
                >
                    {notification.message}
                </div>
            </>
        },
        None => html! {},
    }
}
