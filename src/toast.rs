//! Toast notification queue.
//!
//! Serializes transient notifications so at most one is ever visible; the
//! rest wait in FIFO order. The queue itself is a pure state machine: every
//! mutation returns the list of [`Command`]s the DOM layer must apply, and
//! time only moves when the driver calls [`ToastQueue::advance`] with real
//! (or, in tests, synthetic) elapsed milliseconds.

use std::collections::VecDeque;

use crate::defaults::{TOAST_DURATION_MS, TOAST_SETTLE_MS};
use crate::escape_html;

/// Visual category of a toast; controls icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
    Info,
}

impl Kind {
    /// Parse a loose category name; anything unrecognized is informational.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Kind::Success,
            "error" => Kind::Error,
            _ => Kind::Info,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "⚠️",
            Kind::Info => "ℹ️",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
        }
    }
}

/// A queued notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: Kind,
    pub duration_ms: f64,
}

impl Toast {
    /// Inner markup for the toast element. The message is entity-escaped
    /// here, immediately before embedding; callers hand over raw text.
    pub fn body_html(&self) -> String {
        format!(
            r#"<div class="toast-icon">{}</div><div class="toast-msg">{}</div>"#,
            self.kind.icon(),
            escape_html(&self.message)
        )
    }
}

/// DOM operations emitted by the queue, to be applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append the toast element hidden, then reveal it after the driver's
    /// double-frame deferral so the hide → show transition actually plays.
    Show(Toast),
    /// Drop the visible class; the hide transition runs for the settle time.
    Hide,
    /// Detach the element from the document.
    Remove,
}

#[derive(Debug, Clone)]
enum Phase {
    Shown { remaining_ms: f64 },
    Hiding { remaining_ms: f64 },
}

#[derive(Debug, Clone)]
struct Active {
    toast: Toast,
    phase: Phase,
}

/// FIFO queue with a single visible slot.
#[derive(Debug, Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
    active: Option<Active>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff a toast is animating in, visible, or animating out.
    pub fn is_showing(&self) -> bool {
        self.active.is_some()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Enqueue with the default display duration.
    pub fn push(&mut self, message: impl Into<String>, kind: Kind) -> Vec<Command> {
        self.push_with_duration(message, kind, TOAST_DURATION_MS)
    }

    /// Enqueue a notification. An empty message is a no-op.
    pub fn push_with_duration(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        duration_ms: f64,
    ) -> Vec<Command> {
        let message = message.into();
        if message.is_empty() {
            return Vec::new();
        }
        self.pending.push_back(Toast {
            message,
            kind,
            duration_ms,
        });
        self.pump()
    }

    /// Promote the queue head if nothing is showing. Idempotent.
    fn pump(&mut self) -> Vec<Command> {
        if self.active.is_some() {
            return Vec::new();
        }
        let Some(toast) = self.pending.pop_front() else {
            return Vec::new();
        };
        self.active = Some(Active {
            phase: Phase::Shown {
                remaining_ms: toast.duration_ms,
            },
            toast: toast.clone(),
        });
        vec![Command::Show(toast)]
    }

    /// Move time forward. Crossing the display deadline emits [`Command::Hide`];
    /// crossing the settle deadline emits [`Command::Remove`] and immediately
    /// promotes the next entry, so one large step can drain several toasts.
    pub fn advance(&mut self, elapsed_ms: f64) -> Vec<Command> {
        let mut budget = elapsed_ms;
        let mut out = Vec::new();
        loop {
            let Some(active) = self.active.as_mut() else {
                break;
            };
            match &mut active.phase {
                Phase::Shown { remaining_ms } => {
                    if budget < *remaining_ms {
                        *remaining_ms -= budget;
                        break;
                    }
                    budget -= *remaining_ms;
                    active.phase = Phase::Hiding {
                        remaining_ms: TOAST_SETTLE_MS,
                    };
                    out.push(Command::Hide);
                }
                Phase::Hiding { remaining_ms } => {
                    if budget < *remaining_ms {
                        *remaining_ms -= budget;
                        break;
                    }
                    budget -= *remaining_ms;
                    self.active = None;
                    out.push(Command::Remove);
                    out.extend(self.pump());
                }
            }
        }
        out
    }

    /// Discard the active toast without waiting out its timers.
    ///
    /// This is the recovery path for a failed render: the showing flag must
    /// not stay stuck, otherwise the queue would stall forever.
    pub fn abort_active(&mut self) -> Vec<Command> {
        if self.active.take().is_none() {
            return Vec::new();
        }
        self.pump()
    }

    /// The currently showing toast, if any.
    pub fn active_toast(&self) -> Option<&Toast> {
        self.active.as_ref().map(|a| &a.toast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(commands: &[Command]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Show(t) => Some(t.message.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_message_is_a_no_op() {
        let mut q = ToastQueue::new();
        assert!(q.push("", Kind::Info).is_empty());
        assert!(!q.is_showing());
        assert_eq!(q.pending_len(), 0);
    }

    #[test]
    fn first_push_shows_immediately() {
        let mut q = ToastQueue::new();
        let cmds = q.push("saved", Kind::Success);
        assert_eq!(shown(&cmds), vec!["saved"]);
        assert!(q.is_showing());
    }

    #[test]
    fn later_pushes_wait_their_turn() {
        let mut q = ToastQueue::new();
        q.push("one", Kind::Info);
        assert!(q.push("two", Kind::Info).is_empty());
        assert!(q.push("three", Kind::Info).is_empty());
        assert_eq!(q.pending_len(), 2);
    }

    #[test]
    fn display_order_matches_enqueue_order() {
        let mut q = ToastQueue::new();
        let mut order = shown(&q.push("one", Kind::Info));
        q.push("two", Kind::Error);
        q.push("three", Kind::Success);
        // Drain everything with generous time steps.
        for _ in 0..3 {
            order.extend(shown(&q.advance(TOAST_DURATION_MS + TOAST_SETTLE_MS)));
        }
        assert_eq!(order, vec!["one", "two", "three"]);
        assert!(!q.is_showing());
    }

    #[test]
    fn never_two_visible_at_once() {
        let mut q = ToastQueue::new();
        q.push("a", Kind::Info);
        q.push("b", Kind::Info);
        // A Show for "b" may only appear after the Remove for "a".
        let cmds = q.advance(TOAST_DURATION_MS + TOAST_SETTLE_MS);
        let remove_at = cmds.iter().position(|c| *c == Command::Remove).unwrap();
        let show_at = cmds
            .iter()
            .position(|c| matches!(c, Command::Show(_)))
            .unwrap();
        assert!(remove_at < show_at);
    }

    #[test]
    fn success_toast_lifecycle_end_to_end() {
        let mut q = ToastQueue::new();
        let cmds = q.push("Connection restored", Kind::Success);
        let Command::Show(toast) = &cmds[0] else {
            panic!("expected a show command");
        };
        assert_eq!(toast.kind.css_class(), "success");
        assert!(toast.body_html().contains('✓'));
        assert_eq!(q.active_toast().map(|t| t.message.as_str()), Some("Connection restored"));

        // Just before the display deadline: still visible, nothing emitted.
        assert!(q.advance(TOAST_DURATION_MS - 1.0).is_empty());
        assert_eq!(q.advance(1.0), vec![Command::Hide]);
        // Settle delay, then removal; flag clears.
        assert!(q.advance(TOAST_SETTLE_MS - 1.0).is_empty());
        assert_eq!(q.advance(1.0), vec![Command::Remove]);
        assert!(!q.is_showing());
    }

    #[test]
    fn markup_is_escaped() {
        let toast = Toast {
            message: "<script>alert(1)</script>".into(),
            kind: Kind::Info,
            duration_ms: TOAST_DURATION_MS,
        };
        let html = toast.body_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(Kind::from_name("warning"), Kind::Info);
        assert_eq!(Kind::from_name("success"), Kind::Success);
        assert_eq!(Kind::from_name("error"), Kind::Error);
    }

    #[test]
    fn custom_durations_are_honored() {
        let mut q = ToastQueue::new();
        q.push_with_duration("quick", Kind::Info, 500.0);
        assert!(q.advance(499.0).is_empty());
        assert_eq!(q.advance(1.0), vec![Command::Hide]);
    }

    #[test]
    fn one_large_step_drains_multiple_toasts() {
        let mut q = ToastQueue::new();
        q.push("a", Kind::Info);
        q.push("b", Kind::Info);
        q.push("c", Kind::Info);
        let cmds = q.advance(3.0 * (TOAST_DURATION_MS + TOAST_SETTLE_MS));
        assert_eq!(shown(&cmds), vec!["b", "c"]);
        assert_eq!(
            cmds.iter().filter(|c| **c == Command::Remove).count(),
            3
        );
        assert!(!q.is_showing());
        assert_eq!(q.pending_len(), 0);
    }

    #[test]
    fn abort_unsticks_the_queue() {
        let mut q = ToastQueue::new();
        q.push("broken", Kind::Error);
        q.push("next", Kind::Info);
        let cmds = q.abort_active();
        assert_eq!(shown(&cmds), vec!["next"]);
        assert!(q.is_showing());

        // Aborting with nothing active stays a no-op.
        let mut idle = ToastQueue::new();
        assert!(idle.abort_active().is_empty());
    }

    #[test]
    fn advance_with_empty_queue_is_inert() {
        let mut q = ToastQueue::new();
        assert!(q.advance(10_000.0).is_empty());
    }
}
