// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` renders toasts onto a [`Surface`], bounds how many are on
//! screen at once and queues the rest in arrival order. Each displayed toast
//! goes through three timed steps: the show transition, the start of its
//! exit animation once its duration has elapsed, and its removal when the
//! exit animation completes. Removal frees a slot and drains the queue.
//!
//! Time only advances through [`Manager::tick`], so tests drive the manager
//! with a [`ManualClock`](crate::timing::ManualClock).

use super::notification::{Severity, ToastId, ToastRequest};
use super::surface::{Phase, Surface, ToastElement};
use crate::config::defaults::{
    DEFAULT_TOAST_EXIT_ANIMATION_MS, MAX_CONCURRENT_TOASTS, TOAST_SHOW_DELAY_MS,
};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::timing::driver::Scheduled;
use crate::timing::{deadline_after, Clock, Expired, SystemClock, TimerId, Timers};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Fire every timer that is due.
    Tick,
}

/// Outcome of [`Manager::notify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The toast was appended to the surface.
    Displayed(ToastId),
    /// Every slot is taken; `position` requests are ahead of this one.
    Queued { id: ToastId, position: usize },
}

impl Admission {
    #[must_use]
    pub fn id(self) -> ToastId {
        match self {
            Admission::Displayed(id) | Admission::Queued { id, .. } => id,
        }
    }

    #[must_use]
    pub fn is_displayed(self) -> bool {
        matches!(self, Admission::Displayed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Show(ToastId),
    BeginDismiss(ToastId),
    Remove(ToastId),
}

impl Step {
    fn toast(self) -> ToastId {
        match self {
            Step::Show(id) | Step::BeginDismiss(id) | Step::Remove(id) => id,
        }
    }
}

/// Manages the toast queue and the toasts on the surface.
#[derive(Debug)]
pub struct Manager<C = SystemClock> {
    clock: C,
    /// Created on the first displayed toast.
    surface: Option<Surface>,
    queue: VecDeque<(ToastId, ToastRequest)>,
    timers: Timers<Step>,
    /// Pending timers per displayed toast, cancelled on manual dismissal.
    pending: HashMap<ToastId, Vec<TimerId>>,
    exit_animation: Duration,
    next_id: u64,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager<SystemClock> {
    /// Creates an empty manager on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Manager<C> {
    /// Creates an empty manager on the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            surface: None,
            queue: VecDeque::new(),
            timers: Timers::new(),
            pending: HashMap::new(),
            exit_animation: Duration::from_millis(DEFAULT_TOAST_EXIT_ANIMATION_MS),
            next_id: 0,
            diagnostics: None,
        }
    }

    /// Sets how long a toast stays on the surface after its exit animation starts.
    #[must_use]
    pub fn with_exit_animation(mut self, exit_animation: Duration) -> Self {
        self.exit_animation = exit_animation;
        self
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a toast, or queues it when [`MAX_CONCURRENT_TOASTS`] are already active.
    ///
    /// Warnings and errors are logged to the diagnostics system.
    pub fn notify(&mut self, request: ToastRequest) -> Admission {
        let now = self.clock.now();
        let admission = self.admit(request.clone(), now);
        self.log(&request, !admission.is_displayed());
        admission
    }

    pub fn success(&mut self, message: impl Into<String>, title: Option<&str>) -> Admission {
        self.notify(ToastRequest::success(message).maybe_title(title))
    }

    pub fn error(&mut self, message: impl Into<String>, title: Option<&str>) -> Admission {
        self.notify(ToastRequest::error(message).maybe_title(title))
    }

    pub fn warning(&mut self, message: impl Into<String>, title: Option<&str>) -> Admission {
        self.notify(ToastRequest::warning(message).maybe_title(title))
    }

    pub fn info(&mut self, message: impl Into<String>, title: Option<&str>) -> Admission {
        self.notify(ToastRequest::info(message).maybe_title(title))
    }

    /// Dismisses a toast right away.
    ///
    /// A displayed toast leaves the surface without an exit animation and its
    /// slot goes to the oldest queued request. A queued request is dropped.
    /// Returns `true` if the toast was found.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if self.surface.as_ref().is_some_and(|s| s.contains(id)) {
            let now = self.clock.now();
            self.remove(id, now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|(queued, _)| *queued == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Fires every timer that is due.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        // Removals can chain into new timers that are already due.
        while let Some(expired) = self.timers.pop_next_due(now) {
            self.fire(expired);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Earliest instant at which [`Manager::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Number of toasts on the surface.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.surface.as_ref().map_or(0, Surface::len)
    }

    /// Number of requests waiting for a free slot.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether anything is displayed or queued.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.active_count() > 0 || !self.queue.is_empty()
    }

    /// Returns the display surface, creating it if needed.
    pub fn surface(&mut self) -> &Surface {
        self.surface.get_or_insert_with(Surface::default)
    }

    /// Returns whether the display surface has been created.
    #[must_use]
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the toasts on the surface, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &ToastElement> {
        self.surface.iter().flat_map(Surface::elements)
    }

    /// Removes every toast and queued request, cancelling their timers.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear();
        }
        self.queue.clear();
        self.timers.clear();
        self.pending.clear();
    }

    fn admit(&mut self, request: ToastRequest, at: Instant) -> Admission {
        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;

        if self.active_count() < MAX_CONCURRENT_TOASTS {
            self.display(id, &request, at);
            Admission::Displayed(id)
        } else {
            let position = self.queue.len();
            self.queue.push_back((id, request));
            Admission::Queued { id, position }
        }
    }

    fn display(&mut self, id: ToastId, request: &ToastRequest, at: Instant) {
        self.surface
            .get_or_insert_with(Surface::default)
            .append(ToastElement::new(id, request));

        let show = self.timers.schedule_at(
            deadline_after(at, Duration::from_millis(TOAST_SHOW_DELAY_MS)),
            Step::Show(id),
        );
        let dismiss = self
            .timers
            .schedule_at(
                deadline_after(at, request.display_duration().get()),
                Step::BeginDismiss(id),
            );
        self.pending.insert(id, vec![show, dismiss]);
    }

    fn fire(&mut self, expired: Expired<Step>) {
        let id = expired.event.toast();
        if let Some(timers) = self.pending.get_mut(&id) {
            timers.retain(|timer| *timer != expired.id);
        }

        // The toast may have been dismissed since the timer was armed.
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if !surface.contains(id) {
            return;
        }

        match expired.event {
            Step::Show(_) => {
                if surface.get(id).is_some_and(|e| e.phase() == Phase::Entering) {
                    surface.set_phase(id, Phase::Shown);
                }
            }
            Step::BeginDismiss(_) => {
                surface.set_phase(id, Phase::Leaving);
                let remove = self
                    .timers
                    .schedule_at(
                        deadline_after(expired.deadline, self.exit_animation),
                        Step::Remove(id),
                    );
                self.pending.entry(id).or_default().push(remove);
            }
            Step::Remove(_) => self.remove(id, expired.deadline),
        }
    }

    fn remove(&mut self, id: ToastId, at: Instant) {
        for timer in self.pending.remove(&id).unwrap_or_default() {
            self.timers.cancel(timer);
        }
        let removed = self
            .surface
            .as_mut()
            .and_then(|surface| surface.remove(id))
            .is_some();
        if removed {
            self.drain(at);
        }
    }

    fn drain(&mut self, at: Instant) {
        while self.active_count() < MAX_CONCURRENT_TOASTS {
            let Some((id, request)) = self.queue.pop_front() else {
                break;
            };
            self.display(id, &request, at);
        }
    }

    fn log(&self, request: &ToastRequest, queued: bool) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        handle.log_toast(request.severity().as_str(), queued);
        match request.severity() {
            Severity::Warning => {
                let warning_type = request.warning_type().unwrap_or(WarningType::Other);
                handle.log_warning(WarningEvent::new(warning_type, request.message()));
            }
            Severity::Error => {
                let error_type = request.error_type().unwrap_or(ErrorType::Other);
                handle.log_error(ErrorEvent::new(error_type, request.message()));
            }
            Severity::Success | Severity::Info => {}
        }
    }
}

impl<C: Clock> Scheduled for Manager<C> {
    fn next_deadline(&self) -> Option<Instant> {
        Manager::next_deadline(self)
    }

    fn tick(&mut self) {
        Manager::tick(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::timing::ManualClock;

    fn manager() -> (Manager<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Manager::with_clock(clock.clone()), clock)
    }

    fn messages<C: Clock>(manager: &Manager<C>) -> Vec<String> {
        manager.visible().map(|e| e.message().to_string()).collect()
    }

    fn short(message: &str) -> ToastRequest {
        ToastRequest::new(message).duration_ms(100)
    }

    #[test]
    fn new_manager_is_empty_and_has_no_surface() {
        let (manager, _) = manager();
        assert_eq!(manager.active_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
        assert!(!manager.has_surface());
    }

    #[test]
    fn unbounded_durations_stay_until_dismissed() {
        let (manager, clock) = manager();
        let mut manager = manager.with_exit_animation(Duration::MAX);

        let id = manager
            .notify(ToastRequest::info("pinned").duration(Duration::MAX))
            .id();
        clock.advance_ms(86_400_000);
        manager.tick();
        assert_eq!(manager.active_count(), 1);

        assert!(manager.dismiss(id));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn surface_is_created_lazily_once() {
        let (mut manager, _) = manager();
        assert!(manager.surface().is_empty());
        assert!(manager.has_surface());

        manager.info("hello", None);
        assert_eq!(manager.surface().len(), 1);
    }

    #[test]
    fn up_to_max_concurrent_render_immediately() {
        let (mut manager, _) = manager();
        for i in 0..MAX_CONCURRENT_TOASTS {
            assert!(manager.notify(ToastRequest::new(format!("t{i}"))).is_displayed());
        }
        assert_eq!(manager.active_count(), MAX_CONCURRENT_TOASTS);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn overflow_is_queued_in_order() {
        let (mut manager, _) = manager();
        for i in 0..MAX_CONCURRENT_TOASTS {
            manager.notify(ToastRequest::new(format!("t{i}")));
        }

        let first = manager.notify(ToastRequest::new("q0"));
        let second = manager.notify(ToastRequest::new("q1"));

        assert!(matches!(first, Admission::Queued { position: 0, .. }));
        assert!(matches!(second, Admission::Queued { position: 1, .. }));
        assert_eq!(manager.active_count(), MAX_CONCURRENT_TOASTS);
        assert_eq!(manager.queued_count(), 2);
    }

    #[test]
    fn toast_enters_then_shows_after_delay() {
        let (mut manager, clock) = manager();
        let id = manager.success("Saved", None).id();

        let phase = |m: &mut Manager<ManualClock>| m.surface().get(id).map(ToastElement::phase);
        assert_eq!(phase(&mut manager), Some(Phase::Entering));

        clock.advance_ms(TOAST_SHOW_DELAY_MS);
        manager.tick();
        assert_eq!(phase(&mut manager), Some(Phase::Shown));
    }

    #[test]
    fn toast_leaves_after_duration_and_is_removed_after_exit_animation() {
        let (mut manager, clock) = manager();
        let id = manager.notify(short("a")).id();

        clock.advance_ms(100);
        manager.tick();
        assert_eq!(
            manager.surface().get(id).map(ToastElement::phase),
            Some(Phase::Leaving)
        );
        assert_eq!(manager.active_count(), 1);

        clock.advance_ms(399);
        manager.tick();
        assert_eq!(manager.active_count(), 1);

        clock.advance_ms(1);
        manager.tick();
        assert_eq!(manager.active_count(), 0);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn queued_toast_renders_when_first_slot_frees() {
        let (mut manager, clock) = manager();
        for name in ["a", "b", "c", "d"] {
            manager.notify(short(name));
        }
        assert_eq!(messages(&manager), vec!["a", "b", "c"]);
        assert_eq!(manager.queued_count(), 1);

        clock.advance_ms(499);
        manager.tick();
        assert_eq!(manager.queued_count(), 1);

        clock.advance_ms(1);
        manager.tick();
        assert_eq!(messages(&manager), vec!["d"]);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn queue_drains_fifo_without_exceeding_max() {
        let (mut manager, clock) = manager();
        manager.notify(ToastRequest::new("long-1").duration_ms(10_000));
        manager.notify(ToastRequest::new("long-2").duration_ms(10_000));
        manager.notify(short("short"));
        for name in ["q1", "q2", "q3"] {
            manager.notify(ToastRequest::new(name).duration_ms(10_000));
        }

        clock.advance_ms(500);
        manager.tick();

        assert_eq!(manager.active_count(), MAX_CONCURRENT_TOASTS);
        assert_eq!(messages(&manager), vec!["long-1", "long-2", "q1"]);
        assert_eq!(manager.queued_count(), 2);
    }

    #[test]
    fn drained_toast_timers_start_at_removal_time() {
        let (mut manager, clock) = manager();
        for name in ["a", "b", "c", "d"] {
            manager.notify(short(name));
        }

        // Tick late: everything that was due at t=500 fires together.
        clock.advance_ms(550);
        manager.tick();
        assert_eq!(messages(&manager), vec!["d"]);

        // d was displayed at t=500, so it starts leaving at t=600.
        clock.advance_ms(49);
        manager.tick();
        assert!(manager.visible().all(|e| e.phase() != Phase::Leaving));
        clock.advance_ms(1);
        manager.tick();
        assert!(manager.visible().all(|e| e.phase() == Phase::Leaving));
    }

    #[test]
    fn manual_dismiss_frees_slot_and_drains() {
        let (mut manager, _) = manager();
        let first = manager.notify(ToastRequest::new("a")).id();
        manager.notify(ToastRequest::new("b"));
        manager.notify(ToastRequest::new("c"));
        manager.notify(ToastRequest::new("d"));

        assert!(manager.dismiss(first));
        assert_eq!(messages(&manager), vec!["b", "c", "d"]);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn manual_dismiss_cancels_pending_timers() {
        let (mut manager, clock) = manager();
        let id = manager.notify(short("a")).id();
        manager.dismiss(id);

        assert!(manager.next_deadline().is_none());
        clock.advance_ms(1_000);
        manager.tick();
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn dismiss_during_exit_animation_does_not_double_free() {
        let (mut manager, clock) = manager();
        let leaving = manager.notify(short("a")).id();
        manager.notify(ToastRequest::new("b").duration_ms(10_000));
        manager.notify(ToastRequest::new("c").duration_ms(10_000));
        manager.notify(ToastRequest::new("d").duration_ms(10_000));
        manager.notify(ToastRequest::new("e").duration_ms(10_000));

        clock.advance_ms(200);
        manager.tick();
        assert!(manager.dismiss(leaving));
        assert!(!manager.dismiss(leaving));

        clock.advance_ms(1_000);
        manager.tick();
        assert_eq!(messages(&manager), vec!["b", "c", "d"]);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_queued_request_drops_it() {
        let (mut manager, _) = manager();
        for name in ["a", "b", "c"] {
            manager.notify(ToastRequest::new(name));
        }
        let queued = manager.notify(ToastRequest::new("q")).id();

        assert!(manager.dismiss(queued));
        assert_eq!(manager.queued_count(), 0);
        assert_eq!(manager.active_count(), MAX_CONCURRENT_TOASTS);
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let (mut manager, _) = manager();
        assert!(!manager.dismiss(ToastId::from_raw(42)));
    }

    #[test]
    fn handle_message_dismiss_and_tick() {
        let (mut manager, clock) = manager();
        let id = manager.notify(short("a")).id();
        manager.notify(short("b"));

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.active_count(), 1);

        clock.advance_ms(500);
        manager.handle_message(&Message::Tick);
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn clear_removes_everything() {
        let (mut manager, _) = manager();
        for i in 0..5 {
            manager.notify(ToastRequest::new(format!("t{i}")));
        }
        manager.clear();

        assert_eq!(manager.active_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn convenience_entry_points_set_titles_and_severity() {
        let (mut manager, _) = manager();
        manager.success("ok", None);
        manager.error("bad", Some("Books"));
        manager.warning("hmm", None);

        let rendered: Vec<_> = manager
            .visible()
            .map(|e| (e.severity(), e.title().to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                (Severity::Success, "Success".to_string()),
                (Severity::Error, "Books".to_string()),
                (Severity::Warning, "Warning".to_string()),
            ]
        );
    }

    #[test]
    fn custom_exit_animation_is_honoured() {
        let clock = ManualClock::new();
        let mut manager =
            Manager::with_clock(clock.clone()).with_exit_animation(Duration::from_millis(50));
        manager.notify(short("a"));

        clock.advance_ms(150);
        manager.tick();
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn warnings_and_errors_are_logged() {
        let mut collector = DiagnosticsCollector::default();
        let (mut manager, _) = manager();
        manager.set_diagnostics(collector.handle());

        manager.success("fine", None);
        manager.notify(ToastRequest::error("Error deleting book").with_error_type(ErrorType::Api));
        collector.process_pending();

        let errors: Vec<_> = collector
            .iter()
            .filter_map(|e| match &e.kind {
                DiagnosticEventKind::Error { event } => Some(event.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_type, ErrorType::Api);

        let toasts = collector
            .iter()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::Toast { .. }))
            .count();
        assert_eq!(toasts, 2);
    }
}
