// SPDX-License-Identifier: MPL-2.0
//! Event collection.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, ErrorEvent,
    RequestEvent, UserAction, WarningEvent,
};

/// Pending events the channel holds before new ones are dropped.
const CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across threads. Every method is
/// non-blocking: when the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    fn send(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    /// Records that a toast was requested.
    pub fn log_toast(&self, severity: &str, queued: bool) {
        self.send(DiagnosticEventKind::Toast {
            severity: severity.to_string(),
            queued,
        });
    }

    pub fn log_request(&self, event: RequestEvent) {
        self.send(DiagnosticEventKind::Request { event });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }
}

/// Receives events from [`DiagnosticsHandle`]s and retains the most recent ones.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            event_tx,
            event_rx,
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Returns a new handle feeding this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every queued event into the buffer. Returns how many were moved.
    pub fn process_pending(&mut self) -> usize {
        let mut moved = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            moved += 1;
        }
        moved
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Retained events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Serializes the retained events as a pretty-printed JSON array.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        serde_json::to_string_pretty(&events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
