//! Typed crane events.
//!
//! The crane emits an event for every crate it sets down, every command it
//! finishes, and when it halts. Events go to passive listeners as they
//! happen and, when the bus has a capacity, into a bounded log the caller
//! reads after the run. Once the log is full the oldest entry makes room.
//!
//! Event kinds can be suppressed via [`EventBus::suppress`]; suppressed
//! events are neither delivered nor logged.

use std::collections::VecDeque;

use crate::command::MoveCommand;
use crate::error::ErrorKind;
use crate::item::{Crate, StackId};

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

/// A crane event. Command indices are 0-based positions in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CraneEvent {
    /// A crate was set down on `to`.
    CrateMoved {
        command_index: usize,
        item: Crate,
        from: StackId,
        to: StackId,
    },
    /// A command finished without error.
    CommandApplied {
        command_index: usize,
        command: MoveCommand,
    },
    /// The last command was applied.
    RunCompleted { commands_applied: usize },
    /// A command was rejected and the crane halted.
    RunFailed {
        command_index: usize,
        kind: ErrorKind,
    },
}

/// Discriminant tag for event types, used for suppression and subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CrateMoved,
    CommandApplied,
    RunCompleted,
    RunFailed,
}

const EVENT_KIND_COUNT: usize = 4;

impl CraneEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            CraneEvent::CrateMoved { .. } => EventKind::CrateMoved,
            CraneEvent::CommandApplied { .. } => EventKind::CommandApplied,
            CraneEvent::RunCompleted { .. } => EventKind::RunCompleted,
            CraneEvent::RunFailed { .. } => EventKind::RunFailed,
        }
    }
}

impl EventKind {
    fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// A passive listener receives events read-only, as they are emitted.
pub type EventListener = Box<dyn FnMut(&CraneEvent)>;

/// Routes crane events to listeners and keeps the latest `capacity` of them.
pub struct EventBus {
    capacity: usize,
    log: VecDeque<CraneEvent>,
    /// Logged events later pushed out by newer ones.
    evicted: u64,
    suppressed: [bool; EVENT_KIND_COUNT],
    listeners: [Vec<EventListener>; EVENT_KIND_COUNT],
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("capacity", &self.capacity)
            .field("logged", &self.log.len())
            .field("evicted", &self.evicted)
            .field("suppressed", &self.suppressed)
            .finish_non_exhaustive()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(0)
    }
}

impl EventBus {
    /// A capacity of 0 logs nothing; listeners still receive events.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            log: VecDeque::with_capacity(capacity),
            evicted: 0,
            suppressed: [false; EVENT_KIND_COUNT],
            listeners: Default::default(),
        }
    }

    pub fn suppress(&mut self, kind: EventKind) {
        self.suppressed[kind.index()] = true;
    }

    pub fn is_suppressed(&self, kind: EventKind) -> bool {
        self.suppressed[kind.index()]
    }

    /// Register a passive listener for one event kind.
    pub fn on(&mut self, kind: EventKind, listener: EventListener) {
        self.listeners[kind.index()].push(listener);
    }

    pub fn emit(&mut self, event: CraneEvent) {
        let kind = event.kind();
        if self.is_suppressed(kind) {
            return;
        }
        for listener in &mut self.listeners[kind.index()] {
            listener(&event);
        }
        if self.capacity == 0 {
            return;
        }
        if self.log.len() == self.capacity {
            self.log.pop_front();
            self.evicted += 1;
        }
        self.log.push_back(event);
    }

    /// Logged events, oldest first.
    pub fn log(&self) -> &VecDeque<CraneEvent> {
        &self.log
    }

    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Whether anything would observe an event of this kind.
    pub(crate) fn wants(&self, kind: EventKind) -> bool {
        !self.is_suppressed(kind)
            && (self.capacity > 0 || !self.listeners[kind.index()].is_empty())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
