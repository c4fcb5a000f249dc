use tracing::trace;

/// UI events a field control emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEvent {
    Blur,
    ValueChange,
}

/// What an editor does in response to a bound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

#[derive(Debug, Clone)]
struct Listener {
    handle: ListenerHandle,
    event: FieldEvent,
    action: EditorAction,
}

/// Listeners registered by one editor instance.
///
/// Registration is explicit: nothing fires until [`EventBindings::on`] was
/// called, and a handle passed to [`EventBindings::off`] never fires again.
#[derive(Debug, Clone, Default)]
pub struct EventBindings {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl EventBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&mut self, event: FieldEvent, action: EditorAction) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            handle,
            event,
            action,
        });
        trace!(?event, ?action, id = handle.0, "listener registered");
        handle
    }

    pub fn off(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.handle != handle);
        let removed = self.listeners.len() != before;
        if removed {
            trace!(id = handle.0, "listener removed");
        }
        removed
    }

    pub fn actions_for(&self, event: FieldEvent) -> Vec<EditorAction> {
        self.listeners
            .iter()
            .filter(|listener| listener.event == event)
            .map(|listener| listener.action)
            .collect()
    }

    pub fn clear(&mut self) -> usize {
        let count = self.listeners.len();
        self.listeners.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
