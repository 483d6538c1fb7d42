//! Snapshot hand-off between the game-state client and the renderer.
//!
//! The client publishes every snapshot it receives; the renderer only
//! cares about the newest one. Built on `critical-section` and
//! `heapless::Deque` so it can be shared with an interrupt or another
//! core on targets without an allocator.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::GameStateHandler;
use crate::game_state::GameState;

/// A game-state message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Monotonically increasing message number
    pub sequence: u32,
    pub state: GameState,
}

/// Error returned when publishing into a full feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryPublishError<T>(pub T);

/// Bounded queue of pending snapshots
pub struct SnapshotFeed<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Snapshot, SIZE>>>,
}

impl<const SIZE: usize> SnapshotFeed<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the game-state client
    pub const fn publisher(&self) -> Publisher<'_, SIZE> {
        Publisher { feed: self }
    }

    /// Handle for the renderer side
    pub const fn subscriber(&self) -> Subscriber<'_, SIZE> {
        Subscriber { feed: self }
    }

    /// Queue a snapshot, failing if the feed is full
    pub fn try_publish(&self, snapshot: Snapshot) -> Result<(), TryPublishError<Snapshot>> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(snapshot).map_err(TryPublishError)
        })
    }

    /// Queue a snapshot, evicting the oldest pending one if the feed is full
    ///
    /// Returns the evicted snapshot.
    pub fn publish(&self, snapshot: Snapshot) -> Option<Snapshot> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let evicted = if queue.is_full() {
                queue.pop_front()
            } else {
                None
            };
            // Cannot fail, a slot was freed above if needed
            let _ = queue.push_back(snapshot);
            evicted
        })
    }

    /// Take the newest pending snapshot, discarding older ones
    ///
    /// Returns the snapshot and how many superseded snapshots were dropped.
    pub fn take_latest(&self) -> Option<(Snapshot, usize)> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let latest = queue.pop_back()?;
            let dropped = queue.len();
            queue.clear();
            Some((latest, dropped))
        })
    }

    /// Number of pending snapshots
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for SnapshotFeed<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Publishing handle for a [`SnapshotFeed`].
#[derive(Clone, Copy)]
pub struct Publisher<'a, const SIZE: usize> {
    feed: &'a SnapshotFeed<SIZE>,
}

impl<const SIZE: usize> Publisher<'_, SIZE> {
    /// Queue a snapshot, failing if the feed is full
    pub fn try_publish(
        &self,
        sequence: u32,
        state: GameState,
    ) -> Result<(), TryPublishError<Snapshot>> {
        self.feed.try_publish(Snapshot { sequence, state })
    }

    /// Queue a snapshot, evicting the oldest pending one if the feed is full
    pub fn publish(&self, sequence: u32, state: GameState) -> Option<Snapshot> {
        self.feed.publish(Snapshot { sequence, state })
    }
}

/// Receiving handle for a [`SnapshotFeed`].
#[derive(Clone, Copy)]
pub struct Subscriber<'a, const SIZE: usize> {
    feed: &'a SnapshotFeed<SIZE>,
}

impl<const SIZE: usize> Subscriber<'_, SIZE> {
    /// Take the newest pending snapshot, discarding older ones
    pub fn take_latest(&self) -> Option<Snapshot> {
        let (snapshot, _dropped) = self.feed.take_latest()?;
        #[cfg(feature = "esp32-log")]
        if _dropped > 0 {
            println!(
                "[Subscriber.take_latest] {} superseded snapshots dropped before {}",
                _dropped, snapshot.sequence
            );
        }
        Some(snapshot)
    }

    /// Deliver the newest pending snapshot to `handler`
    ///
    /// Returns `true` if a snapshot was delivered.
    pub fn dispatch<H: GameStateHandler>(&self, handler: &mut H) -> bool {
        let Some(snapshot) = self.take_latest() else {
            return false;
        };
        handler.on_game_state(snapshot.sequence, &snapshot.state);
        true
    }
}
