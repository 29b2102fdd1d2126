//! Host text surface contract
//!
//! A table view never edits text itself. It asks a [`GridHost`] to bind,
//! replace and delete regions of host text, and to report and move the
//! user's focus. Regions are identified by opaque [`RegionHandle`]s that the
//! view issues; the host only stores them.
//!
//! Region writes happen under a [`RegionGuard`], which locks the region for
//! the duration of a replace and unlocks it on drop, including on early
//! error returns.

mod rope;

use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

pub use rope::RopeHost;

/// A position in host text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Opaque identifier of a bound region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionHandle(u64);

static NEXT_REGION: AtomicU64 = AtomicU64::new(1);

impl RegionHandle {
    /// Issue a handle no other region has used
    pub fn next() -> Self {
        Self(NEXT_REGION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn id(self) -> u64 {
        self.0
    }
}

/// Extent of a bound region in host coordinates
///
/// `end` is the position just past the region's last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub start: Position,
    pub end: Position,
}

impl RegionSpan {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whether `pos` lies within the region (both ends inclusive)
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Convert a host position to region-relative `(line, offset)`
    ///
    /// The first region line starts at `start.column`; later lines start at
    /// column 0.
    pub fn to_local(&self, pos: Position) -> Option<(usize, usize)> {
        if !self.contains(pos) {
            return None;
        }
        let line = pos.line - self.start.line;
        let offset = if line == 0 {
            pos.column - self.start.column
        } else {
            pos.column
        };
        Some((line, offset))
    }

    /// Convert region-relative `(line, offset)` back to a host position
    pub fn to_host(&self, line: usize, offset: usize) -> Position {
        if line == 0 {
            Position::new(self.start.line, self.start.column + offset)
        } else {
            Position::new(self.start.line + line, offset)
        }
    }
}

/// Errors a host reports for region and focus operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("unknown region")]
    UnknownRegion,

    #[error("region is already bound")]
    RegionExists,

    #[error("region is locked by another writer")]
    RegionLocked,

    #[error("position {line}:{column} is outside the text")]
    PositionOutOfRange { line: usize, column: usize },
}

/// The text surface a table view draws into
pub trait GridHost {
    /// Where the user's cursor currently is
    fn focus(&self) -> Position;

    /// Move the user's cursor
    fn set_focus(&mut self, pos: Position) -> Result<(), HostError>;

    /// Insert `text` at `at` and remember it as region `handle`
    fn bind_region(
        &mut self,
        handle: RegionHandle,
        at: Position,
        text: &str,
    ) -> Result<(), HostError>;

    /// Replace the whole contents of a bound region
    fn replace_region(&mut self, handle: RegionHandle, text: &str) -> Result<(), HostError>;

    /// Delete a bound region's text and forget the handle
    fn delete_region(&mut self, handle: RegionHandle) -> Result<(), HostError>;

    /// Current extent of a bound region
    fn region_span(&self, handle: RegionHandle) -> Option<RegionSpan>;

    /// Take exclusive write access to a region
    fn lock_region(&mut self, _handle: RegionHandle) -> Result<(), HostError> {
        Ok(())
    }

    /// Release exclusive write access taken by [`GridHost::lock_region`]
    fn unlock_region(&mut self, _handle: RegionHandle) {}
}

/// Scoped exclusive access to a bound region
///
/// Unlocks the region when dropped.
pub struct RegionGuard<'a, H: GridHost + ?Sized> {
    host: &'a mut H,
    handle: RegionHandle,
}

impl<'a, H: GridHost + ?Sized> RegionGuard<'a, H> {
    pub fn acquire(host: &'a mut H, handle: RegionHandle) -> Result<Self, HostError> {
        host.lock_region(handle)?;
        Ok(Self { host, handle })
    }

    pub fn handle(&self) -> RegionHandle {
        self.handle
    }
}

impl<H: GridHost + ?Sized> Deref for RegionGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.host
    }
}

impl<H: GridHost + ?Sized> DerefMut for RegionGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: GridHost + ?Sized> Drop for RegionGuard<'_, H> {
    fn drop(&mut self) {
        self.host.unlock_region(self.handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_handles_are_unique() {
        let a = RegionHandle::next();
        let b = RegionHandle::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_span_contains() {
        let span = RegionSpan::new(Position::new(2, 4), Position::new(3, 7));
        assert!(span.contains(Position::new(2, 4)));
        assert!(span.contains(Position::new(3, 0)));
        assert!(span.contains(Position::new(3, 7)));
        assert!(!span.contains(Position::new(2, 3)));
        assert!(!span.contains(Position::new(3, 8)));
        assert!(!span.contains(Position::new(4, 0)));
    }

    #[test]
    fn test_span_local_coordinates() {
        let span = RegionSpan::new(Position::new(2, 4), Position::new(3, 7));
        assert_eq!(span.to_local(Position::new(2, 6)), Some((0, 2)));
        assert_eq!(span.to_local(Position::new(3, 5)), Some((1, 5)));
        assert_eq!(span.to_local(Position::new(1, 0)), None);

        assert_eq!(span.to_host(0, 2), Position::new(2, 6));
        assert_eq!(span.to_host(1, 5), Position::new(3, 5));
    }

    #[test]
    fn test_guard_unlocks_on_drop() {
        let mut host = RopeHost::with_text("x\n");
        let handle = RegionHandle::next();
        host.bind_region(handle, Position::new(1, 0), "grid").unwrap();

        {
            let _guard = RegionGuard::acquire(&mut host, handle).unwrap();
        }
        assert!(!host.is_locked(handle));

        let guard = RegionGuard::acquire(&mut host, handle).unwrap();
        assert!(guard.is_locked(handle));
    }
}
