//! Rope-backed text host
//!
//! A minimal editor buffer: one cursor, a `ropey` text buffer, and a set of
//! bound regions tracked as character ranges. Edits anywhere in the buffer
//! keep region ranges and the cursor pointing at the same text.

use std::collections::HashMap;

use ropey::Rope;

use super::{GridHost, HostError, Position, RegionHandle, RegionSpan};

#[derive(Debug, Clone, Copy)]
struct Region {
    /// Char offset of the first character
    start: usize,
    /// Length in chars
    len: usize,
    locked: bool,
}

impl Region {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Text buffer with a cursor and bound regions
#[derive(Debug, Clone, Default)]
pub struct RopeHost {
    buffer: Rope,
    /// Cursor as a char offset
    cursor: usize,
    regions: HashMap<RegionHandle, Region>,
}

impl RopeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host with initial text and the cursor at the start
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            cursor: 0,
            regions: HashMap::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn buffer(&self) -> &Rope {
        &self.buffer
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Get line content without the trailing newline
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }
        let line = self.buffer.line(line_idx).to_string();
        Some(line.trim_end_matches('\n').to_string())
    }

    /// Length of a line in characters, excluding the newline
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx < self.buffer.len_lines() {
            let line = self.buffer.line(line_idx);
            line.len_chars().saturating_sub(
                if line.len_chars() > 0 && line.chars().last() == Some('\n') {
                    1
                } else {
                    0
                },
            )
        } else {
            0
        }
    }

    /// Convert a position to a char offset, rejecting positions past a line end
    pub fn position_to_offset(&self, pos: Position) -> Result<usize, HostError> {
        if pos.line >= self.buffer.len_lines() || pos.column > self.line_length(pos.line) {
            return Err(HostError::PositionOutOfRange {
                line: pos.line,
                column: pos.column,
            });
        }
        Ok(self.buffer.line_to_char(pos.line) + pos.column)
    }

    pub fn offset_to_position(&self, offset: usize) -> Position {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        Position::new(line, clamped - line_start)
    }

    pub fn is_locked(&self, handle: RegionHandle) -> bool {
        self.regions.get(&handle).is_some_and(|r| r.locked)
    }

    /// Text currently inside a region
    pub fn region_text(&self, handle: RegionHandle) -> Option<String> {
        let region = self.regions.get(&handle)?;
        Some(self.buffer.slice(region.start..region.end()).to_string())
    }

    /// Insert text at `at` as a user edit
    ///
    /// Regions after the insertion point move; an insertion strictly inside a
    /// region grows it. Locked regions reject edits inside them.
    pub fn insert_text(&mut self, at: Position, text: &str) -> Result<(), HostError> {
        let offset = self.position_to_offset(at)?;
        if self
            .regions
            .values()
            .any(|r| r.locked && r.start < offset && offset < r.end())
        {
            return Err(HostError::RegionLocked);
        }

        let n = text.chars().count();
        self.buffer.insert(offset, text);
        for region in self.regions.values_mut() {
            if region.start >= offset {
                region.start += n;
            } else if offset < region.end() {
                region.len += n;
            }
        }
        if self.cursor >= offset {
            self.cursor += n;
        }
        Ok(())
    }

    /// Delete the text between two positions as a user edit
    ///
    /// Regions overlapping the deleted range shrink; regions after it move.
    pub fn delete_text(&mut self, from: Position, to: Position) -> Result<(), HostError> {
        let a = self.position_to_offset(from)?;
        let b = self.position_to_offset(to)?;
        let (a, b) = (a.min(b), a.max(b));
        if self
            .regions
            .values()
            .any(|r| r.locked && r.start < b && a < r.end())
        {
            return Err(HostError::RegionLocked);
        }

        self.remove_chars(a, b);
        Ok(())
    }

    /// Remove `[a, b)` and shift everything that pointed past it
    fn remove_chars(&mut self, a: usize, b: usize) {
        let shift = |x: usize| {
            if x <= a {
                x
            } else if x >= b {
                x - (b - a)
            } else {
                a
            }
        };

        self.buffer.remove(a..b);
        for region in self.regions.values_mut() {
            let start = shift(region.start);
            let end = shift(region.end());
            region.start = start;
            region.len = end - start;
        }
        self.cursor = shift(self.cursor);
    }

    fn region(&self, handle: RegionHandle) -> Result<Region, HostError> {
        self.regions
            .get(&handle)
            .copied()
            .ok_or(HostError::UnknownRegion)
    }
}

impl GridHost for RopeHost {
    fn focus(&self) -> Position {
        self.offset_to_position(self.cursor)
    }

    fn set_focus(&mut self, pos: Position) -> Result<(), HostError> {
        self.cursor = self.position_to_offset(pos)?;
        Ok(())
    }

    fn bind_region(
        &mut self,
        handle: RegionHandle,
        at: Position,
        text: &str,
    ) -> Result<(), HostError> {
        if self.regions.contains_key(&handle) {
            return Err(HostError::RegionExists);
        }

        let start = self.position_to_offset(at)?;
        self.insert_text(at, text)?;
        self.regions.insert(
            handle,
            Region {
                start,
                len: text.chars().count(),
                locked: false,
            },
        );
        tracing::debug!(region = handle.id(), line = at.line, "bound region");
        Ok(())
    }

    fn replace_region(&mut self, handle: RegionHandle, text: &str) -> Result<(), HostError> {
        let region = self.region(handle)?;
        let new_len = text.chars().count();

        let cursor = self.cursor;
        self.buffer.remove(region.start..region.end());
        self.buffer.insert(region.start, text);

        for (other_handle, other) in self.regions.iter_mut() {
            if *other_handle == handle {
                other.len = new_len;
            } else if other.start >= region.end() {
                other.start = other.start - region.len + new_len;
            }
        }

        self.cursor = if cursor >= region.end() {
            cursor - region.len + new_len
        } else if cursor > region.start {
            cursor.min(region.start + new_len)
        } else {
            cursor
        };
        Ok(())
    }

    fn delete_region(&mut self, handle: RegionHandle) -> Result<(), HostError> {
        let region = self.region(handle)?;
        if region.locked {
            return Err(HostError::RegionLocked);
        }

        self.regions.remove(&handle);
        self.remove_chars(region.start, region.end());
        tracing::debug!(region = handle.id(), "deleted region");
        Ok(())
    }

    fn region_span(&self, handle: RegionHandle) -> Option<RegionSpan> {
        let region = self.regions.get(&handle)?;
        Some(RegionSpan::new(
            self.offset_to_position(region.start),
            self.offset_to_position(region.end()),
        ))
    }

    fn lock_region(&mut self, handle: RegionHandle) -> Result<(), HostError> {
        let region = self
            .regions
            .get_mut(&handle)
            .ok_or(HostError::UnknownRegion)?;
        if region.locked {
            return Err(HostError::RegionLocked);
        }
        region.locked = true;
        Ok(())
    }

    fn unlock_region(&mut self, handle: RegionHandle) {
        if let Some(region) = self.regions.get_mut(&handle) {
            region.locked = false;
        }
    }
}
