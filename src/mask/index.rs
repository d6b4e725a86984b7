//! Position search primitives over the descriptor list.
//!
//! All searches scan an inclusive range clamped to the test string and
//! return `None` when no position matches.

use serde::{Deserialize, Serialize};

use super::descriptor::PositionDescriptor;
use super::provider::MaskedTextProvider;

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// First index in `start..=end` (clamped) whose descriptor matches `predicate`.
pub fn find_in_range<P>(
    descriptors: &[PositionDescriptor],
    start: usize,
    end: usize,
    direction: Direction,
    predicate: P,
) -> Option<usize>
where
    P: Fn(&PositionDescriptor) -> bool,
{
    let last = descriptors.len().checked_sub(1)?;
    let end = end.min(last);
    if start > end {
        return None;
    }

    let matches = |&position: &usize| predicate(&descriptors[position]);
    match direction {
        Direction::Forward => (start..=end).find(matches),
        Direction::Backward => (start..=end).rev().find(matches),
    }
}

impl MaskedTextProvider {
    /// Range covered by a `*_from` search
    fn from_range(&self, position: usize, direction: Direction) -> (usize, usize) {
        match direction {
            Direction::Forward => (position, self.len().saturating_sub(1)),
            Direction::Backward => (0, position),
        }
    }

    pub fn find_edit_position_from(&self, position: usize, direction: Direction) -> Option<usize> {
        let (start, end) = self.from_range(position, direction);
        self.find_edit_position_in_range(start, end, direction)
    }

    pub fn find_edit_position_in_range(
        &self,
        start: usize,
        end: usize,
        direction: Direction,
    ) -> Option<usize> {
        find_in_range(&self.descriptors, start, end, direction, |d| d.is_edit())
    }

    pub fn find_assigned_edit_position_from(
        &self,
        position: usize,
        direction: Direction,
    ) -> Option<usize> {
        let (start, end) = self.from_range(position, direction);
        self.find_assigned_edit_position_in_range(start, end, direction)
    }

    pub fn find_assigned_edit_position_in_range(
        &self,
        start: usize,
        end: usize,
        direction: Direction,
    ) -> Option<usize> {
        if self.assigned_count == 0 {
            return None;
        }
        find_in_range(&self.descriptors, start, end, direction, |d| {
            d.is_edit() && d.is_assigned
        })
    }

    pub fn find_unassigned_edit_position_from(
        &self,
        position: usize,
        direction: Direction,
    ) -> Option<usize> {
        let (start, end) = self.from_range(position, direction);
        self.find_unassigned_edit_position_in_range(start, end, direction)
    }

    pub fn find_unassigned_edit_position_in_range(
        &self,
        start: usize,
        end: usize,
        direction: Direction,
    ) -> Option<usize> {
        find_in_range(&self.descriptors, start, end, direction, |d| {
            d.is_edit() && !d.is_assigned
        })
    }

    pub fn find_non_edit_position_from(
        &self,
        position: usize,
        direction: Direction,
    ) -> Option<usize> {
        let (start, end) = self.from_range(position, direction);
        self.find_non_edit_position_in_range(start, end, direction)
    }

    pub fn find_non_edit_position_in_range(
        &self,
        start: usize,
        end: usize,
        direction: Direction,
    ) -> Option<usize> {
        find_in_range(&self.descriptors, start, end, direction, |d| d.is_non_edit())
    }

    /// Highest assigned edit position
    pub fn last_assigned_position(&self) -> Option<usize> {
        self.find_assigned_edit_position_from(self.len().saturating_sub(1), Direction::Backward)
    }

    pub fn is_edit_position(&self, position: usize) -> bool {
        self.descriptors
            .get(position)
            .is_some_and(PositionDescriptor::is_edit)
    }

    /// Edit position that holds no input yet
    pub fn is_available_position(&self, position: usize) -> bool {
        self.descriptors
            .get(position)
            .is_some_and(|d| d.is_edit() && !d.is_assigned)
    }

    /// Next edit position strictly after `position`
    pub(crate) fn next_edit_position(&self, position: usize) -> Option<usize> {
        self.find_edit_position_from(position + 1, Direction::Forward)
    }
}
