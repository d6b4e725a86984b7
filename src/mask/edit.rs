//! Edit engine: add, insert, remove, replace, set and clear.
//!
//! Every mutating operation first runs a test pass over the whole
//! operation (each input character and each character that would shift)
//! and only commits when the test succeeded. A failed operation leaves the
//! buffer, descriptors and counters untouched.

use super::hint::{settle, EditResult, Outcome, Rejection, ResultHint};
use super::index::Direction;
use super::provider::MaskedTextProvider;

/// Source and destination of one shifted edit slot.
type Shift = (usize, usize);

// =============================================================================
// Commit primitives
// =============================================================================

impl MaskedTextProvider {
    /// Write `input` at `position`, or reset the slot when the input is escaped.
    fn set_char(&mut self, input: char, position: usize) {
        if self.test_escape_char(input, position) {
            self.reset_char(position);
            return;
        }

        let descriptor = &mut self.descriptors[position];
        debug_assert!(descriptor.is_edit(), "writing into a literal position");

        self.buffer[position] = descriptor.case_conversion.apply(input);

        if !descriptor.is_assigned {
            descriptor.is_assigned = true;
            self.assigned_count += 1;
            if descriptor.is_required() {
                self.required_assigned_count += 1;
            }
        }
    }

    /// Return an assigned edit slot to the prompt
    fn reset_char(&mut self, position: usize) {
        let descriptor = &mut self.descriptors[position];
        if descriptor.is_edit() && descriptor.is_assigned {
            descriptor.is_assigned = false;
            self.buffer[position] = self.prompt_char;
            self.assigned_count -= 1;
            if descriptor.is_required() {
                self.required_assigned_count -= 1;
            }
        }
    }

    /// Reset every assigned edit slot in `start..=end`
    fn reset_range(&mut self, start: usize, end: usize) {
        let end = end.min(self.len().saturating_sub(1));
        for position in start..=end {
            self.reset_char(position);
        }
    }

    /// Write a pre-tested string starting at `position`
    fn set_string(&mut self, input: &[char], mut position: usize) {
        for &ch in input {
            if !self.test_escape_char(ch, position) {
                match self.find_edit_position_from(position, Direction::Forward) {
                    Some(edit) => position = edit,
                    None => return,
                }
            }
            self.set_char(ch, position);
            position += 1;
        }
    }

    /// Apply right or left shifts in the given order. Unassigned sources reset the destination.
    fn apply_shifts(&mut self, shifts: &[Shift], clear_source: bool) {
        for &(src, dst) in shifts {
            if self.descriptors[src].is_assigned {
                let ch = self.buffer[src];
                self.set_char(ch, dst);
                if clear_source {
                    self.reset_char(src);
                }
            } else {
                self.reset_char(dst);
            }
        }
    }
}

// =============================================================================
// Test passes
// =============================================================================

impl MaskedTextProvider {
    /// Test a whole string from `position`.
    ///
    /// Returns the position of the last character placed and the strongest
    /// hint seen, or the first failing position.
    fn test_string(&self, input: &[char], position: usize) -> Outcome {
        let mut hint = ResultHint::Unknown;
        let mut test_position = position;

        for &ch in input {
            if test_position >= self.len() {
                return Err(Rejection::new(
                    test_position,
                    ResultHint::UnavailableEditPosition,
                ));
            }

            if !self.test_escape_char(ch, test_position) {
                test_position = self
                    .find_edit_position_from(test_position, Direction::Forward)
                    .ok_or(Rejection::new(self.len(), ResultHint::UnavailableEditPosition))?;
            }

            let char_hint = self
                .test_char(ch, test_position)
                .map_err(|h| Rejection::new(test_position, h))?;
            hint = hint.max(char_hint);
            test_position += 1;
        }

        Ok((test_position.saturating_sub(1), hint))
    }

    /// Pair each edit slot in `first_src..=last_src` with the edit slots from
    /// `first_dst` onward, testing assigned characters at their destination.
    fn test_shift(
        &self,
        first_src: usize,
        last_src: usize,
        first_dst: Option<usize>,
    ) -> Result<(Vec<Shift>, ResultHint), Rejection> {
        let mut shifts = Vec::new();
        let mut hint = ResultHint::Unknown;
        let mut src = Some(first_src);
        let mut dst = first_dst;

        while let Some(s) = src.filter(|&s| s <= last_src) {
            let d = dst.ok_or(Rejection::new(
                self.len(),
                ResultHint::UnavailableEditPosition,
            ))?;

            if self.descriptors[s].is_assigned {
                let shift_hint = self
                    .test_char(self.buffer[s], d)
                    .map_err(|h| Rejection::new(d, h))?;
                hint = hint.max(shift_hint);
            }

            shifts.push((s, d));
            src = self.next_edit_position(s);
            dst = self.next_edit_position(d);
        }

        Ok((shifts, hint))
    }

    fn test_char_at(&self, input: char, position: usize) -> Outcome {
        self.test_char(input, position)
            .map(|hint| (position, hint))
            .map_err(|hint| Rejection::new(position, hint))
    }

    /// Test one character and commit it unless it is a no-op or escaped
    fn test_set_char(&mut self, input: char, position: usize) -> Outcome {
        let (position, hint) = self.test_char_at(input, position)?;
        if matches!(hint, ResultHint::Success | ResultHint::SideEffect) {
            self.set_char(input, position);
        }
        Ok((position, hint))
    }

    fn test_set_string(&mut self, input: &[char], position: usize) -> Outcome {
        let outcome = self.test_string(input, position)?;
        self.set_string(input, position);
        Ok(outcome)
    }

    fn out_of_range(&self, position: usize) -> Option<EditResult> {
        (position >= self.len()).then(|| EditResult::fail(position, ResultHint::PositionOutOfRange))
    }

    fn range_out_of_range(&self, start: usize, end: usize) -> Option<EditResult> {
        if end >= self.len() {
            Some(EditResult::fail(end, ResultHint::PositionOutOfRange))
        } else if start > end {
            Some(EditResult::fail(start, ResultHint::PositionOutOfRange))
        } else {
            None
        }
    }
}

fn chars(input: &str) -> Vec<char> {
    input.chars().collect()
}

fn log_rejection(operation: &str, result: EditResult) -> EditResult {
    if !result.success {
        tracing::trace!(
            "{} rejected at {}: {:?}",
            operation,
            result.position,
            result.hint
        );
    }
    result
}

// =============================================================================
// Add / Remove
// =============================================================================

impl MaskedTextProvider {
    /// Append a character after the last assigned position
    pub fn add(&mut self, input: char) -> EditResult {
        let len = self.len();
        let start = match self.last_assigned_position() {
            Some(last) if last + 1 >= len => {
                return log_rejection(
                    "add",
                    EditResult::fail(len, ResultHint::UnavailableEditPosition),
                );
            }
            Some(last) => last + 1,
            None => 0,
        };

        let Some(position) = self.find_edit_position_from(start, Direction::Forward) else {
            return log_rejection(
                "add",
                EditResult::fail(len, ResultHint::UnavailableEditPosition),
            );
        };

        log_rejection("add", settle(self.test_set_char(input, position)))
    }

    /// Append a string after the last assigned position
    pub fn add_str(&mut self, input: &str) -> EditResult {
        let position = self.last_assigned_position().map_or(0, |last| last + 1);
        if input.is_empty() {
            return EditResult::ok(position, ResultHint::NoEffect);
        }
        log_rejection(
            "add_str",
            settle(self.test_set_string(&chars(input), position)),
        )
    }

    /// Clear the last assigned position (no shifting)
    pub fn remove(&mut self) -> EditResult {
        match self.last_assigned_position() {
            Some(last) => {
                self.reset_char(last);
                EditResult::ok(last, ResultHint::Success)
            }
            None => EditResult::ok(0, ResultHint::NoEffect),
        }
    }

    /// Remove the character at `position`, shifting the rest left
    pub fn remove_at_position(&mut self, position: usize) -> EditResult {
        self.remove_at(position, position)
    }

    /// Remove the edit characters in `start..=end`, shifting upper characters left
    pub fn remove_at(&mut self, start: usize, end: usize) -> EditResult {
        if let Some(failure) = self.range_out_of_range(start, end) {
            return failure;
        }
        log_rejection("remove_at", settle(self.remove_range(start, end, false)))
    }

    fn remove_range(&mut self, start: usize, end: usize, test_only: bool) -> Outcome {
        let last_assigned = self.last_assigned_position();
        let first_edit = self.find_edit_position_in_range(start, end, Direction::Forward);

        let (first_edit, last_assigned) = match (first_edit, last_assigned) {
            (Some(first), Some(last)) if first <= last => (first, last),
            _ => return Ok((start, ResultHint::NoEffect)),
        };

        let mut hint = if self
            .find_assigned_edit_position_in_range(start, end, Direction::Forward)
            .is_some()
        {
            ResultHint::Success
        } else {
            ResultHint::NoEffect
        };

        let shifts = if end < last_assigned {
            let first_src = self
                .next_edit_position(end)
                .ok_or(Rejection::new(end, ResultHint::UnavailableEditPosition))?;
            let (shifts, _) = self.test_shift(first_src, last_assigned, Some(first_edit))?;
            hint = hint.max(ResultHint::SideEffect);
            shifts
        } else {
            Vec::new()
        };

        if test_only {
            return Ok((start, hint));
        }

        self.apply_shifts(&shifts, true);

        // Slots freed by the removal but not refilled by the shift
        let reset_from = shifts.last().map_or(first_edit, |&(_, dst)| dst + 1);
        if reset_from <= end {
            self.reset_range(reset_from, end);
        }

        Ok((start, hint))
    }
}

// =============================================================================
// Insert
// =============================================================================

impl MaskedTextProvider {
    pub fn insert_char_at(&mut self, input: char, position: usize) -> EditResult {
        self.insert_at(&input.to_string(), position)
    }

    /// Insert `input` at `position`, shifting assigned characters right
    pub fn insert_at(&mut self, input: &str, position: usize) -> EditResult {
        if let Some(failure) = self.out_of_range(position) {
            return failure;
        }
        if input.is_empty() {
            return EditResult::ok(position, ResultHint::NoEffect);
        }
        log_rejection("insert_at", settle(self.insert_chars(&chars(input), position)))
    }

    fn insert_chars(&mut self, input: &[char], position: usize) -> Outcome {
        let (last_position, mut hint) = self.test_string(input, position)?;

        let first_src = self.find_edit_position_from(position, Direction::Forward);
        let shift_from = first_src.filter(|&src| {
            self.find_assigned_edit_position_in_range(src, last_position, Direction::Forward)
                .is_some()
        });

        let shifts = match (shift_from, self.last_assigned_position()) {
            (Some(src), Some(last_assigned)) => {
                if last_position + 1 >= self.len() {
                    return Err(Rejection::new(
                        self.len(),
                        ResultHint::UnavailableEditPosition,
                    ));
                }
                let first_dst = self.next_edit_position(last_position);
                let (shifts, shift_hint) = self.test_shift(src, last_assigned, first_dst)?;
                hint = hint.max(shift_hint);
                shifts
            }
            _ => Vec::new(),
        };

        // Right-to-left so no source is overwritten before it moves.
        let reversed: Vec<Shift> = shifts.into_iter().rev().collect();
        self.apply_shifts(&reversed, false);
        self.set_string(input, position);

        Ok((last_position, hint))
    }
}

// =============================================================================
// Replace / Set / Clear
// =============================================================================

impl MaskedTextProvider {
    /// Overwrite the first edit position at or after `position`
    pub fn replace_char(&mut self, input: char, position: usize) -> EditResult {
        if let Some(failure) = self.out_of_range(position) {
            return failure;
        }

        let target = if self.test_escape_char(input, position) {
            Some(position)
        } else {
            self.find_edit_position_from(position, Direction::Forward)
        };

        let Some(target) = target else {
            return EditResult::fail(position, ResultHint::UnavailableEditPosition);
        };

        log_rejection("replace_char", settle(self.test_set_char(input, target)))
    }

    /// Replace `start..=end` with a single character, removing the rest of the range
    pub fn replace_char_range(&mut self, input: char, start: usize, end: usize) -> EditResult {
        if let Some(failure) = self.range_out_of_range(start, end) {
            return failure;
        }
        if start == end {
            return log_rejection(
                "replace_char_range",
                settle(self.test_set_char(input, start)),
            );
        }
        self.replace(&input.to_string(), start, end)
    }

    /// Overwrite from `position` with `input`; empty input removes the character at `position`
    pub fn replace_str(&mut self, input: &str, position: usize) -> EditResult {
        if let Some(failure) = self.out_of_range(position) {
            return failure;
        }
        if input.is_empty() {
            return self.remove_at(position, position);
        }
        log_rejection(
            "replace_str",
            settle(self.test_set_string(&chars(input), position)),
        )
    }

    /// Replace the characters in `start..=end` with `input`.
    ///
    /// Shorter input removes the remainder of the range (shifting left);
    /// longer input shifts the characters above the range right.
    pub fn replace(&mut self, input: &str, start: usize, end: usize) -> EditResult {
        if let Some(failure) = self.range_out_of_range(start, end) {
            return failure;
        }
        if input.is_empty() {
            return self.remove_at(start, end);
        }
        log_rejection(
            "replace",
            settle(self.replace_range(&chars(input), start, end)),
        )
    }

    fn replace_range(&mut self, input: &[char], start: usize, end: usize) -> Outcome {
        let (last_position, mut hint) = self.test_string(input, start)?;

        if self.assigned_count > 0 {
            if last_position < end {
                // Shorter: replace, then remove what is left of the range.
                let (_, remove_hint) = self.remove_range(last_position + 1, end, true)?;
                self.remove_range(last_position + 1, end, false)?;
                if remove_hint == ResultHint::Success && hint != ResultHint::Success {
                    hint = ResultHint::SideEffect;
                }
            } else if last_position > end {
                // Longer: shift characters above the range to make room.
                if let Some(last_assigned) = self.last_assigned_position().filter(|&l| l > end) {
                    let first_src = self
                        .next_edit_position(end)
                        .ok_or(Rejection::new(end, ResultHint::UnavailableEditPosition))?;
                    let first_dst = self.next_edit_position(last_position);
                    let (shifts, shift_hint) =
                        self.test_shift(first_src, last_assigned, first_dst)?;
                    if shift_hint == ResultHint::Success {
                        hint = ResultHint::Success;
                    }
                    let reversed: Vec<Shift> = shifts.into_iter().rev().collect();
                    self.apply_shifts(&reversed, false);
                }
            }
        }

        self.set_string(input, start);
        Ok((last_position, hint))
    }

    /// Replace the whole content; assigned positions beyond the input are reset
    pub fn set(&mut self, input: &str) -> EditResult {
        if input.is_empty() {
            let hint = self.clear().hint;
            return EditResult::ok(0, hint);
        }

        let outcome = self.test_set_string(&chars(input), 0);
        if let Ok((last_position, _)) = outcome {
            if let Some(reset_from) =
                self.find_assigned_edit_position_from(last_position + 1, Direction::Forward)
            {
                self.reset_range(reset_from, self.len() - 1);
            }
        }
        log_rejection("set", settle(outcome))
    }

    /// Reset every assigned position
    pub fn clear(&mut self) -> EditResult {
        if self.assigned_count == 0 {
            return EditResult::ok(0, ResultHint::NoEffect);
        }
        self.reset_range(0, self.len().saturating_sub(1));
        EditResult::ok(0, ResultHint::Success)
    }
}

// =============================================================================
// Verification (read-only)
// =============================================================================

impl MaskedTextProvider {
    /// Would `input` be accepted at `position`?
    pub fn verify_char(&self, input: char, position: usize) -> EditResult {
        if let Some(failure) = self.out_of_range(position) {
            return failure;
        }
        settle(self.test_char_at(input, position))
    }

    /// Would `input` be escaped at `position`?
    pub fn verify_escape_char(&self, input: char, position: usize) -> bool {
        position < self.len() && self.test_escape_char(input, position)
    }

    /// Would `set(input)` succeed?
    pub fn verify_string(&self, input: &str) -> EditResult {
        if input.is_empty() {
            return EditResult::ok(0, ResultHint::NoEffect);
        }
        settle(self.test_string(&chars(input), 0))
    }
}
