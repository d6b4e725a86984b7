//! Rendering of the test string with prompt, literal and password options.

use std::fmt;

use super::descriptor::CharType;
use super::index::Direction;
use super::provider::MaskedTextProvider;

const SPACE: char = ' ';

impl MaskedTextProvider {
    /// Render `length` positions starting at `start`.
    ///
    /// Unassigned edit positions show the prompt (or a space when
    /// `include_prompt` is off, in which case trailing unassigned positions
    /// are dropped). Literals are omitted when `include_literals` is off.
    pub fn render(
        &self,
        ignore_password: bool,
        include_prompt: bool,
        include_literals: bool,
        start: usize,
        length: usize,
    ) -> String {
        if length == 0 || start >= self.len() {
            return String::new();
        }
        let length = length.min(self.len() - start);
        let masked = self.password_char.filter(|_| !ignore_password);

        if masked.is_none() && include_prompt && include_literals {
            return self.buffer[start..start + length].iter().collect();
        }

        let mut last = start + length - 1;
        if !include_prompt {
            let last_literal = if include_literals {
                self.find_non_edit_position_in_range(start, last, Direction::Backward)
            } else {
                None
            };
            let last_assigned = self.find_assigned_edit_position_in_range(
                last_literal.unwrap_or(start),
                last,
                Direction::Backward,
            );
            match last_assigned.or(last_literal) {
                Some(position) => last = position,
                None => return String::new(),
            }
        }

        let mut out = String::with_capacity(last + 1 - start);
        for (descriptor, &ch) in self.descriptors[start..=last]
            .iter()
            .zip(&self.buffer[start..=last])
        {
            match descriptor.char_type {
                CharType::EditRequired | CharType::EditOptional => {
                    if descriptor.is_assigned {
                        out.push(masked.unwrap_or(ch));
                    } else if include_prompt {
                        out.push(ch);
                    } else {
                        out.push(SPACE);
                    }
                }
                CharType::Separator | CharType::Literal => {
                    if include_literals {
                        out.push(ch);
                    }
                }
            }
        }
        out
    }

    /// Whole string with the current include flags, password optionally applied
    pub fn to_string_masked(&self, ignore_password: bool) -> String {
        self.render(
            ignore_password,
            self.include_prompt,
            self.include_literals,
            0,
            self.len(),
        )
    }

    /// A slice of the string with the current include flags
    pub fn to_string_range(&self, start: usize, length: usize) -> String {
        self.render(true, self.include_prompt, self.include_literals, start, length)
    }

    pub fn to_string_with(&self, include_prompt: bool, include_literals: bool) -> String {
        self.render(true, include_prompt, include_literals, 0, self.len())
    }

    /// The string as a masked control would show it: prompts and literals
    /// included, assigned positions hidden behind the password character.
    pub fn to_display_string(&self) -> String {
        match self.password_char {
            Some(password) if self.assigned_count > 0 => self
                .descriptors
                .iter()
                .zip(&self.buffer)
                .map(|(d, &ch)| if d.is_edit() && d.is_assigned { password } else { ch })
                .collect(),
            _ => self.buffer.iter().collect(),
        }
    }
}

impl fmt::Display for MaskedTextProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_masked(true))
    }
}
