use serde::Serialize;

/// One non-empty, trimmed line of card text with its position in the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub index: usize,
    pub text: String,
}

impl Line {
    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split raw OCR text into trimmed, non-empty lines indexed top to bottom.
pub fn normalize(raw: &str) -> Vec<Line> {
    raw.split(['\n', '\r'])
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(index, text)| Line {
            index,
            text: text.to_string(),
        })
        .collect()
}

/// Stage that took ownership of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Claim {
    Email,
    Website,
    Phone,
    /// "Label: value" contact line or a line carrying a phone keyword.
    ContactLabel,
    Address,
    JobTitle,
    Name,
}

/// Per-line claim slots. A claimed line stays claimed for the rest of the run
/// and keeps its first owner.
#[derive(Debug, Clone)]
pub struct Claims {
    slots: Vec<Option<Claim>>,
}

impl Claims {
    pub fn new(len: usize) -> Self {
        Claims {
            slots: vec![None; len],
        }
    }

    /// Returns true when the line was free and is now held by `by`.
    pub fn claim(&mut self, index: usize, by: Claim) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(by);
                true
            }
            _ => false,
        }
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    pub fn owner(&self, index: usize) -> Option<Claim> {
        self.slots.get(index).copied().flatten()
    }
}
