//! Bounds-checked access into an instruction stream.
//!
//! Recognizers never index instruction slices directly. Every lookup goes
//! through [`at`] or a [`Cursor`], which answer `None` outside `[0, len)`
//! instead of panicking, so short or unusual method bodies are simply "no match".

use crate::core::model::Instruction;

/// Instruction at signed position `index`, or `None` outside the stream.
pub fn at(instructions: &[Instruction], index: isize) -> Option<&Instruction> {
    usize::try_from(index)
        .ok()
        .and_then(|index| instructions.get(index))
}

/// A forward-moving position inside one instruction stream.
///
/// A fresh cursor sits before the first instruction; [`Cursor::advance`] moves
/// onto the next one. Cursors are created and dropped inside a single scan
/// function and never handed out.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    instructions: &'a [Instruction],
    next: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(instructions: &'a [Instruction]) -> Self {
        Self {
            instructions,
            next: 0,
        }
    }

    /// Cursor whose first [`advance`](Self::advance) lands on `position`.
    pub fn starting_at(instructions: &'a [Instruction], position: usize) -> Self {
        Self {
            instructions,
            next: position,
        }
    }

    /// Move onto the next instruction and return it with its position.
    pub fn advance(&mut self) -> Option<(usize, &'a Instruction)> {
        let position = self.next;
        let instruction = self.instructions.get(position)?;
        self.next += 1;
        Some((position, instruction))
    }

    /// Position of the instruction the cursor is on, `None` before the first advance.
    pub fn position(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    /// Instruction `offset` positions away from the current one.
    pub fn peek(&self, offset: isize) -> Option<&'a Instruction> {
        let current = self.position()? as isize;
        at(self.instructions, current + offset)
    }
}
