/// Modifier keys held at the moment of a click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

/// What a click on the grid asks the engine to do.
///
/// Shift inserts a pulsar, Ctrl (or Cmd) inserts a glider, a plain click
/// toggles the cell. Shift wins when both are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    Toggle,
    InsertPatternA,
    InsertPatternB,
}

impl EditIntent {
    pub fn classify(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Self::InsertPatternB
        } else if modifiers.ctrl || modifiers.meta {
            Self::InsertPatternA
        } else {
            Self::Toggle
        }
    }
}

/// A resolved edit: one engine mutation at a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditCommand {
    pub intent: EditIntent,
    pub row: u32,
    pub column: u32,
}

impl EditCommand {
    pub fn new(intent: EditIntent, row: u32, column: u32) -> Self {
        Self { intent, row, column }
    }
}
