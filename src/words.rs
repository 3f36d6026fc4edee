//! Build-time word pool
//!
//! The stock pool for family-gathering bingo. Holds more than the 16 cells
//! of the default board, so a fresh game never shows the same word twice;
//! smaller custom pools are still legal and wrap around.

pub const DEFAULT_WORDS: &[&str] = &[
    "Dad joke",
    "Someone naps",
    "Burnt toast",
    "Wrong name",
    "Phone rings",
    "Old story",
    "Board game",
    "Spilled drink",
    "Baby cries",
    "Dog barks",
    "Weather talk",
    "Second helping",
    "Group photo",
    "Lost keys",
    "Karaoke",
    "Awkward hug",
    "Leftovers",
    "Charades",
    "Someone's late",
    "Cake time",
];
