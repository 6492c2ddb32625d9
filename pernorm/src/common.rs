//! Common settings in Pernorm.

/// Zero-width non-joiner (U+200C), the Persian half-space gluing an affix to
/// its stem without a visible space.
pub const ZWNJ: char = '\u{200C}';

/// Kasra (U+0650) appended to a possessed noun before its possessor.
pub const GENITIVE_LINKER: char = '\u{0650}';

/// Persian heh, the letter a glued plural suffix is split from.
pub const HEH: char = '\u{0647}';

/// Default prefix marking a subword token that continues the previous one.
pub const CONTINUATION_MARKER: &str = "##";
