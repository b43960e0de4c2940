// CharCode References
// http://www.rikai.com/library/kanjitables/kanji_codes.unicode.shtml
// http://unicode-table.com

pub const HIRAGANA_START: u32 = 0x3041;
pub const HIRAGANA_END: u32 = 0x3096;
pub const KATAKANA_START: u32 = 0x30A1;
pub const KATAKANA_END: u32 = 0x30FA;

pub const KANJI_START: u32 = 0x4E00;
pub const KANJI_END: u32 = 0x9FAF;

pub const KATAKANA_TO_HIRAGANA_END: u32 = 0x30F6;
pub const KATAKANA_TO_HIRAGANA_OFFSET_SUB: u32 = KATAKANA_START - HIRAGANA_START;

/// Half-width katakana block, as recognized by `is_pure_katakana`.
pub const HALF_WIDTH_KATAKANA_START: u32 = 0xFF65;
pub const HALF_WIDTH_KATAKANA_END: u32 = 0xFF9F;
