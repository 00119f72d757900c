//! Reusable test content.

/// First four bytes of the PNG signature
pub const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

/// Base64 of `PNG_MAGIC`
pub const PNG_MAGIC_B64: &str = "iVBORw==";

/// Empty document for the default global
pub const EMPTY_DOCUMENT: &str = "window.GAME_ASSETS = {\n};\n";

/// Built-in (key, file) pairs in declaration order
pub const BUILTIN_FILES: &[(&str, &str)] = &[
    ("knight", "unit_knight.png"),
    ("archer", "unit_archer.png"),
    ("giant", "unit_giant.png"),
    ("tower_player", "tower_blue.png"),
    ("tower_enemy", "tower_red.png"),
    ("arena", "arena_bg.png"),
];

/// Deterministic pseudo-image bytes covering every byte value
pub fn sample_bytes(seed: u8, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}
