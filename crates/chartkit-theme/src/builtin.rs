//! Built-in theme tables.
//!
//! The hex values here are fixed: downstream charts bake these colors into
//! rendered output, so a change here is a visible breaking change.

use chartkit_color::Rgb;

use crate::table::ThemeTable;

/// Names of the built-in themes, in registration order.
pub const BUILTIN_THEME_NAMES: [&str; 10] = [
    "dark",
    "eqie6",
    "google",
    "gotham",
    "light",
    "monokai",
    "ocean",
    "sweetlove",
    "tomorrowlight",
    "yousay",
];

/// The theme a fresh registry starts with.
pub const DEFAULT_THEME: &str = "light";

// Role order per table: background, black, blue, cyan, foreground, green,
// magenta, red, white, yellow.

const DARK: ThemeTable = ThemeTable::new([
    Rgb::new(0x1D, 0x1F, 0x21),
    Rgb::new(0x28, 0x2A, 0x2E),
    Rgb::new(0x5F, 0x81, 0x9D),
    Rgb::new(0x5E, 0x8D, 0x87),
    Rgb::new(0xC5, 0xC8, 0xC6),
    Rgb::new(0x8C, 0x94, 0x40),
    Rgb::new(0x85, 0x67, 0x8F),
    Rgb::new(0xA5, 0x42, 0x42),
    Rgb::new(0x70, 0x78, 0x80),
    Rgb::new(0xDE, 0x93, 0x5F),
]);

const EQIE6: ThemeTable = ThemeTable::new([
    Rgb::new(0x11, 0x11, 0x11),
    Rgb::new(0x22, 0x22, 0x22),
    Rgb::new(0x66, 0xA9, 0xB9),
    Rgb::new(0x6D, 0x87, 0x8D),
    Rgb::new(0xCC, 0xCC, 0xCC),
    Rgb::new(0xB7, 0xCE, 0x42),
    Rgb::new(0xB7, 0x41, 0x6E),
    Rgb::new(0xE8, 0x4F, 0x4F),
    Rgb::new(0xCC, 0xCC, 0xCC),
    Rgb::new(0xFE, 0xA6, 0x3C),
]);

const GOOGLE: ThemeTable = ThemeTable::new([
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0x1D, 0x1F, 0x21),
    Rgb::new(0x39, 0x71, 0xED),
    Rgb::new(0x39, 0x71, 0xED),
    Rgb::new(0x37, 0x3B, 0x41),
    Rgb::new(0x19, 0x88, 0x44),
    Rgb::new(0xA3, 0x6A, 0xC7),
    Rgb::new(0xCC, 0x34, 0x2B),
    Rgb::new(0xC5, 0xC8, 0xC6),
    Rgb::new(0xFB, 0xA9, 0x22),
]);

const GOTHAM: ThemeTable = ThemeTable::new([
    Rgb::new(0x0A, 0x0F, 0x14),
    Rgb::new(0x0A, 0x0F, 0x14),
    Rgb::new(0x19, 0x54, 0x65),
    Rgb::new(0x33, 0x85, 0x9D),
    Rgb::new(0x98, 0xD1, 0xCE),
    Rgb::new(0x26, 0xA9, 0x8B),
    Rgb::new(0x4E, 0x51, 0x65),
    Rgb::new(0xC3, 0x30, 0x27),
    Rgb::new(0x98, 0xD1, 0xCE),
    Rgb::new(0xED, 0xB5, 0x4B),
]);

const LIGHT: ThemeTable = ThemeTable::new([
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0x87, 0xAF, 0xDF),
    Rgb::new(0xAF, 0xDF, 0xDF),
    Rgb::new(0x1A, 0x1D, 0x1D),
    Rgb::new(0xAF, 0xD7, 0x87),
    Rgb::new(0xDF, 0xAF, 0xDF),
    Rgb::new(0xD7, 0x87, 0x87),
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0xFF, 0xFF, 0xAF),
]);

const MONOKAI: ThemeTable = ThemeTable::new([
    Rgb::new(0x27, 0x28, 0x22),
    Rgb::new(0x27, 0x28, 0x22),
    Rgb::new(0x66, 0xD9, 0xEF),
    Rgb::new(0xA1, 0xEF, 0xE4),
    Rgb::new(0xF8, 0xF8, 0xF2),
    Rgb::new(0xA6, 0xE2, 0x2E),
    Rgb::new(0xAE, 0x81, 0xFF),
    Rgb::new(0xF9, 0x26, 0x72),
    Rgb::new(0xF8, 0xF8, 0xF2),
    Rgb::new(0xF4, 0xBF, 0x75),
]);

const OCEAN: ThemeTable = ThemeTable::new([
    Rgb::new(0x2B, 0x30, 0x3B),
    Rgb::new(0x2B, 0x30, 0x3B),
    Rgb::new(0x8F, 0xA1, 0xB3),
    Rgb::new(0x96, 0xB5, 0xB4),
    Rgb::new(0xC0, 0xC5, 0xCE),
    Rgb::new(0xA3, 0xBE, 0x8C),
    Rgb::new(0xB4, 0x8E, 0xAD),
    Rgb::new(0xBF, 0x61, 0x6A),
    Rgb::new(0xC0, 0xC5, 0xCE),
    Rgb::new(0xEB, 0xCB, 0x8B),
]);

const SWEETLOVE: ThemeTable = ThemeTable::new([
    Rgb::new(0x1F, 0x1F, 0x1F),
    Rgb::new(0x4A, 0x36, 0x37),
    Rgb::new(0x53, 0x5C, 0x5C),
    Rgb::new(0x6D, 0x71, 0x5E),
    Rgb::new(0xC0, 0xB1, 0x8B),
    Rgb::new(0x7B, 0x87, 0x48),
    Rgb::new(0x77, 0x57, 0x59),
    Rgb::new(0xD1, 0x7B, 0x49),
    Rgb::new(0xC0, 0xB1, 0x8B),
    Rgb::new(0xAF, 0x86, 0x5A),
]);

const TOMORROWLIGHT: ThemeTable = ThemeTable::new([
    Rgb::new(0xFF, 0xFF, 0xFF),
    Rgb::new(0x1D, 0x1F, 0x21),
    Rgb::new(0x81, 0xA2, 0xBE),
    Rgb::new(0x8A, 0xBE, 0xB7),
    Rgb::new(0x37, 0x3B, 0x41),
    Rgb::new(0xB5, 0xBD, 0x68),
    Rgb::new(0xB2, 0x94, 0xBB),
    Rgb::new(0xCC, 0x66, 0x66),
    Rgb::new(0xC5, 0xC8, 0xC6),
    Rgb::new(0xF0, 0xC6, 0x74),
]);

const YOUSAY: ThemeTable = ThemeTable::new([
    Rgb::new(0xF5, 0xE7, 0xDE),
    Rgb::new(0x66, 0x66, 0x61),
    Rgb::new(0x4C, 0x73, 0x99),
    Rgb::new(0xD9, 0x77, 0x42),
    Rgb::new(0x34, 0x30, 0x2D),
    Rgb::new(0x4C, 0x32, 0x26),
    Rgb::new(0xBF, 0x99, 0x86),
    Rgb::new(0x99, 0x2E, 0x2E),
    Rgb::new(0x34, 0x30, 0x2D),
    Rgb::new(0xA6, 0x7C, 0x53),
]);

/// Built-in name/table pairs, in registration order.
pub(crate) const BUILTIN_THEMES: [(&str, ThemeTable); 10] = [
    ("dark", DARK),
    ("eqie6", EQIE6),
    ("google", GOOGLE),
    ("gotham", GOTHAM),
    ("light", LIGHT),
    ("monokai", MONOKAI),
    ("ocean", OCEAN),
    ("sweetlove", SWEETLOVE),
    ("tomorrowlight", TOMORROWLIGHT),
    ("yousay", YOUSAY),
];

/// Table behind [`DEFAULT_THEME`].
pub(crate) const DEFAULT_TABLE: ThemeTable = LIGHT;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ColorRole;

    #[test]
    fn names_match_registration_order() {
        for (name, (theme_name, _)) in BUILTIN_THEME_NAMES.iter().zip(BUILTIN_THEMES) {
            assert_eq!(*name, theme_name);
        }
        assert!(BUILTIN_THEME_NAMES.contains(&DEFAULT_THEME));
    }

    #[test]
    fn light_theme_hex_values_are_canonical() {
        let expect = [
            ("background", "#FFFFFF"),
            ("black", "#000000"),
            ("blue", "#87AFDF"),
            ("cyan", "#AFDFDF"),
            ("foreground", "#1A1D1D"),
            ("green", "#AFD787"),
            ("magenta", "#DFAFDF"),
            ("red", "#D78787"),
            ("white", "#FFFFFF"),
            ("yellow", "#FFFFAF"),
        ];
        for (role, (name, hex)) in ColorRole::ALL.iter().zip(expect) {
            assert_eq!(role.name(), name);
            assert_eq!(LIGHT.get(*role).to_hex(), hex);
        }
    }

    #[test]
    fn dark_theme_hex_values_are_canonical() {
        let expect = [
            "#1D1F21", "#282A2E", "#5F819D", "#5E8D87", "#C5C8C6", "#8C9440", "#85678F",
            "#A54242", "#707880", "#DE935F",
        ];
        for (role, hex) in ColorRole::ALL.iter().zip(expect) {
            assert_eq!(DARK.get(*role).to_hex(), hex);
        }
    }

    #[test]
    fn every_builtin_parses_back_from_its_hex_form() {
        for (name, table) in BUILTIN_THEMES {
            for role in ColorRole::ALL {
                let hex = table.get(role).to_hex();
                assert_eq!(
                    Rgb::from_hex(&hex),
                    Ok(table.get(role)),
                    "{name}/{role} must round-trip"
                );
            }
        }
    }
}
