//! Lookup tables for symbolic key names.
//!
//! Two independent tables back key-press resolution: one maps symbolic
//! names to display legends, the other maps them to Linux input-event
//! codes. A name may appear in either table without the other; letters need
//! no legend entry (the name already is the legend) and shifted symbols
//! have no event code of their own.

use super::PlatformKeyCode;

/// Looks up the display legend for a symbolic key name.
pub(crate) fn legend_for(key: &str) -> Option<&'static str> {
    KEY_LEGENDS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, legend)| *legend)
}

/// Looks up the platform input-event code for a symbolic key name.
pub(crate) fn code_for(key: &str) -> Option<PlatformKeyCode> {
    KEY_CODES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, code)| *code)
}

/// Looks up the legend for a recognized bluetooth sub-command.
pub(crate) fn bluetooth_action_legend(action: &str) -> Option<&'static str> {
    BLUETOOTH_ACTIONS
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, legend)| *legend)
}

/// Looks up the legend for a fixed whole-expression literal.
pub(crate) fn fixed_legend(expression: &str) -> Option<&'static str> {
    FIXED_LEGENDS
        .iter()
        .find(|(literal, _)| *literal == expression)
        .map(|(_, legend)| *legend)
}

/// Symbolic key names whose display legend differs from the name itself.
const KEY_LEGENDS: &[(&str, &str)] = &[
    // Number row
    ("N1", "1"),
    ("N2", "2"),
    ("N3", "3"),
    ("N4", "4"),
    ("N5", "5"),
    ("N6", "6"),
    ("N7", "7"),
    ("N8", "8"),
    ("N9", "9"),
    ("N0", "0"),
    // Unshifted punctuation
    ("GRAVE", "`"),
    ("MINUS", "-"),
    ("EQUAL", "="),
    ("LBKT", "["),
    ("RBKT", "]"),
    ("BSLH", "\\"),
    ("SEMI", ";"),
    ("SQT", "'"),
    ("COMMA", ","),
    ("DOT", "."),
    ("FSLH", "/"),
    // Shifted symbols
    ("EXCL", "!"),
    ("AT", "@"),
    ("HASH", "#"),
    ("DLLR", "$"),
    ("PRCNT", "%"),
    ("CARET", "^"),
    ("AMPS", "&"),
    ("STAR", "*"),
    ("LPAR", "("),
    ("RPAR", ")"),
    ("TILDE", "~"),
    ("UNDER", "_"),
    ("PLUS", "+"),
    ("LBRC", "{"),
    ("RBRC", "}"),
    ("PIPE", "|"),
    ("COLON", ":"),
    ("DQT", "\""),
    ("LT", "<"),
    ("GT", ">"),
    ("QMARK", "?"),
    // Modifiers collapse to their unsided names
    ("LSHFT", "SHIFT"),
    ("LSHIFT", "SHIFT"),
    ("RSHFT", "SHIFT"),
    ("RSHIFT", "SHIFT"),
    ("LCTRL", "CTRL"),
    ("LCTL", "CTRL"),
    ("RCTRL", "CTRL"),
    ("RCTL", "CTRL"),
    ("LALT", "ALT"),
    ("RALT", "ALT"),
    ("LGUI", "GUI"),
    ("RGUI", "GUI"),
    ("LCMD", "GUI"),
    ("RCMD", "GUI"),
    ("LWIN", "GUI"),
    ("RWIN", "GUI"),
    // Navigation
    ("LEFT", "←"),
    ("RIGHT", "→"),
    ("UP", "↑"),
    ("DOWN", "↓"),
    ("PG_UP", "PG UP"),
    ("PG_DN", "PG DN"),
    ("PSCRN", "PRINT"),
    // Consumer controls
    ("C_PP", "PLAY"),
    ("C_PLAY_PAUSE", "PLAY"),
    ("C_NEXT", "NEXT"),
    ("C_PREV", "PREV"),
    ("C_MUTE", "MUTE"),
    ("C_VOL_UP", "VOL+"),
    ("C_VOL_DN", "VOL-"),
    ("C_BRI_UP", "BRI+"),
    ("C_BRI_DN", "BRI-"),
];

/// Symbolic key names with a Linux input-event code.
///
/// Values are `KEY_*` constants from `input-event-codes.h`. Shifted symbols
/// are deliberately absent: the hardware emits the base key plus a shift,
/// so there is no single code to report.
const KEY_CODES: &[(&str, PlatformKeyCode)] = &[
    // Letters
    ("A", 30),
    ("B", 48),
    ("C", 46),
    ("D", 32),
    ("E", 18),
    ("F", 33),
    ("G", 34),
    ("H", 35),
    ("I", 23),
    ("J", 36),
    ("K", 37),
    ("L", 38),
    ("M", 50),
    ("N", 49),
    ("O", 24),
    ("P", 25),
    ("Q", 16),
    ("R", 19),
    ("S", 31),
    ("T", 20),
    ("U", 22),
    ("V", 47),
    ("W", 17),
    ("X", 45),
    ("Y", 21),
    ("Z", 44),
    // Number row
    ("N1", 2),
    ("N2", 3),
    ("N3", 4),
    ("N4", 5),
    ("N5", 6),
    ("N6", 7),
    ("N7", 8),
    ("N8", 9),
    ("N9", 10),
    ("N0", 11),
    // Control and whitespace
    ("ESC", 1),
    ("TAB", 15),
    ("SPACE", 57),
    ("RET", 28),
    ("ENTER", 28),
    ("BSPC", 14),
    ("DEL", 111),
    ("INS", 110),
    ("CAPS", 58),
    // Unshifted punctuation
    ("GRAVE", 41),
    ("MINUS", 12),
    ("EQUAL", 13),
    ("LBKT", 26),
    ("RBKT", 27),
    ("BSLH", 43),
    ("SEMI", 39),
    ("SQT", 40),
    ("COMMA", 51),
    ("DOT", 52),
    ("FSLH", 53),
    // Modifiers
    ("LSHFT", 42),
    ("LSHIFT", 42),
    ("RSHFT", 54),
    ("RSHIFT", 54),
    ("LCTRL", 29),
    ("LCTL", 29),
    ("RCTRL", 97),
    ("RCTL", 97),
    ("LALT", 56),
    ("RALT", 100),
    ("LGUI", 125),
    ("RGUI", 126),
    ("LCMD", 125),
    ("RCMD", 126),
    ("LWIN", 125),
    ("RWIN", 126),
    // Function row
    ("F1", 59),
    ("F2", 60),
    ("F3", 61),
    ("F4", 62),
    ("F5", 63),
    ("F6", 64),
    ("F7", 65),
    ("F8", 66),
    ("F9", 67),
    ("F10", 68),
    ("F11", 87),
    ("F12", 88),
    // Navigation
    ("HOME", 102),
    ("END", 107),
    ("PG_UP", 104),
    ("PG_DN", 109),
    ("LEFT", 105),
    ("RIGHT", 106),
    ("UP", 103),
    ("DOWN", 108),
    // Consumer controls
    ("C_MUTE", 113),
    ("C_VOL_DN", 114),
    ("C_VOL_UP", 115),
    // Misc
    ("PSCRN", 99),
    ("SLCK", 70),
    ("PAUSE_BREAK", 119),
    ("K_APP", 127),
];

/// Recognized bluetooth sub-commands other than profile selection.
const BLUETOOTH_ACTIONS: &[(&str, &str)] = &[
    ("BT_CLR", "BT CLR"),
    ("BT_CLR_ALL", "BT CLR ALL"),
    ("BT_NXT", "BT NEXT"),
    ("BT_PRV", "BT PREV"),
];

/// Whole expressions with a fixed legend.
const FIXED_LEGENDS: &[(&str, &str)] = &[
    ("&none", ""),
    ("&studio_unlock", "STUDIO"),
    ("&sys_reset", "RESET"),
    ("&bootloader", "BOOT"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_lookup() {
        assert_eq!(legend_for("GRAVE"), Some("`"));
        assert_eq!(legend_for("N0"), Some("0"));
        assert_eq!(legend_for("LEFT"), Some("←"));
        assert_eq!(legend_for("A"), None);
        assert_eq!(legend_for("NOT_A_KEY"), None);
    }

    #[test]
    fn test_code_lookup() {
        assert_eq!(code_for("A"), Some(30));
        assert_eq!(code_for("TAB"), Some(15));
        assert_eq!(code_for("F11"), Some(87));
        assert_eq!(code_for("EXCL"), None);
        assert_eq!(code_for("NOT_A_KEY"), None);
    }

    #[test]
    fn test_tables_are_independent() {
        // Letters resolve to a code but need no legend entry.
        assert!(legend_for("Q").is_none());
        assert!(code_for("Q").is_some());
        // Shifted symbols have a legend but no code of their own.
        assert!(legend_for("DLLR").is_some());
        assert!(code_for("DLLR").is_none());
    }

    #[test]
    fn test_aliases_share_codes() {
        assert_eq!(code_for("RET"), code_for("ENTER"));
        assert_eq!(code_for("LSHFT"), code_for("LSHIFT"));
        assert_eq!(code_for("LGUI"), code_for("LWIN"));
    }

    #[test]
    fn test_bluetooth_actions() {
        assert_eq!(bluetooth_action_legend("BT_CLR"), Some("BT CLR"));
        assert_eq!(bluetooth_action_legend("BT_NXT"), Some("BT NEXT"));
        assert_eq!(bluetooth_action_legend("BT_SEL"), None);
    }

    #[test]
    fn test_fixed_legends() {
        assert_eq!(fixed_legend("&none"), Some(""));
        assert_eq!(fixed_legend("&bootloader"), Some("BOOT"));
        assert_eq!(fixed_legend("&kp A"), None);
    }
}
