//! Allowed values for the enum-like props shared across widgets.

pub const COLORS: &[&str] = &[
    "red", "orange", "yellow", "olive", "green", "teal", "blue", "violet", "purple", "pink",
    "brown", "grey", "black",
];

pub const SIZES: &[&str] = &["mini", "tiny", "small", "medium", "large", "big", "huge", "massive"];

pub const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right", "justified"];

/// [`TEXT_ALIGNMENTS`] without `justified`.
pub const TEXT_ALIGNMENTS_UNJUSTIFIED: &[&str] = &["left", "center", "right"];

pub const VERTICAL_ALIGNMENTS: &[&str] = &["bottom", "middle", "top"];

pub const FLOATS: &[&str] = &["left", "right"];

pub const WIDTH_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
];

/// Whether a value names a width: 1 to 16 as a number, a numeric string,
/// or a spelled-out word.
pub fn is_width(value: &tapioca_core::PropValue) -> bool {
    use tapioca_core::PropValue;
    match value {
        PropValue::Number(n) => n.as_u64().is_some_and(|n| (1..=16).contains(&n)),
        PropValue::Str(s) => {
            WIDTH_WORDS.iter().any(|w| *w == s.as_str())
                || s.parse::<u64>().is_ok_and(|n| (1..=16).contains(&n))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapioca_core::PropValue;

    #[test]
    fn widths() {
        assert!(is_width(&PropValue::from(1)));
        assert!(is_width(&PropValue::from(16)));
        assert!(is_width(&PropValue::from("4")));
        assert!(is_width(&PropValue::from("twelve")));
        assert!(!is_width(&PropValue::from(0)));
        assert!(!is_width(&PropValue::from(17)));
        assert!(!is_width(&PropValue::from("equal")));
        assert!(!is_width(&PropValue::from(true)));
    }
}
