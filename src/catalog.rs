use ratatui::style::Color;

/// Accent for tags outside the known vocabulary.
pub const DEFAULT_ACCENT: Color = Color::Rgb(0x68, 0x68, 0x68);

pub const STAT_MAX: f64 = 255.0;

struct TypeEntry {
    tag: &'static str,
    label: &'static str,
    accent: Color,
}

static TYPES: [TypeEntry; 18] = [
    TypeEntry { tag: "normal", label: "Normal", accent: Color::Rgb(0xA8, 0xA8, 0x78) },
    TypeEntry { tag: "fire", label: "Fuego", accent: Color::Rgb(0xF0, 0x80, 0x30) },
    TypeEntry { tag: "water", label: "Agua", accent: Color::Rgb(0x68, 0x90, 0xF0) },
    TypeEntry { tag: "electric", label: "Eléctrico", accent: Color::Rgb(0xF8, 0xD0, 0x30) },
    TypeEntry { tag: "grass", label: "Planta", accent: Color::Rgb(0x78, 0xC8, 0x50) },
    TypeEntry { tag: "ice", label: "Hielo", accent: Color::Rgb(0x98, 0xD8, 0xD8) },
    TypeEntry { tag: "fighting", label: "Lucha", accent: Color::Rgb(0xC0, 0x30, 0x28) },
    TypeEntry { tag: "poison", label: "Veneno", accent: Color::Rgb(0xA0, 0x40, 0xA0) },
    TypeEntry { tag: "ground", label: "Tierra", accent: Color::Rgb(0xE0, 0xC0, 0x68) },
    TypeEntry { tag: "flying", label: "Volador", accent: Color::Rgb(0xA8, 0x90, 0xF0) },
    TypeEntry { tag: "psychic", label: "Psíquico", accent: Color::Rgb(0xF8, 0x58, 0x88) },
    TypeEntry { tag: "bug", label: "Bicho", accent: Color::Rgb(0xA8, 0xB8, 0x20) },
    TypeEntry { tag: "rock", label: "Roca", accent: Color::Rgb(0xB8, 0xA0, 0x38) },
    TypeEntry { tag: "ghost", label: "Fantasma", accent: Color::Rgb(0x70, 0x58, 0x98) },
    TypeEntry { tag: "dragon", label: "Dragón", accent: Color::Rgb(0x70, 0x38, 0xF8) },
    TypeEntry { tag: "dark", label: "Siniestro", accent: Color::Rgb(0x70, 0x58, 0x48) },
    TypeEntry { tag: "steel", label: "Acero", accent: Color::Rgb(0xB8, 0xB8, 0xD0) },
    TypeEntry { tag: "fairy", label: "Hada", accent: Color::Rgb(0xEE, 0x99, 0xAC) },
];

static STATS: [(&str, &str); 6] = [
    ("hp", "PS"),
    ("attack", "Ataque"),
    ("defense", "Defensa"),
    ("special-attack", "At. Esp."),
    ("special-defense", "Def. Esp."),
    ("speed", "Velocidad"),
];

fn type_entry(tag: &str) -> Option<&'static TypeEntry> {
    TYPES.iter().find(|t| t.tag == tag)
}

pub fn type_accent(tag: &str) -> Color {
    type_entry(tag).map_or(DEFAULT_ACCENT, |t| t.accent)
}

/// Spanish label for a category tag; unknown tags pass through.
pub fn type_label(tag: &str) -> &str {
    type_entry(tag).map_or(tag, |t| t.label)
}

pub fn stat_label(key: &str) -> &str {
    STATS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

/// Bar fill in percent, never above 100.
pub fn stat_bar_percent(value: u32) -> f64 {
    (value as f64 / STAT_MAX * 100.0).min(100.0)
}

/// Plain-text bar for non-interactive output.
pub fn text_bar(value: u32, width: usize) -> String {
    let filled = (stat_bar_percent(value) / 100.0 * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatTier {
    Lowest,
    Low,
    Mid,
    High,
    Top,
}

impl StatTier {
    pub fn for_value(value: u32) -> Self {
        match value {
            150.. => Self::Top,
            100.. => Self::High,
            70.. => Self::Mid,
            50.. => Self::Low,
            _ => Self::Lowest,
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Self::Top => Color::Green,
            Self::High => Color::LightGreen,
            Self::Mid => Color::Yellow,
            Self::Low => Color::LightRed,
            Self::Lowest => Color::Red,
        }
    }
}

/// "pikachu" -> "Pikachu"
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_id(id: u32) -> String {
    format!("#{:03}", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_type_labels() {
        assert_eq!(type_label("fire"), "Fuego");
        assert_eq!(type_label("electric"), "Eléctrico");
        assert_eq!(type_label("dark"), "Siniestro");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        assert_eq!(type_label("stellar"), "stellar");
        assert_eq!(type_accent("stellar"), DEFAULT_ACCENT);
        assert_eq!(type_label(""), "");
    }

    #[test]
    fn test_every_type_has_distinct_accent() {
        for (i, a) in TYPES.iter().enumerate() {
            assert_ne!(a.accent, DEFAULT_ACCENT, "{} uses the fallback", a.tag);
            for b in TYPES.iter().skip(i + 1) {
                assert_ne!(a.tag, b.tag);
            }
        }
    }

    #[test]
    fn test_stat_labels() {
        assert_eq!(stat_label("hp"), "PS");
        assert_eq!(stat_label("special-defense"), "Def. Esp.");
        assert_eq!(stat_label("accuracy"), "accuracy");
    }

    #[test]
    fn test_stat_bar_percent() {
        assert_eq!(stat_bar_percent(0), 0.0);
        assert_eq!(stat_bar_percent(255), 100.0);
        assert_eq!(stat_bar_percent(300), 100.0);
        assert!((stat_bar_percent(51) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0, 4), "░░░░");
        assert_eq!(text_bar(255, 4), "████");
        assert_eq!(text_bar(400, 4), "████");
        assert_eq!(text_bar(128, 4).chars().filter(|c| *c == '█').count(), 2);
    }

    #[test]
    fn test_stat_tier_thresholds() {
        assert_eq!(StatTier::for_value(150), StatTier::Top);
        assert_eq!(StatTier::for_value(149), StatTier::High);
        assert_eq!(StatTier::for_value(100), StatTier::High);
        assert_eq!(StatTier::for_value(70), StatTier::Mid);
        assert_eq!(StatTier::for_value(69), StatTier::Low);
        assert_eq!(StatTier::for_value(50), StatTier::Low);
        assert_eq!(StatTier::for_value(49), StatTier::Lowest);
        assert_eq!(StatTier::for_value(0), StatTier::Lowest);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("pikachu"), "Pikachu");
        assert_eq!(display_name("mr-mime"), "Mr-mime");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_format_id() {
        assert_eq!(format_id(1), "#001");
        assert_eq!(format_id(25), "#025");
        assert_eq!(format_id(1025), "#1025");
    }

    proptest! {
        #[test]
        fn prop_stat_bar_within_bounds(value in 0u32..100_000) {
            let pct = stat_bar_percent(value);
            prop_assert!((0.0..=100.0).contains(&pct));
        }

        #[test]
        fn prop_tier_is_monotonic(a in 0u32..400, b in 0u32..400) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(StatTier::for_value(lo) <= StatTier::for_value(hi));
        }

        #[test]
        fn prop_unknown_tags_pass_through(tag in "[a-z]{1,12}x") {
            prop_assume!(type_entry(&tag).is_none());
            prop_assert_eq!(type_label(&tag), tag.as_str());
            prop_assert_eq!(type_accent(&tag), DEFAULT_ACCENT);
        }
    }
}
