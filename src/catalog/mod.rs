mod options;

/// Thematic grouping used by the `categories` listing. Grouping is purely
/// presentational; compose order is defined by the position in [`CATEGORIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    CompositionStyle,
    CameraLens,
    EnvironmentLighting,
    HumanSubject,
    Makeup,
}

impl CategoryGroup {
    pub fn label(self) -> &'static str {
        match self {
            CategoryGroup::CompositionStyle => "Composition & Style",
            CategoryGroup::CameraLens => "Camera & Lens",
            CategoryGroup::EnvironmentLighting => "Environment & Lighting",
            CategoryGroup::HumanSubject => "Human Subject",
            CategoryGroup::Makeup => "Makeup & Beauty",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Stable key used on the command line and in storage key names.
    pub key: &'static str,
    /// Label emitted by the modifier compositor.
    pub label: &'static str,
    pub group: CategoryGroup,
    pub options: &'static [&'static str],
}

/// Every selectable category, in the exact order the compositor emits them.
/// This order is part of the public contract: changing it changes composed
/// modifier strings.
pub static CATEGORIES: &[Category] = &[
    Category {
        key: "perspective",
        label: "Perspective",
        group: CategoryGroup::CompositionStyle,
        options: options::PERSPECTIVE,
    },
    Category {
        key: "art-style",
        label: "Art Style",
        group: CategoryGroup::CompositionStyle,
        options: options::ART_STYLE,
    },
    Category {
        key: "color-palette",
        label: "Color Palette",
        group: CategoryGroup::CompositionStyle,
        options: options::COLOR_PALETTE,
    },
    Category {
        key: "texture",
        label: "Texture",
        group: CategoryGroup::CompositionStyle,
        options: options::TEXTURE,
    },
    Category {
        key: "era",
        label: "Time Period/Era",
        group: CategoryGroup::CompositionStyle,
        options: options::ERA,
    },
    Category {
        key: "camera",
        label: "Camera",
        group: CategoryGroup::CameraLens,
        options: options::CAMERA,
    },
    Category {
        key: "lens",
        label: "Lens Type",
        group: CategoryGroup::CameraLens,
        options: options::LENS_TYPE,
    },
    Category {
        key: "focal-length",
        label: "Focal Length",
        group: CategoryGroup::CameraLens,
        options: options::FOCAL_LENGTH,
    },
    Category {
        key: "aperture",
        label: "Aperture",
        group: CategoryGroup::CameraLens,
        options: options::APERTURE,
    },
    Category {
        key: "shutter-speed",
        label: "Shutter Speed",
        group: CategoryGroup::CameraLens,
        options: options::SHUTTER_SPEED,
    },
    Category {
        key: "iso",
        label: "ISO",
        group: CategoryGroup::CameraLens,
        options: options::ISO,
    },
    Category {
        key: "film-stock",
        label: "Film Stock",
        group: CategoryGroup::CameraLens,
        options: options::FILM_STOCK,
    },
    Category {
        key: "film-grain",
        label: "Film Grain",
        group: CategoryGroup::CameraLens,
        options: options::FILM_GRAIN,
    },
    Category {
        key: "white-balance",
        label: "White Balance",
        group: CategoryGroup::CameraLens,
        options: options::WHITE_BALANCE,
    },
    Category {
        key: "focus",
        label: "Focus/DOF",
        group: CategoryGroup::CameraLens,
        options: options::FOCUS,
    },
    Category {
        key: "time-of-day",
        label: "Time of Day",
        group: CategoryGroup::EnvironmentLighting,
        options: options::TIME_OF_DAY,
    },
    Category {
        key: "weather",
        label: "Weather",
        group: CategoryGroup::EnvironmentLighting,
        options: options::WEATHER,
    },
    Category {
        key: "season",
        label: "Season",
        group: CategoryGroup::EnvironmentLighting,
        options: options::SEASON,
    },
    Category {
        key: "location",
        label: "Location/Setting",
        group: CategoryGroup::EnvironmentLighting,
        options: options::LOCATION,
    },
    Category {
        key: "mood",
        label: "Mood/Atmosphere",
        group: CategoryGroup::EnvironmentLighting,
        options: options::MOOD,
    },
    Category {
        key: "lighting",
        label: "Lighting",
        group: CategoryGroup::EnvironmentLighting,
        options: options::LIGHTING,
    },
    Category {
        key: "gender",
        label: "Gender presentation",
        group: CategoryGroup::HumanSubject,
        options: options::GENDER,
    },
    Category {
        key: "age",
        label: "Age",
        group: CategoryGroup::HumanSubject,
        options: options::AGE_GROUP,
    },
    Category {
        key: "body-type",
        label: "Body type",
        group: CategoryGroup::HumanSubject,
        options: options::BODY_TYPE,
    },
    Category {
        key: "posture",
        label: "Posture",
        group: CategoryGroup::HumanSubject,
        options: options::POSTURE,
    },
    Category {
        key: "expression",
        label: "Expression",
        group: CategoryGroup::HumanSubject,
        options: options::EXPRESSION,
    },
    Category {
        key: "hair-style",
        label: "Hair style",
        group: CategoryGroup::HumanSubject,
        options: options::HAIR_STYLE,
    },
    Category {
        key: "hair-color",
        label: "Hair color",
        group: CategoryGroup::HumanSubject,
        options: options::HAIR_COLOR,
    },
    Category {
        key: "skin-tone",
        label: "Skin tone",
        group: CategoryGroup::HumanSubject,
        options: options::SKIN_TONE,
    },
    Category {
        key: "eye-color",
        label: "Eye color",
        group: CategoryGroup::HumanSubject,
        options: options::EYE_COLOR,
    },
    Category {
        key: "clothing",
        label: "Clothing",
        group: CategoryGroup::HumanSubject,
        options: options::CLOTHING,
    },
    Category {
        key: "makeup-base",
        label: "Base makeup",
        group: CategoryGroup::Makeup,
        options: options::MAKEUP_BASE,
    },
    Category {
        key: "eyeshadow",
        label: "Eyeshadow",
        group: CategoryGroup::Makeup,
        options: options::EYESHADOW,
    },
    Category {
        key: "eyeliner",
        label: "Eyeliner",
        group: CategoryGroup::Makeup,
        options: options::EYELINER,
    },
    Category {
        key: "mascara",
        label: "Mascara/Lashes",
        group: CategoryGroup::Makeup,
        options: options::MASCARA,
    },
    Category {
        key: "eyebrows",
        label: "Eyebrows",
        group: CategoryGroup::Makeup,
        options: options::EYEBROWS,
    },
    Category {
        key: "blush",
        label: "Blush",
        group: CategoryGroup::Makeup,
        options: options::BLUSH,
    },
    Category {
        key: "contour",
        label: "Contour",
        group: CategoryGroup::Makeup,
        options: options::CONTOUR,
    },
    Category {
        key: "highlight",
        label: "Highlight",
        group: CategoryGroup::Makeup,
        options: options::HIGHLIGHT,
    },
    Category {
        key: "lips",
        label: "Lips",
        group: CategoryGroup::Makeup,
        options: options::LIPS,
    },
    Category {
        key: "nails",
        label: "Nails",
        group: CategoryGroup::Makeup,
        options: options::NAILS,
    },
];

pub fn find(key: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.key == key)
}

/// Case-insensitive convenience lookup so the CLI can accept `front view`
/// for `Front view`. Returns the canonical display string.
pub fn resolve_option(category: &Category, value: &str) -> Option<&'static str> {
    category
        .options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(value))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn category_keys_are_unique() {
        let mut seen = HashSet::new();
        for category in CATEGORIES {
            assert!(seen.insert(category.key), "duplicate key {}", category.key);
        }
    }

    #[test]
    fn every_category_has_options() {
        for category in CATEGORIES {
            assert!(
                !category.options.is_empty(),
                "category {} has no options",
                category.key
            );
        }
    }

    #[test]
    fn compose_order_starts_with_composition_group() {
        assert_eq!(CATEGORIES[0].key, "perspective");
        assert_eq!(CATEGORIES[0].label, "Perspective");
        assert_eq!(CATEGORIES.last().unwrap().key, "nails");
        assert_eq!(CATEGORIES.len(), 41);
    }

    #[test]
    fn resolve_option_is_case_insensitive() {
        let category = find("perspective").unwrap();
        assert_eq!(resolve_option(category, "front view"), Some("Front view"));
        assert_eq!(resolve_option(category, "Close-up (CU)"), Some("Close-up (CU)"));
        assert_eq!(resolve_option(category, "no such option"), None);
    }
}
