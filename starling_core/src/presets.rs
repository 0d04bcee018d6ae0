//! Built-in cardiac regime presets.
//!
//! One baseline and two pairs of directional variants. Variants override
//! `sv_max` and `km_effective` and inherit everything else from baseline.

use crate::CardiacParams;
use once_cell::sync::Lazy;

/// Resting baseline: half of `sv_max` is reached at EDV 140 mL
pub const BASELINE: CardiacParams = CardiacParams {
    min_edv_for_ejection: 50.0,
    sv_max: 180.0,
    km_effective: 90.0,
    hill_coefficient: 2.8,
    heart_rate: 72.0,
};

/// Increased contractility (half-max at EDV 120 mL)
pub const POSITIVE_INOTROPY: CardiacParams = CardiacParams {
    sv_max: 220.0,
    km_effective: 70.0,
    ..BASELINE
};

/// Decreased contractility
pub const NEGATIVE_INOTROPY: CardiacParams = CardiacParams {
    sv_max: 150.0,
    km_effective: 110.0,
    ..BASELINE
};

/// Higher outflow resistance (half-max at EDV 150 mL)
pub const INCREASED_AFTERLOAD: CardiacParams = CardiacParams {
    sv_max: 150.0,
    km_effective: 100.0,
    ..BASELINE
};

/// Lower outflow resistance
pub const DECREASED_AFTERLOAD: CardiacParams = CardiacParams {
    sv_max: 210.0,
    km_effective: 80.0,
    ..BASELINE
};

/// A named catalog entry
#[derive(Clone, Debug)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub params: CardiacParams,
}

/// Cached preset catalog, in display order
static PRESET_CATALOG: Lazy<Vec<Preset>> = Lazy::new(|| {
    vec![
        Preset {
            name: "baseline",
            description: "Resting baseline",
            params: BASELINE,
        },
        Preset {
            name: "positive_inotropy",
            description: "Increased contractility",
            params: POSITIVE_INOTROPY,
        },
        Preset {
            name: "negative_inotropy",
            description: "Decreased contractility",
            params: NEGATIVE_INOTROPY,
        },
        Preset {
            name: "increased_afterload",
            description: "Increased outflow resistance",
            params: INCREASED_AFTERLOAD,
        },
        Preset {
            name: "decreased_afterload",
            description: "Decreased outflow resistance",
            params: DECREASED_AFTERLOAD,
        },
    ]
});

/// Get a reference to the cached preset catalog
pub fn catalog() -> &'static [Preset] {
    &PRESET_CATALOG
}

/// Look up a preset by name
///
/// Matching ignores case and treats `-` and `_` as the same character, so
/// `Positive-Inotropy` finds `positive_inotropy`.
pub fn find(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim().to_lowercase().replace('-', "_");
    catalog().iter().find(|p| p.name == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_inherit_baseline_fields() {
        for preset in catalog() {
            assert_eq!(
                preset.params.min_edv_for_ejection,
                BASELINE.min_edv_for_ejection
            );
            assert_eq!(preset.params.hill_coefficient, BASELINE.hill_coefficient);
            assert_eq!(preset.params.heart_rate, BASELINE.heart_rate);
        }
    }

    #[test]
    fn test_catalog_has_five_unique_names() {
        let names: std::collections::HashSet<_> = catalog().iter().map(|p| p.name).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_find_normalizes_name() {
        let preset = find("Positive-Inotropy").unwrap();
        assert_eq!(preset.params, POSITIVE_INOTROPY);
        assert_eq!(find(" baseline ").unwrap().params, BASELINE);
        assert!(find("tachycardia").is_none());
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in catalog() {
            assert!(preset.params.validate().is_ok(), "{}", preset.name);
            assert!(preset.params.hill_coefficient > 0.0);
        }
    }
}
