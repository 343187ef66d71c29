//! Integration tests for the theme engine as chart code uses it.

use std::sync::Arc;

use chartkit_theme::{
    ActiveColorSet, BUILTIN_THEME_NAMES, ColorRole, DEFAULT_THEME, Rgb, ThemeError, ThemeRegistry,
};

/// Canonical hex values of every built-in theme, in role order
/// (background, black, blue, cyan, foreground, green, magenta, red,
/// white, yellow). Charts bake these into output, so they are pinned.
const BUILTIN_HEX: [(&str, [&str; 10]); 10] = [
    (
        "dark",
        [
            "#1D1F21", "#282A2E", "#5F819D", "#5E8D87", "#C5C8C6", "#8C9440", "#85678F",
            "#A54242", "#707880", "#DE935F",
        ],
    ),
    (
        "eqie6",
        [
            "#111111", "#222222", "#66A9B9", "#6D878D", "#CCCCCC", "#B7CE42", "#B7416E",
            "#E84F4F", "#CCCCCC", "#FEA63C",
        ],
    ),
    (
        "google",
        [
            "#FFFFFF", "#1D1F21", "#3971ED", "#3971ED", "#373B41", "#198844", "#A36AC7",
            "#CC342B", "#C5C8C6", "#FBA922",
        ],
    ),
    (
        "gotham",
        [
            "#0A0F14", "#0A0F14", "#195465", "#33859D", "#98D1CE", "#26A98B", "#4E5165",
            "#C33027", "#98D1CE", "#EDB54B",
        ],
    ),
    (
        "light",
        [
            "#FFFFFF", "#000000", "#87AFDF", "#AFDFDF", "#1A1D1D", "#AFD787", "#DFAFDF",
            "#D78787", "#FFFFFF", "#FFFFAF",
        ],
    ),
    (
        "monokai",
        [
            "#272822", "#272822", "#66D9EF", "#A1EFE4", "#F8F8F2", "#A6E22E", "#AE81FF",
            "#F92672", "#F8F8F2", "#F4BF75",
        ],
    ),
    (
        "ocean",
        [
            "#2B303B", "#2B303B", "#8FA1B3", "#96B5B4", "#C0C5CE", "#A3BE8C", "#B48EAD",
            "#BF616A", "#C0C5CE", "#EBCB8B",
        ],
    ),
    (
        "sweetlove",
        [
            "#1F1F1F", "#4A3637", "#535C5C", "#6D715E", "#C0B18B", "#7B8748", "#775759",
            "#D17B49", "#C0B18B", "#AF865A",
        ],
    ),
    (
        "tomorrowlight",
        [
            "#FFFFFF", "#1D1F21", "#81A2BE", "#8ABEB7", "#373B41", "#B5BD68", "#B294BB",
            "#CC6666", "#C5C8C6", "#F0C674",
        ],
    ),
    (
        "yousay",
        [
            "#F5E7DE", "#666661", "#4C7399", "#D97742", "#34302D", "#4C3226", "#BF9986",
            "#992E2E", "#34302D", "#A67C53",
        ],
    ),
];

#[test]
fn registry_starts_on_light() {
    let registry = ThemeRegistry::with_defaults();
    assert_eq!(DEFAULT_THEME, "light");
    assert_eq!(registry.current().theme_name(), "light");
    assert_eq!(registry.theme_names(), BUILTIN_THEME_NAMES);
}

#[test]
fn every_builtin_resolves_to_its_canonical_colors() {
    let registry = ThemeRegistry::with_defaults();
    for (name, hex) in BUILTIN_HEX {
        let set = registry.activate(name).unwrap();
        assert_eq!(set.theme_name(), name);
        for (role, expected) in ColorRole::ALL.iter().zip(hex) {
            assert_eq!(
                set.color(*role).rgb().to_hex(),
                expected,
                "{name}/{role} diverged from its canonical value"
            );
        }
    }
}

#[test]
fn activation_failures_do_not_disturb_the_active_set() {
    let registry = ThemeRegistry::with_defaults();
    let before = registry.activate("ocean").unwrap();

    let err = registry.activate("no-such-theme").unwrap_err();
    assert_eq!(err, ThemeError::unknown_theme("no-such-theme"));
    assert!(Arc::ptr_eq(&before, &registry.current()));
    assert_eq!(registry.current().theme_name(), "ocean");
}

#[test]
fn custom_theme_round_trip_is_lossless() {
    let registry = ThemeRegistry::with_defaults();
    let baseline = registry.activate("gotham").unwrap();

    registry
        .add_theme_from_hex(
            "corporate",
            &[
                ("background", "#FAFAFA"),
                ("black", "#101010"),
                ("blue", "#0B5FA5"),
                ("cyan", "#0B8A8F"),
                ("foreground", "#222222"),
                ("green", "#2E7D32"),
                ("magenta", "#8E24AA"),
                ("red", "#C62828"),
                ("white", "#FDFDFD"),
                ("yellow", "#F9A825"),
            ],
        )
        .unwrap();

    let corporate = registry.activate("corporate").unwrap();
    assert_eq!(corporate.color(ColorRole::Blue).rgb(), Rgb::new(0x0B, 0x5F, 0xA5));

    // Going back to the built-in restores it exactly.
    let gotham = registry.activate("gotham").unwrap();
    assert_eq!(gotham.colors(), baseline.colors());

    // Custom names list after the built-ins.
    let names = registry.theme_names();
    assert_eq!(&names[..10], &BUILTIN_THEME_NAMES);
    assert_eq!(names.last().map(String::as_str), Some("corporate"));
}

#[test]
fn snapshots_keep_rendering_through_a_switch() {
    let registry = ThemeRegistry::with_defaults();
    let light = registry.current();
    let mut ordinal = light.ordinal::<&str>();
    let first = ordinal.get("series-1").unwrap();

    registry.activate("dark").unwrap();

    // The old snapshot and scales built from it are unaffected.
    assert_eq!(ordinal.get("series-1"), Some(first));
    assert_eq!(light.theme_name(), "light");
    assert_eq!(first, light.category()[0]);
}

#[test]
fn palettes_and_fades_work_through_registry_handles() {
    let registry = ThemeRegistry::with_defaults();
    let set = registry.activate("dark").unwrap();

    let palette = set.category();
    assert_eq!(palette.len(), 25);
    assert_eq!(palette[2], set.color(ColorRole::Blue).rgb());

    let blue = set.color(ColorRole::Blue);
    assert_eq!(blue.fade(50), blue.rgb());
    assert_eq!(blue.fade(100), blue.fade(99));

    let main = set.category_main();
    assert_eq!(main.len(), 7);
    assert_eq!(main[0].name(), "blue");
}

#[test]
fn string_resolution_follows_the_activated_theme() {
    let registry = ThemeRegistry::with_defaults();

    let light = registry.current();
    assert_eq!(light.resolve_str("blue").unwrap(), Rgb::new(0x87, 0xAF, 0xDF));

    let dark = registry.activate("dark").unwrap();
    assert_eq!(dark.resolve_str("blue").unwrap(), Rgb::new(0x5F, 0x81, 0x9D));
    assert_eq!(dark.resolve_str("#123456").unwrap(), Rgb::new(0x12, 0x34, 0x56));

    let mixed = dark.resolve_strs(&["red", "#00FF00", "yellow"]).unwrap();
    assert_eq!(
        mixed,
        vec![
            Rgb::new(0xA5, 0x42, 0x42),
            Rgb::new(0x00, 0xFF, 0x00),
            Rgb::new(0xDE, 0x93, 0x5F)
        ]
    );
}

#[test]
fn sets_built_from_tables_match_registry_output() {
    let registry = ThemeRegistry::with_defaults();
    let via_registry = registry.activate("sweetlove").unwrap();
    let table = registry.table("sweetlove").unwrap();
    let direct = ActiveColorSet::from_table("sweetlove", &table);
    assert_eq!(*via_registry, direct);
}
