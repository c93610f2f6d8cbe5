use colourmap::{
    parse, Colour, ColourFile, ColourMapError, ColourMapRegistry, GradientCache, PRESETS,
};

const COLOURS: &str = "
colour.Teal=#008080
colour.Ember=#ff4000cc
map.Sea.colour=DarkBlueToTealToWhite
map.Sea.colour.Alt.night=BlackToDarkTeal
map.Sea.tracks=true
map.Fire.colour=TranslucentEmberToEmberToYellow
map.Unset.keyboard=true
";

fn registry() -> ColourMapRegistry {
    ColourMapRegistry::from_colour_file(&ColourFile::parse(COLOURS).unwrap())
}

#[test]
fn every_preset_resolves() {
    let registry = ColourMapRegistry::new();
    for (name, _) in PRESETS {
        let gradient = registry
            .resolve(name)
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(gradient.len() >= 2, "{name}");
    }
}

#[test]
fn user_colours_and_maps() {
    let registry = registry();

    let sea = registry.resolve("sea").unwrap();
    let anchors: Vec<Colour> = sea.anchors().iter().map(|a| a.truncate()).collect();
    assert_eq!(
        anchors,
        vec![
            Colour::rgb(0, 0, 127),
            Colour::rgb(0, 128, 128),
            Colour::white()
        ]
    );

    let night = registry.resolve("NightAltSea").unwrap();
    assert_eq!(night.anchors()[1].truncate(), Colour::rgb(0, 64, 64));

    let fire = registry.resolve("fire").unwrap();
    assert_eq!(fire.len(), 3, "user map shadows the built-in fire");
    assert_eq!(fire.first().truncate(), Colour::rgba(255, 64, 0, 102));
}

#[test]
fn user_colours_work_in_raw_descriptors() {
    let registry = registry();
    assert_eq!(registry.resolve("TealToEmber").unwrap().len(), 2);
    assert!(matches!(
        ColourMapRegistry::new().resolve("TealToEmber"),
        Err(ColourMapError::UnknownPreset(_))
    ));
}

#[test]
fn maps_without_descriptor_are_not_registered() {
    let registry = registry();
    assert!(registry.descriptor("unset").is_none());
    assert!(registry.resolve("unset").is_err());
}

#[test]
fn heatmap_lookup() {
    let gradient = ColourMapRegistry::new().resolve("jet").unwrap();
    let anchors = gradient.len();
    let cache = GradientCache::builder(gradient, 0.0, 100.0)
        .background(Some(Colour::rgba(0, 0, 0, 0)))
        .build();

    assert_eq!(cache.step_count(), 255 * anchors);
    assert_eq!(cache.lookup(0.0), Colour::rgba(0, 0, 0, 0), "background");
    assert_eq!(cache.lookup(100.0), Colour::rgb(255, 0, 0), "hottest");
    assert_eq!(cache.lookup(250.0), Colour::rgb(255, 0, 0), "clamped");
    assert_eq!(cache.lookup(0.001), Colour::black(), "coldest");
}

#[test]
fn looped_tracks() {
    let gradient = parse("RedToGreenToBlueToRed").unwrap();
    let cache = GradientCache::builder(gradient, 0.0, 1020.0)
        .looped(true)
        .build();
    assert_eq!(cache.step_size(), 1.0);
    assert_eq!(cache.lookup(340.0), Colour::rgb(0, 255, 0));
    assert_eq!(cache.lookup(1020.0 + 340.0), Colour::rgb(0, 255, 0));
    assert_eq!(cache.lookup(1020.0), Colour::rgb(255, 0, 0));
}
