/// Built-in colour maps, keyed by lower case name.
pub const PRESETS: &[(&str, &str)] = &[
    // heatmaps
    (
        "jet",
        concat!(
            "BlackToDarkBlueToBlueToCyanBlueBlueBlueToCyanBlueTo",
            "CyanCyanCyanBlueToCyanCyanCyanYellowToCyanYellowTo",
            "CyanYellowYellowYellowToYellowToOrangeToRedOrangeToRed",
        ),
    ),
    (
        "transparentjet",
        concat!(
            "TransparentBlackToTranslucentTranslucentDarkBlueTo",
            "TranslucentBlueToTranslucentCyanTranslucentBlueBlueBlueTo",
            "CyanBlueToCyanCyanCyanBlueToCyanCyanCyanYellowToCyanYellow",
            "ToCyanYellowYellowYellowToYellowToOrangeToRedOrangeToRed",
        ),
    ),
    (
        "radiation",
        "BlackToRedToYellowToWhiteToWhiteWhiteWhiteLightLightGrey",
    ),
    (
        "transparentradiation",
        "TransparentBlackToTranslucentRedToYellowToWhiteToWhiteWhiteWhiteLightLightGrey",
    ),
    // tracks
    ("default", "WhiteToBlack"),
    ("citrus", "BlackToDarkDarkGreyToDarkGreenToYellow"),
    (
        "ice",
        "BlackToDarkBlueToDarkBlueLightDarkCyanToLightBlueDarkCyanToWhite",
    ),
    ("neon", "BlackToPurpleToPinkToBlackToPink"),
    ("sunburst", "DarkDarkGrayToOrangeToBlackToOrangeToYellow"),
    ("demon", "WhiteToRedToBlackToWhite"),
    ("chalk", "BlackToWhite"),
    (
        "lightning",
        "DarkPurpleToLightMagentaToLightGrayToWhiteToWhite",
    ),
    ("hazard", "WhiteToBlackToYellow"),
    ("razer", "BlackToDarkGreyToBlackToDarkGreenToGreenToBlack"),
    (
        "sketch",
        "LightGreyToBlackToDarkPurpleToWhiteToLightGreyToBlackToBlue",
    ),
    ("grape", "WhiteToBlackToMagenta"),
    ("spiderman", "RedToBlackToWhite"),
    ("shroud", "GreyToBlackToLightPurple"),
    ("blackwidow", "PurpleToLightCyanWhiteToPurpleToBlack"),
    // keyboard
    ("aqua", "WhiteToWhiteWhiteLightCyanSkyToSkyToSkyBlue"),
    (
        "fire",
        concat!(
            "WhiteToWhiteWhiteYellowLightOrangeToWhiteYellowLightOrangeToWhiteYellowOrangeTo",
            "WhiteLightYellowRedLightRedOrangeToYellowLightYellowRedDarkOrangeToRedDarkRedDarkRed",
        ),
    ),
    (
        "fire2",
        concat!(
            "WhiteToWhiteWhiteYellowLightOrangeToWhiteYellowLightOrangeToWhiteYellow",
            "OrangeToLightRedOrangeOrangeToLightYellowRedRedDarkOrangeToDarkRed",
        ),
    ),
    (
        "fire3",
        concat!(
            "WhiteToWhiteWhiteYellowLightOrangeToWhiteYellowLightOrangeToWhiteYellow",
            "OrangeToLightRedOrangeOrangeToLightYellowRedDarkOrangeToRedDarkRedDarkRed",
        ),
    ),
    ("ivy", "WhiteToBlueGreenGreenToBlack"),
    (
        "matrix",
        concat!(
            "BlackBlackBlackBlackDarkGreenDarkDarkGreyToBlackBlack",
            "BlackBlackBlackGreyGreenToBlackBlackDarkGreyGreenToGreen",
        ),
    ),
    (
        "nature",
        concat!(
            "WhiteToWhiteLightYellowLightGreenLightLightGrey",
            "ToLightYellowGreenLightGreenToDarkGreen",
        ),
    ),
    // linear keyboard variants
    (
        "linearfire",
        concat!(
            "WhiteToYellowLightOrangeToLightYellowOrangeRedDarkRedToDarkOrangeOrangeRed",
            "ToBlackBlackOrangeRedDarkRedToRedDarkRedDarkRed",
        ),
    ),
    (
        "linearmatrix",
        "BlackBlackBlackBlackBlackDarkGreenDarkDarkGreyToGreen",
    ),
    ("linearnature", "WhiteToDarkGreen"),
];

pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, descriptor)| *descriptor)
}
