//! Layout resolution: counts, spacings and paper presets kept consistent.

use grid_paper::layout::{
    forward_count, resolve, reverse_spacing, FieldId, GridSpec, Layout, PaperSpec,
};
use grid_paper::pagesize::{self, Preset};
use grid_paper::{GridError, In};
use pretty_assertions::assert_eq;

fn letter_portrait(margin: f64, spacing: f64) -> Layout {
    Layout {
        paper: PaperSpec::custom(In(8.5), In(11.0)),
        grid: GridSpec {
            margin: In(margin),
            spacing: In(spacing),
            count_x: 0,
            count_y: 0,
        },
    }
}

#[test]
fn forward_derivation_floors_with_tolerance() {
    let layout = resolve(FieldId::Spacing, letter_portrait(0.5, 0.5)).unwrap();
    assert_eq!(layout.grid.count_x, 15);
    assert_eq!(layout.grid.count_y, 20);
    assert_eq!(layout.grid.spacing, In(0.5));
}

#[test]
fn every_forward_field_rederives_both_counts() {
    for field in [
        FieldId::Width,
        FieldId::Height,
        FieldId::Margin,
        FieldId::Spacing,
    ] {
        let layout = resolve(field, letter_portrait(0.5, 0.5)).unwrap();
        assert_eq!((layout.grid.count_x, layout.grid.count_y), (15, 20), "{field}");
    }
}

#[test]
fn editing_count_x_derives_spacing_from_width() {
    let mut layout = letter_portrait(0.5, 0.25);
    layout.grid.count_x = 15;
    let layout = resolve(FieldId::CountX, layout).unwrap();

    assert_eq!(layout.grid.spacing, In(0.5));
    assert_eq!(layout.grid.count_x, 15);
    assert_eq!(layout.grid.count_y, 20);
}

#[test]
fn editing_count_y_derives_spacing_from_height() {
    let mut layout = letter_portrait(0.5, 0.5);
    layout.grid.count_y = 40;
    let layout = resolve(FieldId::CountY, layout).unwrap();

    assert_eq!(layout.grid.spacing, In(0.25));
    assert_eq!(layout.grid.count_x, 30);
    assert_eq!(layout.grid.count_y, 40);
}

#[test]
fn derived_spacing_is_rounded_to_five_places() {
    let mut layout = Layout {
        paper: PaperSpec::preset(Preset::A4),
        grid: GridSpec {
            margin: In(0.2),
            spacing: In(0.2),
            count_x: 28,
            count_y: 0,
        },
    };
    layout = resolve(FieldId::CountX, layout).unwrap();

    // 11.3 / 28 = 0.4035714…
    assert_eq!(layout.grid.spacing, In(0.40357));
    assert_eq!(layout.grid.count_x, 28);
    assert_eq!(layout.grid.count_y, 19);
}

#[test]
fn count_may_drift_from_what_was_typed() {
    // 7.5 / 196 = 0.0382653… rounds up to 0.03827, which only fits 195 times
    let mut layout = letter_portrait(0.5, 0.5);
    layout.grid.count_x = 196;
    let layout = resolve(FieldId::CountX, layout).unwrap();
    assert_eq!(layout.grid.spacing, In(0.03827));
    assert_eq!(layout.grid.count_x, 195);
}

#[test]
fn forward_then_reverse_reproduces_spacing() {
    let cases = [
        (8.5, 11.0, 0.5, 0.5),
        (11.0, 8.5, 0.25, 0.25),
        (17.0, 11.0, 1.0, 0.125),
        (16.5, 11.7, 0.25, 0.2),
    ];
    for (width, height, margin, spacing) in cases {
        let layout = Layout {
            paper: PaperSpec::custom(In(width), In(height)),
            grid: GridSpec {
                margin: In(margin),
                spacing: In(spacing),
                count_x: 0,
                count_y: 0,
            },
        };
        let forward = resolve(FieldId::Spacing, layout).unwrap();
        let reverse = resolve(FieldId::CountX, forward).unwrap();

        assert!(
            (reverse.grid.spacing.0 - spacing).abs() <= 0.5e-5,
            "{width}×{height} margin {margin}: {} != {spacing}",
            reverse.grid.spacing
        );
        assert_eq!(reverse.grid.count_x, forward.grid.count_x);
        assert_eq!(reverse.grid.count_y, forward.grid.count_y);
    }
}

#[test]
fn zero_count_is_an_invalid_spacing() {
    let mut layout = letter_portrait(0.5, 0.5);
    layout.grid.count_x = 0;
    assert!(matches!(
        resolve(FieldId::CountX, layout),
        Err(GridError::InvalidSpacing)
    ));
    assert!(matches!(
        reverse_spacing(In(11.0), In(0.5), 0),
        Err(GridError::InvalidSpacing)
    ));
}

#[test]
fn non_positive_spacing_is_rejected() {
    for spacing in [0.0, -0.25, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            resolve(FieldId::Spacing, letter_portrait(0.5, spacing)),
            Err(GridError::InvalidSpacing)
        ));
    }
    assert!(matches!(
        forward_count(In(8.5), In(0.5), In(0.0)),
        Err(GridError::InvalidSpacing)
    ));
}

#[test]
fn negative_count_cannot_produce_a_spacing() {
    let mut layout = letter_portrait(0.5, 0.5);
    layout.grid.count_y = -3;
    assert!(matches!(
        resolve(FieldId::CountY, layout),
        Err(GridError::InvalidSpacing)
    ));
}

#[test]
fn oversized_margin_yields_an_empty_grid() {
    let layout = resolve(FieldId::Margin, letter_portrait(4.25, 0.5)).unwrap();
    assert_eq!(layout.grid.count_x, 0);
    assert_eq!(layout.grid.count_y, 5);

    let layout = resolve(FieldId::Margin, letter_portrait(5.0, 0.5)).unwrap();
    assert_eq!(layout.grid.count_x, -3);
    assert_eq!(layout.grid.count_y, 2);
}

#[test]
fn bad_lengths_are_invalid_input() {
    assert!(matches!(
        resolve(FieldId::Margin, letter_portrait(-0.1, 0.5)),
        Err(GridError::InvalidNumericInput("margin"))
    ));

    let mut layout = letter_portrait(0.5, 0.5);
    layout.paper.width = In(f64::NAN);
    assert!(matches!(
        resolve(FieldId::Width, layout),
        Err(GridError::InvalidNumericInput("width"))
    ));

    let mut layout = letter_portrait(0.5, 0.5);
    layout.paper.height = In(0.0);
    assert!(matches!(
        resolve(FieldId::Height, layout),
        Err(GridError::InvalidNumericInput("height"))
    ));
}

#[test]
fn selecting_a_preset_locks_its_dimensions() {
    for preset in [Preset::A4, Preset::A3, Preset::Letter, Preset::Tabloid] {
        let mut layout = letter_portrait(0.5, 0.5);
        layout.paper.preset = preset;
        let layout = resolve(FieldId::Paper, layout).unwrap();

        let (width, height) = preset.dimensions().unwrap();
        assert_eq!(layout.paper.width, width);
        assert_eq!(layout.paper.height, height);
        assert!(layout.paper.dimensions_locked);
    }
}

#[test]
fn selecting_custom_unlocks_without_changing_dimensions() {
    let mut layout = Layout {
        paper: PaperSpec::preset(Preset::Tabloid),
        grid: GridSpec {
            margin: In(0.5),
            spacing: In(0.5),
            count_x: 0,
            count_y: 0,
        },
    };
    layout.paper.preset = Preset::Custom;
    let layout = resolve(FieldId::Paper, layout).unwrap();

    assert_eq!((layout.paper.width, layout.paper.height), pagesize::TABLOID);
    assert!(!layout.paper.dimensions_locked);
    assert_eq!((layout.grid.count_x, layout.grid.count_y), (32, 20));
}

#[test]
fn preset_change_rederives_counts() {
    let mut layout = letter_portrait(0.5, 0.5);
    layout.paper.preset = Preset::A3;
    let layout = resolve(FieldId::Paper, layout).unwrap();
    // (16.5 - 1) / 0.5 = 31, (11.7 - 1) / 0.5 = 21.4
    assert_eq!((layout.grid.count_x, layout.grid.count_y), (31, 21));
}

#[test]
fn spacing_too_small_to_count_is_rejected() {
    let result = resolve(FieldId::Spacing, letter_portrait(0.5, 1e-9));
    assert!(matches!(result, Err(GridError::InvalidSpacing)));

    // counts that fit in an i32 still resolve
    let layout = resolve(FieldId::Spacing, letter_portrait(0.5, 1e-8)).unwrap();
    assert_eq!(layout.grid.count_x, 750_000_000);
}
