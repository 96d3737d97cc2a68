//! Editing the configuration one field at a time.

use grid_paper::config::{Configuration, Edit};
use grid_paper::contrast::Foreground;
use grid_paper::pagesize::{self, Preset};
use grid_paper::{GridError, In, Pattern};
use pretty_assertions::assert_eq;

#[test]
fn default_is_a4_with_a_fifth_inch_grid() {
    let config = Configuration::default();
    let paper = config.layout.paper;
    let grid = config.layout.grid;

    assert_eq!(paper.preset, Preset::A4);
    assert_eq!((paper.width, paper.height), pagesize::A4);
    assert!(paper.dimensions_locked);
    assert_eq!((grid.margin, grid.spacing), (In(0.2), In(0.2)));
    assert_eq!((grid.count_x, grid.count_y), (56, 39));
    assert_eq!(config.colour, "#646464");
    assert_eq!(config.pattern, Pattern::Grid);
    assert_eq!(config.page_count, 2);
}

#[test]
fn locked_dimensions_refuse_edits() {
    let mut config = Configuration::default();
    let before = config.clone();

    assert!(matches!(
        config.apply(Edit::Width(In(10.0))),
        Err(GridError::DimensionsLocked)
    ));
    assert!(matches!(
        config.apply(Edit::Height(In(10.0))),
        Err(GridError::DimensionsLocked)
    ));
    assert_eq!(config, before);
}

#[test]
fn custom_paper_accepts_dimension_edits() {
    let mut config = Configuration::default();
    config.apply(Edit::Paper(Preset::Custom)).unwrap();
    assert_eq!(
        (config.layout.paper.width, config.layout.paper.height),
        pagesize::A4
    );

    config.apply(Edit::Width(In(6.0))).unwrap();
    config.apply(Edit::Height(In(4.0))).unwrap();
    config.apply(Edit::Margin(In(0.5))).unwrap();
    config.apply(Edit::Spacing(In(0.25))).unwrap();

    assert_eq!(config.layout.grid.count_x, 20);
    assert_eq!(config.layout.grid.count_y, 12);

    // and locking again restores the table values
    config.apply(Edit::Paper(Preset::Letter)).unwrap();
    assert_eq!(
        (config.layout.paper.width, config.layout.paper.height),
        pagesize::LETTER
    );
    assert!(config.layout.paper.dimensions_locked);
}

#[test]
fn failed_edit_leaves_configuration_untouched() {
    let mut config = Configuration::default();
    let before = config.clone();

    assert!(matches!(
        config.apply(Edit::CountX(0)),
        Err(GridError::InvalidSpacing)
    ));
    assert!(matches!(
        config.apply(Edit::Spacing(In(0.0))),
        Err(GridError::InvalidSpacing)
    ));
    assert!(matches!(
        config.apply(Edit::Margin(In(-1.0))),
        Err(GridError::InvalidNumericInput("margin"))
    ));
    assert!(matches!(
        config.apply(Edit::Colour("red".into())),
        Err(GridError::InvalidColorFormat(_))
    ));
    assert!(matches!(
        config.apply(Edit::PageCount(0)),
        Err(GridError::InvalidPageCount(0))
    ));
    assert_eq!(config, before);
}

#[test]
fn count_edit_moves_the_other_axis_too() {
    let mut config = Configuration::default();
    config.apply(Edit::Paper(Preset::Letter)).unwrap();
    config.apply(Edit::Margin(In(0.5))).unwrap();
    config.apply(Edit::CountY(30)).unwrap();

    // 7.5 / 30 = 0.25
    assert_eq!(config.layout.grid.spacing, In(0.25));
    assert_eq!(config.layout.grid.count_x, 40);
    assert_eq!(config.layout.grid.count_y, 30);
}

#[test]
fn form_fields_parse_into_edits() {
    assert_eq!(Edit::parse("paper", "Tabloid").unwrap(), Edit::Paper(Preset::Tabloid));
    assert_eq!(Edit::parse("d", " 0.125 ").unwrap(), Edit::Spacing(In(0.125)));
    assert_eq!(Edit::parse("num_x", "12").unwrap(), Edit::CountX(12));
    assert_eq!(Edit::parse("type", "Dot").unwrap(), Edit::Pattern(Pattern::Dot));
    assert_eq!(Edit::parse("num_pages", "5").unwrap(), Edit::PageCount(5));
    assert_eq!(
        Edit::parse("color", "#00FF00").unwrap(),
        Edit::Colour("#00FF00".into())
    );

    assert!(matches!(
        Edit::parse("margin", "wide"),
        Err(GridError::InvalidNumericInput("margin"))
    ));
    assert!(matches!(
        Edit::parse("num_y", "1.5"),
        Err(GridError::InvalidNumericInput("num_y"))
    ));
    assert!(matches!(
        Edit::parse("bleed", "1"),
        Err(GridError::UnknownField(_))
    ));
    assert!(matches!(
        Edit::parse("paper", "B5"),
        Err(GridError::UnknownPreset(_))
    ));
}

#[test]
fn apply_field_drives_the_whole_form() {
    let mut config = Configuration::default();
    for (name, value) in [
        ("paper", "Custom"),
        ("width", "8.5"),
        ("height", "11"),
        ("margin", "0.5"),
        ("d", "0.5"),
        ("color", "#FFCC00"),
        ("type", "Dot"),
        ("num_pages", "3"),
    ] {
        config.apply_field(name, value).unwrap();
    }

    assert_eq!((config.layout.grid.count_x, config.layout.grid.count_y), (15, 20));
    assert_eq!(config.colour, "#ffcc00");
    assert_eq!(config.swatch().unwrap().foreground, Foreground::Black);

    let request = config.request().unwrap();
    assert_eq!(request.pattern(), Pattern::Dot);
    assert_eq!(request.page_count(), 3);
}

#[test]
fn json_round_trip_resolves_stale_counts() {
    let mut config = Configuration::default();
    config.apply(Edit::Pattern(Pattern::Dot)).unwrap();
    let json = config.to_json().unwrap();
    assert_eq!(Configuration::from_json(&json).unwrap(), config);

    let stale = json.replace("\"count_x\": 56", "\"count_x\": 3");
    assert_ne!(stale, json);
    assert_eq!(Configuration::from_json(&stale).unwrap(), config);
}

#[test]
fn json_with_bad_values_is_rejected() {
    let json = Configuration::default().to_json().unwrap();

    let bad_colour = json.replace("#646464", "#6464");
    assert!(matches!(
        Configuration::from_json(&bad_colour),
        Err(GridError::InvalidColorFormat(_))
    ));

    let no_pages = json.replace("\"page_count\": 2", "\"page_count\": 0");
    assert!(matches!(
        Configuration::from_json(&no_pages),
        Err(GridError::InvalidPageCount(0))
    ));

    assert!(matches!(
        Configuration::from_json("{"),
        Err(GridError::Config(_))
    ));
}
