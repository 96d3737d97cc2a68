use grid_paper::config::{Configuration, Edit};
use grid_paper::draw::{self, DrawParams};
use grid_paper::pagesize::Preset;
use grid_paper::In;

fn main() {
    // start from the defaults: A4, a 0.2" grid in a mid grey, 2 pages
    let mut config = Configuration::default();

    // switch to US Letter with half-inch margins, then ask for 40 columns;
    // the spacing is worked out from the column count
    config.apply(Edit::Paper(Preset::Letter)).unwrap();
    config.apply(Edit::Margin(In(0.5))).unwrap();
    config.apply(Edit::CountX(40)).unwrap();

    let grid = config.layout.grid;
    println!(
        "{} × {} squares of {}",
        grid.count_x, grid.count_y, grid.spacing
    );

    // the swatch tells a UI which label colour is readable on the grid colour
    let swatch = config.swatch().unwrap();
    println!("label: {}, border: {}", swatch.foreground, swatch.border_css());

    // draw directly so the document can be stamped with today's date
    let request = config.request().unwrap();
    let params = DrawParams {
        created: Some(chrono::Local::now().fixed_offset()),
        ..DrawParams::from(request)
    };

    let out = std::fs::File::create("graph-paper.pdf").unwrap();
    draw::grid(out, &params).unwrap();
}
