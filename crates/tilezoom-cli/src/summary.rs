use console::Style;
use tilezoom_core::{PyramidConfig, TilePyramid};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
        }
    }
}

pub fn print_pyramid_summary(config: &PyramidConfig, pyramid: &TilePyramid) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Tile Pyramid"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{}x{} px", config.width, config.height))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Tile size"),
        s.value.apply_to(format!(
            "{}x{} px",
            pyramid.x_tile_size(),
            pyramid.y_tile_size()
        ))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Policy"),
        s.method.apply_to(config.policy)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Naming"),
        s.method.apply_to(config.naming)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Levels"),
        s.value.apply_to(pyramid.level_count())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Total tiles"),
        s.value.apply_to(pyramid.total_tiles())
    );

    println!();
    println!(
        "  {}",
        s.header
            .apply_to(format!("  {:<6}{:>12}{:>12}{:>10}", "Level", "Width", "Height", "Tiles"))
    );
    for lvl in pyramid.levels() {
        println!(
            "    {:<6}{:>12}{:>12}{:>10}",
            lvl.index,
            lvl.width,
            lvl.height,
            format!("{}x{}", lvl.x_tiles, lvl.y_tiles)
        );
    }
    println!();
}
