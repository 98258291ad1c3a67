use swatch_picker::{
    make_image::{render_pager, save_palette_png},
    preset::DEFAULT_COLOR_COUNT,
    Color, ColorFactory, ColorPickerDialog, ColorSelection, CombinedFactory, DialogState, DialogTitle, Palette,
    PickerConfig,
};

#[test]
fn test_default_picker() {
    let mut picked = Vec::new();
    let mut dialog = ColorPickerDialog::from_config(&PickerConfig::default(), |s: &ColorSelection| picked.push(s.clone()))
        .unwrap();

    assert_eq!(dialog.title(), DialogTitle::Text("Pick a color"));
    assert_eq!(dialog.pager().len(), 10);
    assert_eq!(dialog.pager().current(), 5);
    assert_eq!(dialog.pager().current_palette().unwrap().name(), "Green");

    assert!(dialog.pager_mut().previous());
    let metrics = dialog.measure_current(400, 480, 8).unwrap().unwrap();
    let rect = metrics.swatch_rect(7);
    let selection = dialog.tap_at(rect.x + 1, rect.y + 1, &metrics).unwrap();

    assert_eq!(selection.palette_name, "Yellow");
    assert_eq!(selection.color, swatch_picker::factory::YELLOW.color(7, DEFAULT_COLOR_COUNT));
    assert!(dialog.is_dismissed());
    assert!(dialog.tap_at(rect.x + 1, rect.y + 1, &metrics).is_none());

    drop(dialog);
    assert_eq!(picked.len(), 1);
}

#[test]
fn test_save_and_restore() {
    let config = PickerConfig::from_json(
        r#"{ "palettes": [
            { "name": "Warm", "presets": ["red", "orange", "yellow"], "count": 12 },
            { "name": "Named", "presets": ["pastel"], "count": 3, "color_names": ["one", "two", "three"] }
        ] }"#,
    )
    .unwrap();
    let mut dialog = ColorPickerDialog::from_config(&config, |_: &ColorSelection| {}).unwrap();
    dialog.set_title("Label color");

    let json = dialog.save_state().to_json().unwrap();
    let mut restored = ColorPickerDialog::restore(DialogState::from_json(&json).unwrap(), |_: &ColorSelection| {});

    assert_eq!(restored.title(), DialogTitle::Text("Label color"));
    assert_eq!(restored.pager().pages(), dialog.pager().pages());

    let selection = restored.select(1, 1).unwrap();
    assert_eq!(selection.color_name.as_deref(), Some("two"));
    assert_eq!(selection.palette_name, "Named");
}

#[test]
fn test_combined_palette_matches_its_parts() {
    let combined = CombinedFactory::new(vec![
        Box::new(swatch_picker::factory::GREEN),
        Box::new(swatch_picker::factory::RAINBOW),
    ])
    .unwrap();
    let palette = Palette::new("Mixed", &combined, 16);

    for i in 0..8 {
        assert_eq!(palette.color_at(i), swatch_picker::factory::GREEN.color(i, 8));
        assert_eq!(palette.color_at(i + 8), swatch_picker::factory::RAINBOW.color(i, 8));
    }
}

#[test]
fn test_palette_png() {
    let palette = PickerConfig::default().palettes[2].build().unwrap();

    std::fs::create_dir_all("tests/generated_pngs").unwrap();
    let path = "tests/generated_pngs/red_palette.png";
    save_palette_png(&palette, 128, 6, path).unwrap();

    let img = image::open(path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (128, 128));
    // 4 columns of 27px, 6px apart, centered by 1px
    assert_eq!(Color::from(*img.get_pixel(2, 2)), palette.color_at(0));
    assert_eq!(Color::from(*img.get_pixel(125, 125)), palette.color_at(15));
    assert_eq!(Color::from(*img.get_pixel(0, 0)), Color::TRANSPARENT);
}

#[test]
fn test_pager_sheet() {
    let config = PickerConfig::default();
    let dialog = ColorPickerDialog::from_config(&config, |_: &ColorSelection| {}).unwrap();
    let img = render_pager(dialog.pager(), 64, 2).unwrap();

    std::fs::create_dir_all("tests/generated_pngs").unwrap();
    img.save_with_format("tests/generated_pngs/default_pager.png", image::ImageFormat::Png)
        .unwrap();

    assert_eq!(img.dimensions(), (640, 64));
    for (page, palette) in dialog.pager().pages().iter().enumerate() {
        let x = page as u32 * 64;
        assert_eq!(Color::from(*img.get_pixel(x + 1, 1)), palette.color_at(0), "page {page}");
    }
}
