use grblpanel_dialog::{CategoryId, DialogError, Region, ScrollArea, SettingsDialog};
use grblpanel_settings::DialogSettings;

fn region(dialog: &SettingsDialog, id: CategoryId) -> Region {
    dialog
        .scroll_area()
        .region(id.identifier())
        .expect("category region")
}

fn shown_dialog() -> SettingsDialog {
    let mut dialog = SettingsDialog::new(&DialogSettings::default());
    dialog.open().expect("open");
    dialog
}

#[test]
fn test_categories_listed_in_panel_order() {
    let dialog = shown_dialog();
    let categories = dialog.categories();
    assert_eq!(categories.len(), CategoryId::ALL.len());

    let tops: Vec<i32> = categories
        .iter()
        .map(|category| region(&dialog, category.id).top)
        .collect();
    assert!(tops.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(dialog.selected_index(), 0);
    assert_eq!(dialog.scroll_offset(), 0);
}

#[test]
fn test_first_show_sets_minimum_width() {
    let mut dialog = SettingsDialog::new(&DialogSettings::default());
    assert_eq!(dialog.scroll_area().minimum_width(), None);
    dialog.open().expect("open");
    assert!(dialog.scroll_area().minimum_width().is_some());
}

#[test]
fn test_scroll_before_show_is_ignored() {
    let mut dialog = SettingsDialog::new(&DialogSettings::default());
    let sender = region(&dialog, CategoryId::Sender);

    assert!(!dialog.scroll_to(sender.top));
    assert_eq!(dialog.selected_index(), 0);
}

#[test]
fn test_aligned_scroll_selects_category() {
    let mut dialog = shown_dialog();
    let sender = region(&dialog, CategoryId::Sender);

    assert!(dialog.scroll_to(sender.top));
    assert_eq!(dialog.selected_index(), 1);
    assert_eq!(
        dialog.selected_category().map(|c| c.title.as_str()),
        Some("Sender")
    );
}

#[test]
fn test_unaligned_scroll_keeps_selection() {
    let mut dialog = shown_dialog();
    let machine = region(&dialog, CategoryId::Machine);

    dialog.scroll_to(machine.top);
    assert_eq!(dialog.selected_index(), 2);

    assert!(!dialog.scroll_to(machine.top + 7));
    assert_eq!(dialog.selected_index(), 2);
}

#[test]
fn test_select_scrolls_region_into_view() {
    let mut dialog = shown_dialog();

    let selected = dialog.select_category(3).expect("select");
    assert_eq!(selected, 3);

    let control = region(&dialog, CategoryId::Control);
    let offset = dialog.scroll_offset();
    let viewport = dialog.scroll_area().viewport_height();
    assert!(offset > 0);
    assert!(control.top >= offset);
    assert!(control.bottom() <= offset + viewport);
}

#[test]
fn test_select_last_category_clamps_to_end() {
    let mut dialog = shown_dialog();
    dialog.select_category(CategoryId::ALL.len() - 1).expect("select");
    assert_eq!(dialog.scroll_offset(), dialog.scroll_area().max_offset());
}

#[test]
fn test_select_unknown_category() {
    let mut dialog = shown_dialog();
    assert!(matches!(
        dialog.select_category(99),
        Err(DialogError::UnknownCategory { index: 99, .. })
    ));
}

#[test]
fn test_resize_reevaluates_selection() {
    let mut dialog = shown_dialog();
    let max = dialog.scroll_area().max_offset();
    dialog.scroll_to(max);
    let before = dialog.selected_index();

    // Growing the viewport pulls the offset back onto the first category
    let changed = dialog.resize_viewport(dialog.scroll_area().content_height());
    assert_eq!(dialog.scroll_offset(), 0);
    assert_eq!(dialog.selected_index(), 0);
    assert_eq!(changed, before != 0);
}

#[test]
fn test_hotkeys_grow_the_last_group() {
    let mut dialog = shown_dialog();
    let before = region(&dialog, CategoryId::Hotkeys).height;

    dialog.set_hotkeys(&["F1:Help", "F2:Rename", "F3:Find", "F4:Close", "F5:Send", "F6:Next"]);
    let after = region(&dialog, CategoryId::Hotkeys).height;
    assert_eq!(after - before, DialogSettings::default().row_height);
}
