//! Integration tests for sfw-core.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! the tree, layouts, routing, focus, registry and themes work together.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use sfw_core::prelude::*;
use sfw_core::testing::{Pilot, RecordingRenderer, StubAssets};
use sfw_core::theme::{Font, Texture};

fn gui() -> Gui {
    Gui::new(GuiConfig::default(), Theme::default())
}

fn counter(gui: &mut Gui, id: WidgetId) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    gui.set_callback(id, Callback::nullary(move || seen.set(seen.get() + 1)))
        .unwrap();
    count
}

fn snapshot(gui: &Gui) -> Vec<(WidgetId, Option<Offset>, Option<Size>)> {
    gui.tree()
        .walk_depth_first(gui.root())
        .into_iter()
        .map(|id| (id, gui.position_of(id), gui.size_of(id)))
        .collect()
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_form_rows_align_on_the_widest_label() {
    let mut gui = gui();
    let form = gui.add(gui.root(), Container::form()).unwrap();
    let name = gui.add_row(form, "Name", TextBox::new()).unwrap();
    let volume = gui.add_row(form, "Volume", Slider::new()).unwrap();

    // "Volume" is 36px of text plus 1px padding per side.
    assert_eq!(gui.position_of(name), Some(Offset::new(45, 0)));
    assert_eq!(gui.position_of(volume), Some(Offset::new(45, 23)));
    let label = gui.tree().prev_sibling(name).unwrap();
    assert_eq!(gui.position_of(label), Some(Offset::new(0, 1)));
    assert_eq!(gui.size_of(form), Some(Size::new(245, 39)));
}

#[test]
fn test_geometry_recompute_is_idempotent() {
    let mut gui = gui();
    let root = gui.root();
    let row = gui.add(root, Container::horizontal()).unwrap();
    gui.add(row, Button::new("One")).unwrap();
    gui.add(row, CheckBox::default()).unwrap();
    let form = gui.add(root, Container::form()).unwrap();
    gui.add_row(form, "Level", ProgressBar::new()).unwrap();
    gui.add(form, Label::new("trailing")).unwrap();

    let before = snapshot(&gui);
    gui.recompute_geometry(form).unwrap();
    gui.recompute_geometry(row).unwrap();
    gui.recompute_geometry(root).unwrap();
    assert_eq!(before, snapshot(&gui));
}

#[test]
fn test_resize_from_a_hook_relayouts_ancestors() {
    let mut gui = gui();
    let row = gui.add(gui.root(), Container::horizontal()).unwrap();
    let button = gui.add(row, Button::new("OK")).unwrap();
    let after = gui.add(row, Button::new("X")).unwrap();
    assert_eq!(gui.position_of(after), Some(Offset::new(23, 0)));

    gui.update::<Button, _>(button, |b, ctx| b.set_text(ctx, "OK!!"))
        .unwrap();
    assert_eq!(gui.size_of(button), Some(Size::new(28, 16)));
    assert_eq!(gui.position_of(after), Some(Offset::new(35, 0)));
    assert_eq!(gui.size_of(gui.root()), gui.size_of(row));
}

#[test]
fn test_update_with_the_wrong_type_fails() {
    let mut gui = gui();
    let button = gui.add(gui.root(), Button::new("OK")).unwrap();
    let err = gui.update::<Label, _>(button, |_, _| ()).unwrap_err();
    assert!(matches!(err, GuiError::WrongType { .. }));
}

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[test]
fn test_tab_skips_passive_and_disabled_widgets_and_wraps() {
    let mut pilot = Pilot::new();
    let gui = pilot.gui_mut();
    let root = gui.root();
    let a = gui.add(root, Button::new("a")).unwrap();
    gui.add(root, Label::new("label")).unwrap();
    gui.add(root, ProgressBar::new()).unwrap();
    let b = gui.add(root, CheckBox::default()).unwrap();
    let c = gui.add(root, Button::new("c")).unwrap();
    gui.set_enabled(c, false).unwrap();

    let mut order = Vec::new();
    for _ in 0..4 {
        pilot.tab();
        order.push(pilot.gui().focused().unwrap());
    }
    assert_eq!(order, vec![a, b, a, b]);
}

#[test]
fn test_at_most_one_widget_has_focus() {
    let mut pilot = Pilot::new();
    let gui = pilot.gui_mut();
    let root = gui.root();
    let ids: Vec<_> = (0..3)
        .map(|i| gui.add(root, Button::new(format!("b{i}"))).unwrap())
        .collect();

    pilot.tab();
    pilot.click_widget(ids[2]);
    pilot.shift_tab();
    let focused: Vec<_> = ids
        .iter()
        .filter(|&&id| pilot.gui().state_of(id) == Some(WidgetState::Focused))
        .collect();
    assert_eq!(focused, vec![&ids[1]]);
    assert_eq!(pilot.gui().focused(), Some(ids[1]));
}

#[test]
fn test_focus_stays_unique_when_tabbing_during_a_press() {
    let mut pilot = Pilot::new();
    let gui = pilot.gui_mut();
    let root = gui.root();
    let a = gui.add(root, Button::new("A")).unwrap();
    let b = gui.add(root, Button::new("B")).unwrap();
    let clicks = counter(pilot.gui_mut(), a);

    pilot.press(2, 2);
    pilot.tab();
    pilot.release(2, 2);

    let focused: Vec<_> = [a, b]
        .into_iter()
        .filter(|&id| pilot.gui().state_of(id) == Some(WidgetState::Focused))
        .collect();
    assert_eq!(focused, vec![b]);
    assert_eq!(pilot.gui().focused(), Some(b));
    assert_eq!(clicks.get(), 0);
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn test_options_box_select_bounds_and_clamp() {
    let mut gui = gui();
    let options = OptionsBox::new()
        .with_item("red", 0xff0000u32)
        .with_item("green", 0x00ff00u32)
        .with_item("blue", 0x0000ffu32);
    let id = gui.add(gui.root(), options).unwrap();
    let count = counter(&mut gui, id);

    let result = gui.update::<OptionsBox, _>(id, |o, ctx| o.select(ctx, 3)).unwrap();
    assert!(matches!(result, Err(GuiError::IndexOutOfRange { index: 3, len: 3 })));
    assert_eq!(gui.widget::<OptionsBox>(id).unwrap().current_index(), Some(0));

    for _ in 0..5 {
        gui.update::<OptionsBox, _>(id, |o, ctx| o.select_next(ctx)).unwrap();
    }
    let options = gui.widget::<OptionsBox>(id).unwrap();
    assert_eq!(options.current_index(), Some(2));
    assert_eq!(options.current_value::<u32>(), Some(&0x0000ff));
    // Two real changes; the clamped calls fire nothing.
    assert_eq!(count.get(), 2);
}

#[test]
fn test_options_box_arrow_keys_and_pointer() {
    let mut pilot = Pilot::new();
    let root = pilot.gui().root();
    let id = pilot
        .gui_mut()
        .add(root, OptionsBox::new().with_item("a", 1).with_item("b", 2))
        .unwrap();
    pilot.tab();
    pilot.press_key(Key::Right);
    assert_eq!(pilot.gui().widget::<OptionsBox>(id).unwrap().current_label(), Some("b"));
    pilot.press_key(Key::Enter);
    assert_eq!(pilot.gui().widget::<OptionsBox>(id).unwrap().current_label(), Some("b"));

    // Left third of the box selects the previous item.
    pilot.click(1, 8);
    assert_eq!(pilot.gui().widget::<OptionsBox>(id).unwrap().current_index(), Some(0));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_registry_round_trip_and_purge() {
    let mut gui = gui();
    let panel = gui.add_named(gui.root(), "panel", Container::vertical()).unwrap();
    let ok = gui.add_named(panel, "ok", Button::new("OK")).unwrap();

    assert_eq!(gui.lookup("ok"), Some(ok));
    assert_eq!(gui.find::<Button>("ok").unwrap().text(), "OK");
    assert!(gui.find::<Label>("ok").is_none());
    assert!(matches!(
        gui.register_name("ok", panel),
        Err(GuiError::DuplicateName(_))
    ));
    assert_eq!(gui.lookup("ok"), Some(ok));

    gui.remove(panel).unwrap();
    assert_eq!(gui.lookup("ok"), None);
    assert_eq!(gui.lookup("panel"), None);
    assert!(gui.names().is_empty());
}

#[test]
fn test_named_insert_into_detached_container_inserts_nothing() {
    let mut gui = gui();
    let loose = gui.create(Container::vertical());
    let before = gui.tree().len();
    let err = gui.add_named(loose, "x", Button::new("x")).unwrap_err();
    assert!(matches!(err, GuiError::Detached(_)));
    assert_eq!(gui.tree().len(), before);
    assert_eq!(gui.lookup("x"), None);

    // Once attached, the same call works.
    gui.attach(gui.root(), loose).unwrap();
    assert!(gui.add_named(loose, "x", Button::new("x")).is_ok());
}

#[test]
fn test_callbacks_can_find_widgets_by_name() {
    let mut gui = gui();
    let root = gui.root();
    gui.add_named(root, "status", Label::new("idle")).unwrap();
    let go = gui.add(root, Button::new("Go")).unwrap();
    gui.set_callback(
        go,
        Callback::widget(|gui, _| {
            if let Some(status) = gui.lookup("status") {
                gui.update::<Label, _>(status, |l, ctx| l.set_text(ctx, "running"))
                    .unwrap();
            }
        }),
    )
    .unwrap();

    gui.trigger_callback(go);
    assert_eq!(gui.find::<Label>("status").unwrap().text(), "running");
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[test]
fn test_checkbox_click_inside_toggles_once() {
    let mut pilot = Pilot::new();
    let root = pilot.gui().root();
    let id = pilot.gui_mut().add(root, CheckBox::default()).unwrap();
    let count = counter(pilot.gui_mut(), id);

    pilot.click(4, 4);
    assert_eq!(count.get(), 1);
    assert!(pilot.gui().widget::<CheckBox>(id).unwrap().is_checked());

    // Press inside, release outside: nothing.
    pilot.press(4, 4);
    pilot.hover(300, 300);
    pilot.release(300, 300);
    assert_eq!(count.get(), 1);
    assert!(pilot.gui().widget::<CheckBox>(id).unwrap().is_checked());
    assert_eq!(pilot.gui().state_of(id), Some(WidgetState::Default));

    // Space on the focused box toggles back.
    pilot.tab();
    pilot.press_key(Key::Char(' '));
    assert_eq!(count.get(), 2);
    assert!(!pilot.gui().widget::<CheckBox>(id).unwrap().is_checked());
}

#[test]
fn test_text_box_callback_on_enter() {
    let mut pilot = Pilot::new();
    let root = pilot.gui().root();
    let id = pilot.gui_mut().add(root, TextBox::new()).unwrap();
    let count = counter(pilot.gui_mut(), id);
    pilot.click(10, 5);
    pilot.type_text("go ");
    pilot.press_key(Key::Enter);
    assert_eq!(count.get(), 1);
    assert_eq!(pilot.gui().widget::<TextBox>(id).unwrap().text(), "go ");
}

#[test]
fn test_render_outline() {
    let mut pilot = Pilot::new();
    let gui = pilot.gui_mut();
    let form = gui.add(gui.root(), Container::form()).unwrap();
    gui.add_row(form, "On", CheckBox::new(true)).unwrap();
    pilot.tab();
    insta::assert_snapshot!(pilot.outline(), @r#"
    VBox 0,0 37x16 Default
      Form 0,0 37x16 Default
        Label 0,1 14x14 Default "On"
        CheckBox 21,0 16x16 Focused
    "#);
}

// ---------------------------------------------------------------------------
// Themes
// ---------------------------------------------------------------------------

#[test]
fn test_theme_sweep_drops_old_assets() {
    let assets = StubAssets::new()
        .with_font("a.ttf", Font::new("a", 0.5, 1.0))
        .with_font("b.ttf", Font::new("b", 1.0, 1.0))
        .with_texture("a.png", Size::new(8, 8))
        .with_texture("b.png", Size::new(20, 10));
    let mut gui = gui();
    gui.set_theme(&ThemeConfig::default().with_font("a.ttf").with_texture("a.png"), &assets)
        .unwrap();

    let root = gui.root();
    let image = gui.add(root, Image::themed()).unwrap();
    let loose = gui.create(Image::themed());
    let old: Arc<Texture> = gui.theme().texture.clone();
    assert_eq!(Arc::strong_count(&old), 4);

    gui.set_theme(&ThemeConfig::default().with_font("b.ttf").with_texture("b.png"), &assets)
        .unwrap();
    assert_eq!(Arc::strong_count(&old), 1);
    assert_eq!(gui.theme().font.name, "b");
    for id in [image, loose] {
        let shown = gui.widget::<Image>(id).unwrap().texture();
        assert!(Arc::ptr_eq(shown, &gui.theme().texture));
        assert_eq!(gui.size_of(id), Some(Size::new(20, 10)));
    }
}

#[test]
fn test_failed_theme_load_keeps_the_old_theme() {
    let mut gui = gui();
    let button = gui.add(gui.root(), Button::new("OK")).unwrap();
    let err = gui
        .set_theme(&ThemeConfig::default().with_font("missing.ttf"), &StubAssets::new())
        .unwrap_err();
    assert!(matches!(err, GuiError::Asset { kind: "font", .. }));
    assert_eq!(gui.theme().font.name, "builtin");
    assert_eq!(gui.size_of(button), Some(Size::new(16, 16)));
}

#[test]
fn test_theme_from_toml_resizes_widgets() {
    let config = ThemeConfig::from_toml_str(
        r##"
        text_size = 20
        margin = 2
        window_background = "#102030"
        "##,
    )
    .unwrap();
    let mut gui = gui();
    let button = gui.add(gui.root(), Button::new("OK")).unwrap();
    gui.apply_theme(Theme::builtin(&config));
    // 2 glyphs of 10px plus 2px frame on each side; line 20 plus 4.
    assert_eq!(gui.size_of(button), Some(Size::new(24, 24)));

    let mut recorder = RecordingRenderer::new();
    gui.render(&mut recorder);
    assert_eq!(recorder.background().map(|c| c.to_string()), Some("#102030".to_string()));
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

#[test]
fn test_commands_from_another_thread() {
    let mut gui = gui();
    let sender = gui.command_sender();
    let worker = std::thread::spawn(move || {
        for i in 0..3 {
            sender
                .send(move |gui: &mut Gui| {
                    let root = gui.root();
                    gui.add(root, Button::new(format!("job {i}"))).unwrap();
                })
                .unwrap();
        }
    });
    worker.join().unwrap();

    assert_eq!(gui.drain_commands(), 3);
    assert_eq!(gui.tree().child_count(gui.root()), 3);
}

#[test]
fn test_sender_reports_a_dropped_gui() {
    let gui = gui();
    let sender = gui.command_sender();
    drop(gui);
    assert!(sender.is_closed());
    assert!(matches!(sender.send(|_| {}), Err(GuiError::Disconnected)));
}
