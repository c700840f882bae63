use tui_life::core::Session;
use tui_life::term::{LifeView, ViewState, Viewport};

fn all_text(fb: &tui_life::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let session = Session::new(10, 10, 1);
    let view = LifeView::default();

    // 10 cells * 2 chars + border = 22 wide, 10 rows + border = 12 high.
    let fb = view.render(&session, &ViewState::default(), Viewport::new(60, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_live_cell_as_two_chars_wide() {
    let mut session = Session::new(10, 10, 1);
    session.toggle_cell(3, 2).unwrap();

    let fb = LifeView::default().render(&session, &ViewState::default(), Viewport::new(60, 30));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1 + 3 * 2, 1 + 2).unwrap().ch, '█');
    assert_eq!(fb.get(2 + 3 * 2, 1 + 2).unwrap().ch, '█');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_cursor_changes_background_only() {
    let mut session = Session::new(10, 10, 1);
    session.toggle_cell(4, 4).unwrap();
    let view = LifeView::default();
    let vp = Viewport::new(60, 30);

    let plain = view.render(&session, &ViewState::default(), vp);
    let ui = ViewState {
        cursor: (4, 4),
        ..ViewState::default()
    };
    let with_cursor = view.render(&session, &ui, vp);

    let (a, b) = (plain.get(9, 5).unwrap(), with_cursor.get(9, 5).unwrap());
    assert_eq!(a.ch, b.ch);
    assert_ne!(a.style.bg, b.style.bg);
}

#[test]
fn term_view_previews_selected_pattern_at_cursor() {
    let mut session = Session::new(10, 10, 1);
    session.select_pattern("glider").unwrap();
    let ui = ViewState {
        cursor: (3, 3),
        ..ViewState::default()
    };

    let fb = LifeView::default().render(&session, &ui, Viewport::new(60, 30));

    // Glider offset (1, 0) lands on cell (4, 3).
    assert_eq!(fb.get(1 + 4 * 2, 1 + 3).unwrap().ch, '░');
    // Nothing is placed until release.
    assert_eq!(session.population(), 0);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = Session::new(10, 10, 1);
    session.select_pattern("pulsar").unwrap();
    let ui = ViewState {
        menu_index: 6,
        ..ViewState::default()
    };

    let fb = LifeView::default().render(&session, &ui, Viewport::new(60, 30));
    let all = all_text(&fb);

    assert!(all.contains("MODE"));
    assert!(all.contains("PLACING"));
    assert!(all.contains("10 gps"));
    assert!(all.contains("RIGHT"));
    assert!(all.contains("* Pulsar"));
    assert!(all.contains("Glider Gun"));
}

#[test]
fn term_view_omits_panel_when_narrow() {
    let session = Session::new(10, 10, 1);
    let fb = LifeView::default().render(&session, &ViewState::default(), Viewport::new(20, 12));
    assert!(!all_text(&fb).contains("MODE"));
    assert_eq!(fb.get(19, 0).unwrap().ch, '┐');
}

#[test]
fn term_view_scrolls_to_keep_cursor_visible() {
    let mut session = Session::new(100, 75, 1);
    session.toggle_cell(99, 74).unwrap();
    let ui = ViewState {
        cursor: (99, 74),
        ..ViewState::default()
    };

    // Board frame is 34x29: 16 columns by 27 rows of cells.
    let fb = LifeView::default().render(&session, &ui, Viewport::new(60, 30));
    assert_eq!(fb.get(1 + 15 * 2, 1 + 26).unwrap().ch, '█');
}

#[test]
fn term_view_shows_paused_overlay_and_status() {
    let mut session = Session::new(10, 10, 1);
    session.start();
    session.pause();
    let ui = ViewState {
        status: Some("load failed: missing"),
        ..ViewState::default()
    };

    let fb = LifeView::default().render(&session, &ui, Viewport::new(60, 30));
    assert!(fb.row_text(6).contains("PAUSED"));
    assert!(fb.row_text(29).starts_with("load failed: missing"));
}
