//! Rendering contract tests against the headless backend.
//!
//! Screens are compared with insta inline snapshots.

use std::fmt::Write;
use std::sync::Once;
use std::time::{Duration, Instant};

use finder_tui::renderer::RawInput;
use finder_tui::theme::{DARK_256, PaletteSlot, resolve_palette};
use finder_tui::{
    Attr, BorderShape, BorderStyle, Color, ColorPair, ColorTheme, Event, EventType, FillReturn,
    HeadlessRenderer, MouseEvent, Renderer, RendererOptions, Window,
};
use tracing::{debug, info};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn renderer_with(
    width: usize,
    height: usize,
    options: RendererOptions,
) -> (HeadlessRenderer, std::sync::mpsc::Sender<RawInput>) {
    let palette = resolve_palette(&ColorTheme::EMPTY, &DARK_256, false);
    let (mut renderer, tx) = HeadlessRenderer::new(width, height, options, palette);
    renderer.init().unwrap();
    (renderer, tx)
}

fn renderer(width: usize, height: usize) -> (HeadlessRenderer, std::sync::mpsc::Sender<RawInput>) {
    renderer_with(width, height, RendererOptions::default())
}

#[test]
fn bordered_list_layout() {
    setup_test_logging();
    let (mut screen, _input) = renderer(12, 5);
    let mut border = screen.new_window(0, 0, 12, 5, false, BorderStyle::default());
    let mut list = screen.new_window(1, 1, 10, 3, false, BorderStyle::new(BorderShape::None, true));

    assert_eq!(list.fill("> query"), FillReturn::Continue);
    list.finish_fill();
    list.move_to(1, 0);
    assert_eq!(list.fill("alpha\nbeta"), FillReturn::Continue);
    screen.refresh_windows(&mut [border.as_mut(), list.as_mut()]);

    info!(refreshes = screen.refreshes(), "rendered list");
    insta::assert_snapshot!(screen.text(), @r"
    ╭──────────╮
    │> query   │
    │alpha     │
    │beta      │
    ╰──────────╯
    ");
}

#[test]
fn border_shapes_render_their_edges() {
    let mut out = String::new();
    for shape in [
        BorderShape::Rounded,
        BorderShape::Sharp,
        BorderShape::Horizontal,
        BorderShape::Vertical,
        BorderShape::Left,
    ] {
        let (mut screen, _input) = renderer(5, 3);
        let style = screen.border_style(shape);
        let _window = screen.new_window(0, 0, 5, 3, false, style);
        writeln!(out, "{shape}:\n{}", screen.text()).unwrap();
    }
    insta::assert_snapshot!(out, @r"
    rounded:
    ╭───╮
    │   │
    ╰───╯
    sharp:
    ┌───┐
    │   │
    └───┘
    horizontal:
    ─────

    ─────
    vertical:
    │   │
    │   │
    │   │
    left:
    │
    │
    │
    ");
}

#[test]
fn border_glyph_catalog() {
    let mut out = String::new();
    for shape in BorderShape::ALL {
        let glyphs: String = BorderStyle::new(shape, true).chars().iter().collect();
        writeln!(out, "{:<10} {glyphs}", shape.name()).unwrap();
    }
    insta::assert_snapshot!(out, @r"
    none       ──││╭╮╯╰
    rounded    ──││╭╮╯╰
    sharp      ──││┌┐┘└
    bold       ━━┃┃┏┓┛┗
    block      ▀▄▌▐▛▜▟▙
    thinblock  ▔▁▏▕🭽🭾🭿🭼
    double     ══║║╔╗╝╚
    horizontal ──││╭╮╯╰
    vertical   ──││╭╮╯╰
    top        ──││╭╮╯╰
    bottom     ──││╭╮╯╰
    left       ──││╭╮╯╰
    right      ──││╭╮╯╰
    ");
}

#[test]
fn ascii_terminal_gets_ascii_borders() {
    let options = RendererOptions {
        unicode: false,
        ..RendererOptions::default()
    };
    let (mut screen, _input) = renderer_with(5, 3, options);
    let style = screen.border_style(BorderShape::Double);
    let _window = screen.new_window(0, 0, 5, 3, false, style);
    insta::assert_snapshot!(screen.text(), @r"
    +---+
    |   |
    +---+
    ");
}

#[test]
fn fill_loop_stops_on_suspend() {
    setup_test_logging();
    let (mut screen, _input) = renderer(8, 2);
    let mut window = screen.new_window(0, 0, 8, 2, false, BorderStyle::new(BorderShape::None, true));

    let items = ["one", "two", "three", "four"];
    let mut drawn = 0;
    for item in items {
        match window.fill(item) {
            FillReturn::Suspend => break,
            FillReturn::NextLine | FillReturn::Continue => {
                drawn += 1;
                window.finish_fill();
                let next = window.y() + 1;
                window.move_to(next, 0);
            }
        }
    }
    debug!(drawn, "items drawn");
    assert_eq!(drawn, 2);
    insta::assert_snapshot!(screen.text(), @r"
    one
    two
    ");
}

#[test]
fn exactly_full_window_suspends() {
    let (mut screen, _input) = renderer(6, 2);
    let mut window = screen.new_window(0, 0, 3, 1, false, BorderStyle::new(BorderShape::None, true));

    assert_eq!(window.fill("abc"), FillReturn::Suspend);
    let next = window.y() + 1;
    window.move_to(next, 0);
    let later: Vec<FillReturn> = ["def", "ghi", "x"].iter().map(|t| window.fill(t)).collect();
    assert_eq!(later, [FillReturn::Suspend; 3]);
    assert_eq!(screen.text(), "abc\n");
}

#[test]
fn preview_window_uses_preview_colors() {
    let overlay = ColorTheme::EMPTY.with(
        finder_tui::ThemeSlot::PreviewBg,
        finder_tui::ColorAttr::new(Color::indexed(234)),
    );
    let palette = resolve_palette(&overlay, &DARK_256, false);
    let (mut screen, _input) = HeadlessRenderer::new(6, 2, RendererOptions::default(), palette);
    screen.init().unwrap();

    let mut preview = screen.new_window(0, 0, 6, 2, true, BorderStyle::new(BorderShape::None, true));
    preview.erase();
    preview.print("cat");
    preview.cprint(ColorPair::new(Color::RED, Color::BLUE, Attr::BOLD), "!");

    let expected = palette[PaletteSlot::Preview];
    assert_eq!(expected.bg(), Color::indexed(234));
    assert_eq!(screen.pair_at(0, 0), Some(expected));
    assert_eq!(screen.pair_at(1, 5), Some(expected));
    assert_eq!(
        screen.pair_at(0, 3),
        Some(ColorPair::new(Color::RED, Color::BLUE, Attr::BOLD))
    );
    assert_eq!(screen.text(), "cat!\n");
}

#[test]
fn pause_and_resume_cycle() {
    let (mut screen, _input) = renderer(6, 1);
    let mut window = screen.new_window(0, 0, 6, 1, false, BorderStyle::new(BorderShape::None, true));
    window.print("ready");

    screen.pause(true);
    assert!(screen.is_paused());
    assert_eq!(screen.text(), "");

    screen.resume(false, true);
    assert!(!screen.is_paused());
    window.erase();
    window.print("back");
    screen.refresh();
    assert_eq!(screen.text(), "back");
}

#[test]
fn mouse_input_is_classified_in_get_char() {
    setup_test_logging();
    let (mut screen, input) = renderer(10, 10);
    let t0 = Instant::now();
    let click = MouseEvent::click(4, 2, true);

    input.send(RawInput::Mouse(click, t0)).unwrap();
    input
        .send(RawInput::Mouse(MouseEvent::release(4, 2, true), t0 + Duration::from_millis(50)))
        .unwrap();
    input
        .send(RawInput::Mouse(click, t0 + Duration::from_millis(200)))
        .unwrap();
    input.send(RawInput::Mouse(MouseEvent::scroll(4, 2, -1), t0)).unwrap();
    input.send(RawInput::Key(Event::alt_key('j'))).unwrap();
    drop(input);

    let kinds: Vec<EventType> = std::iter::from_fn(|| {
        let event = screen.get_char();
        (event.kind != EventType::Fatal).then_some(event)
    })
    .map(|event| event.mouse.map_or(event.kind, |mouse| mouse.binding_type()))
    .collect();

    assert_eq!(
        kinds,
        [
            EventType::LeftClick,
            EventType::Mouse,
            EventType::DoubleClick,
            EventType::ScrollDown,
            EventType::Alt,
        ]
    );
}

#[test]
fn closed_renderer_reports_fatal() {
    let (mut screen, input) = renderer(4, 4);
    input.send(RawInput::Key(Event::key('a'))).unwrap();
    screen.close();
    assert!(screen.is_closed());
    assert_eq!(screen.get_char().kind, EventType::Fatal);
    assert!(screen.init().is_err());
}

#[test]
fn window_geometry_and_enclose() {
    let (mut screen, _input) = renderer(20, 10);
    let window = screen.new_window(2, 5, 6, 3, false, BorderStyle::default());
    assert_eq!(
        (window.top(), window.left(), window.width(), window.height()),
        (2, 5, 6, 3)
    );
    assert!(window.enclose(2, 5));
    assert!(window.enclose(4, 10));
    assert!(!window.enclose(5, 10));
    assert!(!window.enclose(4, 11));
    assert_eq!(screen.max_x(), 20);
    assert_eq!(screen.max_y(), 10);
    assert_eq!(screen.size().columns, 20);
}
