//! Theme resolution, palette derivation and headless fill benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use finder_tui::theme::{BaseTheme, DARK_256, NO_COLOR, parse_theme_options, resolve_theme};
use finder_tui::{
    BorderShape, BorderStyle, Color, ColorAttr, ColorTheme, Event, HeadlessRenderer, Palette,
    Renderer, RendererOptions, ThemeSlot, Window,
};
use std::hint::black_box;

const OPTIONS: &str = "dark,fg:252,bg:235,hl:#5f87af:bold,fg+:#ffffff,bg+:236,hl+:#87afd7,\
info:144,prompt:110,pointer:161,marker:168,spinner:148,header:109,border:59";

fn color_parsing(c: &mut Criterion) {
    c.bench_function("color_from_hex", |b| {
        b.iter(|| Color::from_hex(black_box("#6495ED")));
    });

    c.bench_function("parse_theme_options", |b| {
        b.iter(|| parse_theme_options(BaseTheme::Dark256, black_box(OPTIONS)));
    });
}

fn theme_resolution(c: &mut Criterion) {
    let overlay = ColorTheme::EMPTY
        .with(ThemeSlot::Fg, ColorAttr::new(Color::indexed(252)))
        .with(ThemeSlot::Border, ColorAttr::new(Color::rgb(0x44, 0x44, 0x44)));

    c.bench_function("resolve_theme_dark", |b| {
        b.iter(|| resolve_theme(black_box(&overlay), black_box(&DARK_256), false));
    });

    c.bench_function("resolve_theme_no_color", |b| {
        b.iter(|| resolve_theme(black_box(&overlay), black_box(&NO_COLOR), true));
    });

    let resolved = resolve_theme(&overlay, &DARK_256, false);
    c.bench_function("palette_derive", |b| {
        b.iter(|| Palette::derive(black_box(&resolved)));
    });
}

fn headless_fill(c: &mut Criterion) {
    let palette = Palette::derive(&resolve_theme(&ColorTheme::EMPTY, &DARK_256, false));
    let (mut renderer, _input) = HeadlessRenderer::new(120, 40, RendererOptions::default(), palette);
    let _ = renderer.init();
    let mut window = renderer.new_window(0, 0, 120, 40, false, BorderStyle::new(BorderShape::None, true));
    let line = "src/renderer/headless.rs:42:\tfn fill_with(&mut self, pair: ColorPair, text: &str) 日本語";

    c.bench_function("fill_screen_of_lines", |b| {
        b.iter(|| {
            window.erase();
            for _ in 0..40 {
                window.fill(black_box(line));
                window.finish_fill();
                let next = window.y() + 1;
                window.move_to(next, 0);
            }
        });
    });

    c.bench_function("key_name_round_trip", |b| {
        let event = Event::alt_key('j');
        b.iter(|| Event::from_key_name(&black_box(event).key_name()));
    });
}

criterion_group!(benches, color_parsing, theme_resolution, headless_fill);
criterion_main!(benches);
