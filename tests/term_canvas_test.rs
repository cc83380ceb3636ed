//! Canvas tests - board cells and messages in terminal characters

use blockfall::core::CellMap;
use blockfall::term::{Canvas, CellSize};
use blockfall::types::{Vector, BLACK, GAME_OVER_MESSAGE, PAUSED_MESSAGE, PURPLE, WHITE};

fn cells(entries: &[(i32, i32)]) -> CellMap {
    entries
        .iter()
        .map(|&(r, c)| (Vector::new(r, c), PURPLE))
        .collect()
}

#[test]
fn test_cell_is_two_characters_wide() {
    let mut canvas = Canvas::new(16, 10, CellSize::default());
    canvas.draw_cells(&cells(&[(3, 4)]));

    let fb = canvas.frame();
    for x in 8..10 {
        let cell = fb.get(x, 3).unwrap();
        assert_eq!(cell.style.bg, PURPLE);
        assert_ne!(cell.ch, ' ');
    }
    assert_eq!(fb.get(7, 3).unwrap().ch, ' ');
    assert_eq!(fb.get(10, 3).unwrap().ch, ' ');
}

#[test]
fn test_custom_cell_size_scales_canvas() {
    let mut canvas = Canvas::new(4, 4, CellSize::new(3, 2));
    assert_eq!(canvas.frame().width(), 12);
    assert_eq!(canvas.frame().height(), 8);

    canvas.draw_cells(&cells(&[(3, 3)]));
    let fb = canvas.frame();
    assert_eq!(fb.get(11, 7).unwrap().style.fg, PURPLE);
    assert_eq!(fb.get(9, 6).unwrap().style.fg, PURPLE);
    assert_eq!(fb.get(8, 6).unwrap().ch, ' ');
}

#[test]
fn test_cells_outside_board_are_skipped() {
    let mut canvas = Canvas::new(16, 10, CellSize::default());
    let before = canvas.frame().clone();
    canvas.draw_cells(&cells(&[(-1, 0), (-2, 5), (16, 0), (0, 10), (0, -1)]));
    assert_eq!(*canvas.frame(), before);
}

#[test]
fn test_paused_message_is_centered() {
    let mut canvas = Canvas::new(16, 10, CellSize::default());
    canvas.show_message(PAUSED_MESSAGE);

    let fb = canvas.frame();
    let row: String = (0..fb.width()).map(|x| fb.get(x, 8).unwrap().ch).collect();
    assert_eq!(row.trim(), PAUSED_MESSAGE);
    let start = row.find(PAUSED_MESSAGE).unwrap();
    let end = fb.width() as usize - start - PAUSED_MESSAGE.len();
    assert!(start.abs_diff(end) <= 1);

    let first = fb.get(start as u16, 8).unwrap();
    assert_eq!(first.style.fg, WHITE);
    assert_eq!(first.style.bg, BLACK);
}

#[test]
fn test_game_over_message_spans_two_lines() {
    let mut canvas = Canvas::new(16, 10, CellSize::default());
    canvas.show_message(GAME_OVER_MESSAGE);

    let fb = canvas.frame();
    let line = |y: u16| -> String { (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect() };
    assert_eq!(line(7).trim(), "Game Over!");
    assert!(line(8).starts_with("Press space"));
}

#[test]
fn test_clear_resets_canvas() {
    let mut canvas = Canvas::new(16, 10, CellSize::default());
    let blank = canvas.frame().clone();
    canvas.draw_cells(&cells(&[(0, 0), (15, 9)]));
    canvas.show_message(PAUSED_MESSAGE);
    assert_ne!(*canvas.frame(), blank);

    canvas.clear();
    assert_eq!(*canvas.frame(), blank);
}
