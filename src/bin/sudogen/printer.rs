//! Boxed ASCII rendering of a finished board.

use sudogen::Board;

/// Renders a board with `+---+` rules around every box band and `|`
/// separators at box boundaries. Cells are padded to the widest value.
pub(crate) fn format_board(board: &Board, box_size: usize) -> String {
    let width = board.width();
    let cell_width = board
        .iter()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1);
    let boxes_per_band = width / box_size;
    let rule = format!(
        "{}+",
        format!("+{}", "-".repeat(box_size * (cell_width + 1) + 1)).repeat(boxes_per_band)
    );

    let mut out = String::new();
    for (row_index, row) in board.rows().enumerate() {
        if row_index % box_size == 0 {
            out.push_str(&rule);
            out.push('\n');
        }
        for (col_index, value) in row.iter().enumerate() {
            if col_index % box_size == 0 {
                out.push_str("| ");
            }
            out.push_str(&format!("{:<1$} ", value, cell_width));
        }
        out.push_str("|\n");
    }
    out.push_str(&rule);
    out
}
