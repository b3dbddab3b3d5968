//! 文本棋盘渲染

use border_game::{Board, Cell};

/// 把棋盘渲染成多行文本，每格占三个字符
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for cell in row {
            out.push_str(match cell {
                Cell::Empty => " . ",
                Cell::Player1 => " 1 ",
                Cell::Player2 => " 2 ",
            });
        }
        out.push('\n');
    }
    out
}
