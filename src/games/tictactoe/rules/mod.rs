//! Game rules: placement, win and draw detection, random selection.

mod draw;
mod placement;
mod sampling;
mod win;

pub use draw::check_draw;
pub use placement::{apply_move, validate_move};
pub use sampling::{SamplingStrategy, select_random_move};
pub use win::{LINES, check_win, check_winner};
