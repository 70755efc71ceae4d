//! The fourteen board variants, each a [`Board`](crate::Board) plus its [`Ui`](crate::Ui).

mod diamond;
mod five_by_five;
mod four_by_four;
mod four_in_a_row;
mod infinity;
mod memory;
mod misere;
mod numerical;
mod obstacles;
mod pyramid;
mod sus;
mod ultimate;
mod word;
mod xo;

pub use diamond::{DiamondBoard, DiamondUi};
pub use five_by_five::{FiveByFiveBoard, FiveByFiveUi};
pub use four_by_four::{FourByFourBoard, FourByFourUi, Slide};
pub use four_in_a_row::{ColumnDrop, FourInARowBoard, FourInARowUi};
pub use infinity::{InfinityBoard, InfinityUi};
pub use memory::{MemoryBoard, MemoryUi};
pub use misere::{MisereBoard, MisereUi};
pub use numerical::{NumericalBoard, NumericalUi};
pub use obstacles::{ObstaclesBoard, ObstaclesUi};
pub use pyramid::{PyramidBoard, PyramidUi};
pub use sus::{SusBoard, SusUi};
pub use ultimate::{UltimateBoard, UltimateMove, UltimateUi};
pub use word::{Dictionary, DictionaryError, WordBoard, WordUi};
pub use xo::{XoBoard, XoUi};

use crate::framework::{render_grid, Grid, Square};
use std::fmt::Display;

/// Draws a symbol grid: symbols as-is, empty cells blank, blocked cells `#`.
pub(crate) fn render_marks<S: Display>(grid: &Grid<Square<S>>) -> String {
    render_grid(grid, |_, sq| match sq {
        Square::Empty => String::new(),
        Square::Taken(symbol) => symbol.to_string(),
        Square::Blocked => "#".to_string(),
    })
}
