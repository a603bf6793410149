pub mod controls;
pub mod map;
pub mod page;

pub use controls::{ShowWinnersButton, country_wins, show_winners, year_info};
pub use map::{Figure, build_figure};
pub use page::PageRenderer;
