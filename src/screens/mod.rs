//! Screen-level state holders.
//!
//! Each holder publishes its state through a `tokio::sync::watch` channel and
//! owns the tasks it starts. Dropping a holder abandons its in-flight work.

pub mod favorites;
pub mod home;
pub mod results;
pub mod scope;
pub mod two_pane;

pub use favorites::{FavoritesModel, FavoritesUiState};
pub use home::{HomeModel, HomeUiState};
pub use results::{ResultsModel, ResultsUiState};
pub use scope::ScreenScope;
pub use two_pane::{DetailPaneUiState, ListPaneUiState, TwoPaneResultsModel, TwoPaneResultsUiState};
