pub mod catalog;
pub mod genres;
pub mod providers;
pub mod recommendations;
pub mod release_dates;
pub mod review;
pub mod selection;

pub use catalog::CatalogAggregator;
pub use review::ReviewGenerator;
pub use selection::SelectionState;
