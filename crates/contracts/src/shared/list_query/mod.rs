//! Client-side list pipeline: filter → sort → paginate.
//!
//! Every list page of the portal runs its static dataset through [`query`]
//! with the filter and page values held in its [`ListViewState`].

pub mod error;
pub mod filter;
pub mod page;
pub mod query;
pub mod sort;
pub mod state;

pub use error::ListQueryError;
pub use filter::{FilterSpec, FilterValue, Filterable};
pub use page::{clamp_page, total_pages, PageSize, PageSummary};
pub use query::{query, ListPage};
pub use sort::{Pinnable, SortSpec, Sortable};
pub use state::{ListViewState, SortKey};
