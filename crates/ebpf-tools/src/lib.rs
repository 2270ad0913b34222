pub mod c_array;
pub mod listing;

pub use c_array::c_array;
pub use listing::{listing, render_listing, ListingLine};
