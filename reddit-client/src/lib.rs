pub mod api;


pub use api::{Listing, ListingChild, ListingData, UserCommentsClient};
