pub mod listing;
pub mod object_id;
pub mod review;

pub use listing::{Image, ImageForm, Listing, ListingForm};
pub use object_id::ObjectId;
pub use review::Review;
