//! Endpoint groups exposed by [`BandsintownClient`](crate::BandsintownClient)
//!
//! Each service borrows the client, builds its endpoint path and performs a
//! single GET. There is no retry and no pagination.

mod artist;
mod venue;

pub use artist::ArtistService;
pub use venue::VenueService;
