pub mod event;
pub mod guest;
pub mod ids;
pub mod membership;
pub mod ranking;

pub use event::Event;
pub use guest::Guest;
pub use ids::{EventId, GuestId};
pub use membership::Membership;
pub use ranking::GuestRanking;
