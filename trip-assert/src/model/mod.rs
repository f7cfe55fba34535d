//! Trip-plan value types.
//!
//! These mirror the planning service's `plan` response closely enough to
//! deserialize it with serde, and carry only what itinerary assertions read.
//! All values are plain data; nothing here talks to the network.

mod fare;
mod leg;
mod mode;
mod place;
mod plan;

pub use fare::{Currency, FareMedium, FareProduct, FareProductUse, Money, RiderCategory};
pub use leg::Leg;
pub use mode::{InvalidLegMode, LegMode};
pub use place::{Place, Route};
pub use plan::{Itinerary, TripPlan};
