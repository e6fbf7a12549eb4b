//! Waypoint domain - упорядоченные точки маршрута для Lead режима
//!
//! Содержит:
//! - WaypointRegistry (resource, строится хостом один раз при старте сессии)
//! - WaypointOverlap (event от arrival sensor Ally)

pub mod events;
pub mod registry;


pub use events::*;
pub use registry::*;
