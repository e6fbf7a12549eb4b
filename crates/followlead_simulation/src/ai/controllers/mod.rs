//! Controllers - что делать в каждом режиме (вызываются state machine и poll системами)
//!
//! - follow: move-команда к игроку со случайным acceptance radius
//! - lead: move-команда к текущему waypoint'у или stop (ждём игрока)
//! - sprint: walk/sprint hysteresis

pub mod follow;
pub mod lead;
pub mod sprint;


pub use follow::{move_toward_player, sample_acceptance_radius};
pub use lead::{move_toward_current_waypoint, LeadStep};
pub use sprint::{manage_sprint, SprintTransition};
