//! Follow controller - держит Ally рядом с игроком.

use rand::Rng;

use crate::ai::AllyConfig;
use crate::components::{Ally, MoveRequestId, MoveRequestIds, MovementCommand};

/// Случайный acceptance radius в `[min_distance_from_player, max_distance_from_player]`.
///
/// Каждый вызов - новое значение: Ally не останавливается на одной и той же дистанции.
pub fn sample_acceptance_radius(config: &AllyConfig, rng: &mut impl Rng) -> f32 {
    let (low, high) = if config.min_distance_from_player <= config.max_distance_from_player {
        (config.min_distance_from_player, config.max_distance_from_player)
    } else {
        (config.max_distance_from_player, config.min_distance_from_player)
    };

    if !(low.is_finite() && high.is_finite()) {
        return low;
    }

    rng.gen_range(low..=high)
}

/// Выдаёт FollowEntity к игроку.
///
/// `None` если игрок не назначен (команда не меняется).
pub fn move_toward_player(
    ally: &Ally,
    config: &AllyConfig,
    command: &mut MovementCommand,
    ids: &mut MoveRequestIds,
    rng: &mut impl Rng,
) -> Option<MoveRequestId> {
    let Some(player) = ally.player else {
        crate::log_warning("Follow: player reference is unset, ally stays in place");
        return None;
    };

    let acceptance_radius = sample_acceptance_radius(config, rng);
    let request = ids.issue();
    *command = MovementCommand::FollowEntity {
        target: player,
        acceptance_radius,
        request,
    };

    crate::log(&format!(
        "🚶 Follow: {:?} → player {:?} (acceptance {:.2}m)",
        request, player, acceptance_radius
    ));

    Some(request)
}
