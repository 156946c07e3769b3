//! Damage, death, and the reentrancy guard around them (§4.8).

use platformer_core::types::Player;

use crate::interfaces::{AudioDriver, SoundId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    Shielded,
    Hurt,
    Died,
}

/// The sole path for player harm (§4.8). `Player::dying` guards against
/// collision processing during the death animation recursing back in here.
pub fn take_damage(player: &mut Player, audio: &mut impl AudioDriver) -> DamageOutcome {
    if player.dying {
        return DamageOutcome::Died;
    }
    if player.inventory.has_shield {
        player.inventory.has_shield = false;
        audio.play_sound(SoundId::PlayerDamage, 1);
        return DamageOutcome::Shielded;
    }
    if player.hp == 0 {
        player.dying = true;
        return DamageOutcome::Died;
    }
    player.hp -= 1;
    audio.play_sound(SoundId::PlayerDamage, 1);
    DamageOutcome::Hurt
}

/// Death-sequence bookkeeping: one life lost, reentrancy flag cleared.
/// Returns `true` once `lives` has gone negative (game over).
pub fn hero_dies(player: &mut Player) -> bool {
    player.lives -= 1;
    player.dying = false;
    player.lives < 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NullAudio;

    #[test]
    fn a_shield_absorbs_one_hit_and_is_consumed() {
        let mut player = Player::new(0, 0);
        player.inventory.has_shield = true;
        let hp_before = player.hp;
        let mut audio = NullAudio::default();

        let outcome = take_damage(&mut player, &mut audio);

        assert_eq!(outcome, DamageOutcome::Shielded);
        assert!(!player.inventory.has_shield);
        assert_eq!(player.hp, hp_before);
    }

    #[test]
    fn damage_at_zero_hp_starts_dying_without_going_negative() {
        let mut player = Player::new(0, 0);
        player.hp = 0;
        let mut audio = NullAudio::default();

        let outcome = take_damage(&mut player, &mut audio);

        assert_eq!(outcome, DamageOutcome::Died);
        assert!(player.dying);
        assert_eq!(player.hp, 0);
    }

    #[test]
    fn damage_while_already_dying_does_not_recurse() {
        let mut player = Player::new(0, 0);
        player.dying = true;
        player.hp = 5;
        let mut audio = NullAudio::default();

        let outcome = take_damage(&mut player, &mut audio);

        assert_eq!(outcome, DamageOutcome::Died);
        assert_eq!(player.hp, 5);
    }

    #[test]
    fn losing_the_last_life_reports_game_over() {
        let mut player = Player::new(0, 0);
        player.lives = 0;
        player.dying = true;

        let game_over = hero_dies(&mut player);

        assert!(game_over);
        assert!(!player.dying);
        assert_eq!(player.lives, -1);
    }
}
