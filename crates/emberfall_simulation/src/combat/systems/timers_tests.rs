//! Tests for timer expiry effects.

#[cfg(test)]
mod tests {
    use crate::combat::{ActionRequest, ActionState, TimerKey};
    use crate::combatant::testing::{Rig, DT};
    use crate::config::CombatantConfig;
    use crate::cues::{Cue, HitboxRegion};

    #[test]
    fn test_hitbox_enabled_for_exactly_its_window() {
        let mut rig = Rig::player();
        rig.request(ActionRequest::attack());
        rig.take_cues();

        // 0.2s при dt 0.05 → закрывается на 4-м тике
        for tick in 1..=3 {
            rig.advance(0.05);
            assert!(rig.hitbox.enabled, "hitbox закрылся раньше, тик {}", tick);
            assert_eq!(rig.state, ActionState::Attacking);
        }

        let expired = rig.advance(0.05);
        assert!(expired.contains(TimerKey::HitboxWindow));
        assert!(!rig.hitbox.enabled);
        assert_eq!(rig.state, ActionState::Idle);
        assert!(rig.take_cues().contains(&Cue::Hitbox {
            region: HitboxRegion::Attack,
            enabled: false,
        }));
    }

    #[test]
    fn test_hitbox_closes_even_after_state_changed() {
        let mut rig = Rig::player();
        rig.request(ActionRequest::attack());
        rig.request(ActionRequest::Roll);
        assert!(rig.hitbox.enabled);

        for _ in 0..4 {
            rig.advance(0.05);
        }

        assert!(!rig.hitbox.enabled);
        assert_eq!(rig.state, ActionState::Rolling);
    }

    #[test]
    fn test_roll_ends_in_idle() {
        let mut rig = Rig::enemy();
        rig.request(ActionRequest::Roll);

        for _ in 0..9 {
            rig.advance(0.05);
        }
        assert_eq!(rig.state, ActionState::Rolling);

        rig.advance(0.05);
        assert_eq!(rig.state, ActionState::Idle);
    }

    #[test]
    fn test_enemy_block_auto_releases_after_minimum() {
        let mut rig = Rig::enemy();
        rig.request(ActionRequest::BlockStart);

        for _ in 0..29 {
            rig.advance(0.05);
        }
        assert_eq!(rig.state, ActionState::Blocking);

        rig.advance(0.05);
        assert_eq!(rig.state, ActionState::Idle);
        assert!(!rig.block.enabled);
    }

    #[test]
    fn test_early_release_waits_for_minimum() {
        let mut config = CombatantConfig::player();
        config.block.min_duration = 0.5;
        let mut rig = Rig::new(config);

        rig.request(ActionRequest::BlockStart);
        rig.advance(0.1);

        assert!(rig.request(ActionRequest::BlockRelease));
        assert_eq!(rig.state, ActionState::Blocking);
        assert!(rig.block.release_pending);

        for _ in 0..8 {
            rig.advance(0.05);
        }
        assert_eq!(rig.state, ActionState::Idle);
        assert!(!rig.block.release_pending);
    }

    #[test]
    fn test_held_block_stays_after_minimum_without_auto_release() {
        let mut config = CombatantConfig::player();
        config.block.min_duration = 0.5;
        let mut rig = Rig::new(config);

        rig.request(ActionRequest::BlockStart);
        for _ in 0..20 {
            rig.advance(0.05);
        }

        assert_eq!(rig.state, ActionState::Blocking);
    }

    #[test]
    fn test_stun_ends_then_shield_recovers_to_max() {
        let mut rig = Rig::player();
        rig.request(ActionRequest::BlockStart);
        for _ in 0..3 {
            rig.damage(1);
        }
        assert_eq!(rig.state, ActionState::Stunned);

        // stun 1.0s
        for _ in 0..20 {
            rig.advance(0.05);
        }
        assert_eq!(rig.state, ActionState::Idle);
        assert_eq!(rig.shield.current, 0);
        assert!(rig.timers.is_running(TimerKey::ShieldRecovery));

        // recovery 2.0s: до истечения заряды остаются 0
        for _ in 0..39 {
            rig.advance(0.05);
            assert_eq!(rig.shield.current, 0);
        }
        rig.advance(0.05);
        assert_eq!(rig.shield.current, rig.shield.max);
    }

    #[test]
    fn test_absorb_restarts_recovery_timer() {
        let mut rig = Rig::player();
        rig.request(ActionRequest::BlockStart);
        rig.damage(1);

        for _ in 0..30 {
            rig.advance(0.05);
        }
        rig.damage(1);
        assert_eq!(rig.shield.current, 1);

        // Отсчёт 2.0s заново от второго удара
        for _ in 0..30 {
            rig.advance(0.05);
        }
        assert_eq!(rig.shield.current, 1);

        for _ in 0..10 {
            rig.advance(0.05);
        }
        assert_eq!(rig.shield.current, 3);
    }

    #[test]
    fn test_hurt_flash_turns_off() {
        let mut rig = Rig::player();
        rig.damage(1);
        rig.take_cues();

        for _ in 0..18 {
            rig.advance(DT);
        }

        assert!(rig.take_cues().contains(&Cue::Flash(false)));
    }

    #[test]
    fn test_dead_timers_do_nothing() {
        let mut rig = Rig::enemy();
        rig.request(ActionRequest::BlockStart);
        rig.damage(1);
        rig.state = ActionState::Idle;
        rig.damage(5);
        rig.take_cues();

        for _ in 0..300 {
            assert!(rig.advance(DT).is_empty());
        }
        assert_eq!(rig.shield.current, 2);
        assert!(rig.take_cues().is_empty());
    }
}
