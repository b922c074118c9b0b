//! Tests for the timer bank.

#[cfg(test)]
mod tests {
    use crate::combat::{TimerBank, TimerKey};

    const DT: f32 = 0.05;

    #[test]
    fn test_timer_counts_down_and_expires_once() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::HitboxWindow, 0.2);
        assert!(timers.is_running(TimerKey::HitboxWindow));

        // 0.2s / 0.05s = 4 тика; истекает на 4-м
        for _ in 0..3 {
            let expired = timers.tick(DT);
            assert!(!expired.contains(TimerKey::HitboxWindow));
        }
        let expired = timers.tick(DT);
        assert!(expired.contains(TimerKey::HitboxWindow));

        // Эффект ровно один раз: дальше таймер не запущен
        assert!(timers.is_ready(TimerKey::HitboxWindow));
        assert!(timers.tick(DT).is_empty());
        assert_eq!(timers.remaining(TimerKey::HitboxWindow), 0.0);
    }

    #[test]
    fn test_restart_overrides_running_timer() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::ShieldRecovery, 2.0);
        timers.tick(1.5);
        assert!((timers.remaining(TimerKey::ShieldRecovery) - 0.5).abs() < 1e-5);

        // Last-writer-wins: отсчёт заново
        timers.start(TimerKey::ShieldRecovery, 2.0);
        assert!((timers.remaining(TimerKey::ShieldRecovery) - 2.0).abs() < 1e-5);

        let expired = timers.tick(1.0);
        assert!(!expired.contains(TimerKey::ShieldRecovery));
    }

    #[test]
    fn test_cancel_prevents_expiry() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::Stun, 1.0);

        assert!(timers.cancel(TimerKey::Stun));
        assert!(!timers.cancel(TimerKey::Stun));
        assert!(timers.tick(2.0).is_empty());
    }

    #[test]
    fn test_remaining_never_negative() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::AttackCooldown, -3.0);
        assert_eq!(timers.remaining(TimerKey::AttackCooldown), 0.0);
        assert!(timers.is_ready(TimerKey::AttackCooldown));

        timers.start(TimerKey::RollCooldown, 0.1);
        timers.tick(5.0);
        assert_eq!(timers.remaining(TimerKey::RollCooldown), 0.0);
    }

    #[test]
    fn test_zero_duration_fires_on_next_tick() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::BlockMinimum, 0.0);
        assert!(timers.is_ready(TimerKey::BlockMinimum));

        assert!(timers.tick(DT).contains(TimerKey::BlockMinimum));
    }

    #[test]
    fn test_expired_iterates_in_key_order() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::ShieldRecovery, 0.01);
        timers.start(TimerKey::Stun, 0.01);
        timers.start(TimerKey::AttackCooldown, 0.01);

        let order: Vec<TimerKey> = timers.tick(DT).iter().collect();
        assert_eq!(
            order,
            vec![TimerKey::AttackCooldown, TimerKey::Stun, TimerKey::ShieldRecovery]
        );
    }

    #[test]
    fn test_frozen_bank_does_not_tick_or_start() {
        let mut timers = TimerBank::default();
        timers.start(TimerKey::HurtFlash, 0.3);
        timers.freeze();

        assert!(timers.tick(1.0).is_empty());
        assert!(timers.is_running(TimerKey::HurtFlash));

        timers.start(TimerKey::Roll, 1.0);
        assert!(timers.is_ready(TimerKey::Roll));
        assert!(timers.is_frozen());
    }
}
