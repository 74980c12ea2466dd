#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::effects::*;
    use crate::scope::*;
    use crate::signal::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use web_time::Duration;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_read_signal_sees_writes() {
        let sig = signal(0.0f32);
        let reader = sig.read_only();
        sig.set(12.5);
        assert_eq!(reader.get(), 12.5);
        assert!(reader.with(|v| *v > 10.0));
    }

    #[test]
    fn test_dispose_runs_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let d = on_unmount(move || c.set(c.get() + 1));
        let d2 = d.clone();

        d.run();
        d2.run();
        assert_eq!(count.get(), 1);
        assert!(d.is_spent());
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
        assert!(scope.is_disposed());
    }

    #[test]
    fn test_scope_disposes_on_last_drop() {
        let cleaned_up = Rc::new(Cell::new(false));
        {
            let scope = Scope::new();
            let handle = scope.clone();
            let c = cleaned_up.clone();
            scope.add_disposer(move || c.set(true));
            drop(scope);
            assert!(!cleaned_up.get());
            drop(handle);
        }
        assert!(cleaned_up.get());
    }

    #[test]
    fn test_adopt_after_dispose_runs_immediately() {
        let scope = Scope::new();
        scope.dispose();

        let ran = Rc::new(Cell::new(false));
        let r = ran.clone();
        scope.add_disposer(move || r.set(true));
        assert!(ran.get());
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = TestClock::new();
        let t0 = clock.now();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, t0);

        clock.advance(Duration::from_millis(250));
        assert!(a.update(clock.now()));
        assert!((*a.get() - 2.5).abs() < 0.01);

        clock.advance(Duration::from_millis(750));
        let cont = a.update(clock.now());
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_animation_retarget_starts_from_current() {
        let clock = TestClock::new();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(100), Easing::Linear),
        );
        a.set_target(100.0, clock.now());
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());

        a.set_target(0.0, clock.now());
        clock.advance(Duration::from_millis(50));
        a.update(clock.now());
        assert!((*a.get() - 25.0).abs() < 0.01);

        a.snap_to(7.0);
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 7.0);
    }

    #[test]
    fn test_test_clock_clones_share_time() {
        let clock = TestClock::new();
        let shared = clock.shared();
        let before = shared.now();
        clock.advance(Duration::from_secs(3));
        assert_eq!(shared.now() - before, Duration::from_secs(3));
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::shared();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let clock = TestClock::new();
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::tab_slide());
        a.set_target(100.0, clock.now());
        clock.advance(Duration::from_millis(200));
        assert!(a.update(clock.now()));
        clock.advance(Duration::from_millis(200));
        assert!(!a.update(clock.now()));
        assert_eq!(*a.get(), 100.0);
    }
}
