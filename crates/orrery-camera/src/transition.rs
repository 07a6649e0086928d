//! Smooth camera transitions: interpolates position and look-at target
//! between two camera poses over a fixed duration with easing.

use glam::Vec3;
use orrery_config::Easing;

/// Camera position plus the point it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at point in world space.
    pub target: Vec3,
}

impl CameraPose {
    /// Camera at `position` looking at `target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Interpolate both position and target.
    pub fn lerp(&self, to: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(to.position, t),
            target: self.target.lerp(to.target, t),
        }
    }

    /// Shift position and target by the same offset.
    pub fn translated(&self, delta: Vec3) -> CameraPose {
        CameraPose {
            position: self.position + delta,
            target: self.target + delta,
        }
    }
}

/// Progress curve applied to every camera flight.
///
/// `EaseInOut` is the quadratic in-out curve the focus animation uses by
/// default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EasingFunction {
    Linear,
    /// Quadratic acceleration.
    EaseIn,
    /// Quadratic deceleration.
    EaseOut,
    #[default]
    EaseInOut,
}

impl EasingFunction {
    /// Eased fraction for raw progress `t`, clamped to `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let rest = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - rest * rest,
            Self::EaseInOut if t < 0.5 => 2.0 * t * t,
            Self::EaseInOut => 1.0 - 2.0 * rest * rest,
        }
    }
}

impl From<Easing> for EasingFunction {
    fn from(easing: Easing) -> Self {
        match easing {
            Easing::Linear => EasingFunction::Linear,
            Easing::EaseIn => EasingFunction::EaseIn,
            Easing::EaseOut => EasingFunction::EaseOut,
            Easing::EaseInOut => EasingFunction::EaseInOut,
        }
    }
}

/// Where a transition is heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionGoal {
    /// A pose fixed when the transition starts.
    Fixed(CameraPose),
    /// The framing of a body, re-resolved every tick while the body moves.
    Track(&'static str),
}

/// An in-flight interpolation from one camera pose toward a goal.
///
/// `generation` ties the transition to the controller that started it; the
/// controller ignores any transition whose generation is no longer current.
#[derive(Clone, Debug)]
pub struct CameraTransition {
    /// The camera pose at the start of the transition.
    pub from: CameraPose,
    /// Destination rule.
    pub goal: TransitionGoal,
    /// Most recently resolved end pose.
    pub end: CameraPose,
    /// Total duration in seconds.
    pub duration: f32,
    /// Seconds elapsed so far.
    pub elapsed: f32,
    /// Easing function to use for interpolation.
    pub easing: EasingFunction,
    /// Controller generation this transition belongs to.
    pub generation: u64,
}

impl CameraTransition {
    /// Create a transition. Non-positive durations complete on the first tick.
    pub fn new(
        from: CameraPose,
        goal: TransitionGoal,
        end: CameraPose,
        duration: f32,
        easing: EasingFunction,
        generation: u64,
    ) -> Self {
        Self {
            from,
            goal,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            generation,
        }
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// True once the full duration has elapsed.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Body this transition follows, if any.
    pub fn tracked_body(&self) -> Option<&'static str> {
        match self.goal {
            TransitionGoal::Track(name) => Some(name),
            TransitionGoal::Fixed(_) => None,
        }
    }

    /// Advance by `dt` seconds toward `end` and return the pose to apply.
    ///
    /// Snaps to `end` exactly once the duration is reached.
    pub fn step(&mut self, dt: f32, end: CameraPose) -> CameraPose {
        self.end = end;
        self.elapsed += dt;
        if self.is_complete() {
            return end;
        }
        let t = self.easing.apply(self.progress());
        self.from.lerp(&end, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose_a() -> CameraPose {
        CameraPose::new(Vec3::new(0.0, 15.0, 30.0), Vec3::ZERO)
    }

    fn pose_b() -> CameraPose {
        CameraPose::new(Vec3::new(1000.0, 2000.0, 3000.0), Vec3::new(10.0, 0.0, 10.0))
    }

    fn fixed(duration: f32, easing: EasingFunction) -> CameraTransition {
        CameraTransition::new(
            pose_a(),
            TransitionGoal::Fixed(pose_b()),
            pose_b(),
            duration,
            easing,
            1,
        )
    }

    #[test]
    fn test_transition_starts_at_old_camera_state() {
        let transition = fixed(1.5, EasingFunction::Linear);
        let pose = transition.from.lerp(&transition.end, 0.0);
        assert!((pose.position - pose_a().position).length() < 1e-6);
        assert_eq!(transition.progress(), 0.0);
    }

    #[test]
    fn test_transition_ends_exactly_at_new_state() {
        let mut transition = fixed(1.5, EasingFunction::EaseInOut);
        let mut pose = pose_a();
        for _ in 0..200 {
            pose = transition.step(1.0 / 60.0, pose_b());
            if transition.is_complete() {
                break;
            }
        }
        assert!(transition.is_complete());
        assert_eq!(pose, pose_b());
    }

    #[test]
    fn test_mid_transition_is_interpolated() {
        let mut transition = fixed(2.0, EasingFunction::Linear);
        let pose = transition.step(1.0, pose_b());
        let expected = Vec3::new(500.0, 1007.5, 1515.0);
        assert!((pose.position - expected).length() < 1e-3);
        assert!((pose.target - Vec3::new(5.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_end_is_re_resolved_each_step() {
        let mut transition = CameraTransition::new(
            pose_a(),
            TransitionGoal::Track("Earth"),
            pose_b(),
            1.0,
            EasingFunction::Linear,
            1,
        );
        let moved = pose_b().translated(Vec3::new(1.0, 0.0, 0.0));
        transition.step(0.25, moved);
        assert_eq!(transition.end, moved);
        assert_eq!(transition.tracked_body(), Some("Earth"));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut transition = fixed(0.0, EasingFunction::Linear);
        assert_eq!(transition.progress(), 1.0);
        let pose = transition.step(0.0, pose_b());
        assert!(transition.is_complete());
        assert_eq!(pose, pose_b());
    }

    #[test]
    fn test_easing_quadratic_values() {
        let cases = [
            (EasingFunction::Linear, 0.5, 0.5),
            (EasingFunction::EaseIn, 0.5, 0.25),
            (EasingFunction::EaseOut, 0.5, 0.75),
            (EasingFunction::EaseInOut, 0.25, 0.125),
            (EasingFunction::EaseInOut, 0.75, 0.875),
        ];
        for (easing, t, expected) in cases {
            let got = easing.apply(t);
            assert!((got - expected).abs() < 1e-6, "{easing:?}({t}) = {got}");
        }
    }

    #[test]
    fn test_easing_in_out_is_symmetric() {
        let e = EasingFunction::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.1) + e.apply(0.9) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_easing_clamps_out_of_range_progress() {
        for easing in [EasingFunction::EaseIn, EasingFunction::EaseInOut] {
            assert_eq!(easing.apply(-0.5), 0.0);
            assert_eq!(easing.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_config_easing_maps() {
        assert_eq!(EasingFunction::from(Easing::EaseInOut), EasingFunction::EaseInOut);
        assert_eq!(EasingFunction::from(Easing::Linear), EasingFunction::Linear);
    }
}
