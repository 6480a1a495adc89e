use super::Easing;
use crate::command::Command;
use crate::display_action::DisplayAction;
use crate::models::{View, ViewHandle, ViewRegistry};
use std::collections::VecDeque;
use std::fmt;

pub type AnimationId = u64;

/// Runs when an animation reaches its end. The returned commands are queued
/// like the ones from any other callback.
pub type Completion = Box<dyn FnOnce(&Animation) -> Vec<Command>>;

/// Scale of a view at the hidden end of an open or close animation.
const HIDDEN_SCALE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Open,
    Close,
    Fade,
    Scale,
    Slide,
}

impl AnimationKind {
    const fn default_easing(self) -> Easing {
        match self {
            Self::Close => Easing::EaseInOut,
            _ => Easing::EaseOut,
        }
    }

    const fn range(self) -> (f32, f32) {
        match self {
            Self::Close => (1.0, 0.0),
            _ => (0.0, 1.0),
        }
    }
}

pub struct Animation {
    pub id: AnimationId,
    pub view: ViewHandle,
    pub kind: AnimationKind,
    pub easing: Easing,
    /// Bound on the first tick that sees the animation.
    start_time: Option<u64>,
    /// Milliseconds.
    pub duration: u32,
    pub start_value: f32,
    pub end_value: f32,
    pub current_value: f32,
    on_complete: Option<Completion>,
}

impl Animation {
    pub fn on_complete(&mut self, completion: Completion) {
        self.on_complete = Some(completion);
    }

    #[must_use]
    pub const fn start_time(&self) -> Option<u64> {
        self.start_time
    }

    fn progress(&mut self, now: u64) -> f32 {
        let start = *self.start_time.get_or_insert(now);
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(start);
        (elapsed as f32 / self.duration as f32).clamp(0.0, 1.0)
    }

    fn interpolate(&self, progress: f32) -> f32 {
        self.start_value + (self.end_value - self.start_value) * self.easing.apply(progress)
    }

    /// Maps the current value onto the view while the animation is running.
    fn apply_current(&self, view: &mut View, actions: &mut VecDeque<DisplayAction>) {
        let value = self.current_value;
        match self.kind {
            AnimationKind::Open => {
                view.set_opacity(value);
                view.scale = HIDDEN_SCALE + (1.0 - HIDDEN_SCALE) * value;
            }
            AnimationKind::Close => {
                view.set_opacity(value);
                view.scale = 1.0 - (1.0 - HIDDEN_SCALE) * value;
            }
            AnimationKind::Fade => view.set_opacity(value),
            AnimationKind::Scale => view.scale = value,
            AnimationKind::Slide => return,
        }
        push_effects(view, actions);
    }

    /// Applies the end state of the animation to the view.
    fn apply_terminal(&self, view: &mut View, actions: &mut VecDeque<DisplayAction>) {
        match self.kind {
            AnimationKind::Open => {
                view.set_opacity(1.0);
                view.scale = 1.0;
            }
            AnimationKind::Close => {
                view.set_opacity(0.0);
                view.scale = HIDDEN_SCALE;
                view.visible = false;
                actions.push_back(DisplayAction::SetVisible(view.handle, false));
            }
            AnimationKind::Fade => view.set_opacity(self.end_value),
            AnimationKind::Scale => view.scale = self.end_value,
            AnimationKind::Slide => return,
        }
        push_effects(view, actions);
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("id", &self.id)
            .field("view", &self.view)
            .field("kind", &self.kind)
            .field("easing", &self.easing)
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("current_value", &self.current_value)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

fn push_effects(view: &View, actions: &mut VecDeque<DisplayAction>) {
    actions.push_back(DisplayAction::SetOpacity(view.handle, view.opacity()));
    actions.push_back(DisplayAction::SetScale(view.handle, view.scale));
}

/// Owns every in-flight animation, processed in creation order.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    animations: Vec<Animation>,
    next_id: AnimationId,
}

impl AnimationScheduler {
    /// Starts an animation on a registered view, using the kind's default
    /// easing and value range. Returns `None` if the view is unknown.
    pub fn create(
        &mut self,
        views: &mut ViewRegistry,
        handle: ViewHandle,
        kind: AnimationKind,
        duration: u32,
    ) -> Option<AnimationId> {
        let view = views.get_mut(handle)?;
        view.animating = true;

        self.next_id += 1;
        let id = self.next_id;
        let (start_value, end_value) = kind.range();
        self.animations.push(Animation {
            id,
            view: handle,
            kind,
            easing: kind.default_easing(),
            start_time: None,
            duration,
            start_value,
            end_value,
            current_value: start_value,
            on_complete: None,
        });
        tracing::trace!("Animation {} ({:?}) started on view {}", id, kind, handle);
        Some(id)
    }

    #[must_use]
    pub fn get(&self, id: AnimationId) -> Option<&Animation> {
        self.animations.iter().find(|a| a.id == id)
    }

    pub fn get_mut(&mut self, id: AnimationId) -> Option<&mut Animation> {
        self.animations.iter_mut().find(|a| a.id == id)
    }

    /// Removes an animation without running its completion.
    pub fn destroy(&mut self, views: &mut ViewRegistry, id: AnimationId) -> bool {
        let Some(index) = self.animations.iter().position(|a| a.id == id) else {
            return false;
        };
        let animation = self.animations.remove(index);
        self.settle(views, animation.view);
        true
    }

    /// Drops every animation of a view without running completions. Returns
    /// how many were removed.
    pub fn cancel_for_view(&mut self, handle: ViewHandle) -> usize {
        let before = self.animations.len();
        self.animations.retain(|a| a.view != handle);
        before - self.animations.len()
    }

    /// Advances every animation to `now` (monotonic milliseconds).
    ///
    /// Finished animations get their end state applied, run their completion
    /// and are removed before the next one is processed. Commands returned by
    /// completions are handed back to the caller.
    pub fn tick(
        &mut self,
        now: u64,
        views: &mut ViewRegistry,
        actions: &mut VecDeque<DisplayAction>,
    ) -> Vec<Command> {
        let mut commands = vec![];
        let mut index = 0;
        while index < self.animations.len() {
            let animation = &mut self.animations[index];
            let progress = animation.progress(now);
            if progress < 1.0 {
                animation.current_value = animation.interpolate(progress);
                if let Some(view) = views.get_mut(animation.view) {
                    animation.apply_current(view, actions);
                }
                index += 1;
                continue;
            }

            let mut animation = self.animations.remove(index);
            animation.current_value = animation.end_value;
            if let Some(view) = views.get_mut(animation.view) {
                animation.apply_terminal(view, actions);
            }
            if let Some(completion) = animation.on_complete.take() {
                commands.extend(completion(&animation));
            }
            self.settle(views, animation.view);
        }
        commands
    }

    /// Clears the view's animating flag once nothing animates it anymore.
    fn settle(&self, views: &mut ViewRegistry, handle: ViewHandle) {
        if self.animations.iter().any(|a| a.view == handle) {
            return;
        }
        if let Some(view) = views.get_mut(handle) {
            view.animating = false;
        }
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animation> {
        self.animations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(handles: &[u32]) -> ViewRegistry {
        let mut views = ViewRegistry::default();
        for id in handles {
            views.insert(View::new(ViewHandle(*id), None, None));
        }
        views
    }

    #[test]
    fn creating_on_an_unknown_view_returns_none() {
        let mut views = registry_with(&[]);
        let mut scheduler = AnimationScheduler::default();
        assert!(scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Open, 100)
            .is_none());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn creating_marks_the_view_as_animating_with_default_easing() {
        let mut views = registry_with(&[1]);
        let mut scheduler = AnimationScheduler::default();
        let open = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Open, 100)
            .unwrap();
        let close = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Close, 100)
            .unwrap();
        assert!(views.get(ViewHandle(1)).unwrap().animating);
        let open = scheduler.get(open).unwrap();
        assert_eq!(open.easing, Easing::EaseOut);
        assert!(open.start_time().is_none());
        let close = scheduler.get(close).unwrap();
        assert_eq!(close.easing, Easing::EaseInOut);
        assert!((close.start_value - 1.0).abs() < f32::EPSILON);
        assert!(close.end_value.abs() < f32::EPSILON);
    }

    #[test]
    fn zero_duration_completes_on_the_first_tick() {
        let mut views = registry_with(&[1]);
        let mut scheduler = AnimationScheduler::default();
        let mut actions = VecDeque::new();
        let id = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Fade, 0)
            .unwrap();
        scheduler.get_mut(id).unwrap().end_value = 0.5;
        scheduler.tick(1_000, &mut views, &mut actions);
        assert!(scheduler.is_empty());
        let view = views.get(ViewHandle(1)).unwrap();
        assert!((view.opacity() - 0.5).abs() < f32::EPSILON);
        assert!((view.scale - 1.0).abs() < f32::EPSILON);
        assert!(!view.animating);
        assert_eq!(
            actions.into_iter().collect::<Vec<_>>(),
            vec![
                DisplayAction::SetOpacity(ViewHandle(1), 0.5),
                DisplayAction::SetScale(ViewHandle(1), 1.0),
            ]
        );
    }

    #[test]
    fn open_animation_interpolates_then_completes() {
        let mut views = registry_with(&[1]);
        let mut scheduler = AnimationScheduler::default();
        let mut actions = VecDeque::new();
        let id = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Open, 200)
            .unwrap();

        scheduler.tick(1_000, &mut views, &mut actions);
        assert_eq!(scheduler.get(id).unwrap().start_time(), Some(1_000));
        assert!(views.get(ViewHandle(1)).unwrap().opacity().abs() < f32::EPSILON);

        scheduler.tick(1_100, &mut views, &mut actions);
        let view = views.get(ViewHandle(1)).unwrap();
        assert!((view.opacity() - 0.875).abs() < 1e-5);
        assert!((view.scale - 0.975).abs() < 1e-5);

        scheduler.tick(1_250, &mut views, &mut actions);
        assert!(scheduler.get(id).is_none());
        let view = views.get(ViewHandle(1)).unwrap();
        assert!((view.opacity() - 1.0).abs() < f32::EPSILON);
        assert!((view.scale - 1.0).abs() < f32::EPSILON);
        assert!(!view.animating);
    }

    #[test]
    fn close_animation_hides_the_view_and_runs_its_completion() {
        let mut views = registry_with(&[1]);
        let mut scheduler = AnimationScheduler::default();
        let mut actions = VecDeque::new();
        let id = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Close, 0)
            .unwrap();
        scheduler
            .get_mut(id)
            .unwrap()
            .on_complete(Box::new(|a| vec![Command::KillView(Some(a.view))]));
        let commands = scheduler.tick(5, &mut views, &mut actions);
        assert_eq!(commands, vec![Command::KillView(Some(ViewHandle(1)))]);
        let view = views.get(ViewHandle(1)).unwrap();
        assert!(!view.visible);
        assert!((view.scale - 0.8).abs() < f32::EPSILON);
        assert!(actions.contains(&DisplayAction::SetVisible(ViewHandle(1), false)));
    }

    #[test]
    fn destroying_keeps_the_flag_while_another_animation_remains() {
        let mut views = registry_with(&[1]);
        let mut scheduler = AnimationScheduler::default();
        let first = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Fade, 100)
            .unwrap();
        let second = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Scale, 100)
            .unwrap();
        assert!(scheduler.destroy(&mut views, first));
        assert!(views.get(ViewHandle(1)).unwrap().animating);
        assert!(scheduler.destroy(&mut views, second));
        assert!(!views.get(ViewHandle(1)).unwrap().animating);
        assert!(!scheduler.destroy(&mut views, second));
    }

    #[test]
    fn canceling_a_view_skips_completions() {
        let mut views = registry_with(&[1, 2]);
        let mut scheduler = AnimationScheduler::default();
        let mut actions = VecDeque::new();
        let id = scheduler
            .create(&mut views, ViewHandle(1), AnimationKind::Close, 0)
            .unwrap();
        scheduler
            .get_mut(id)
            .unwrap()
            .on_complete(Box::new(|_| vec![Command::Quit]));
        scheduler.create(&mut views, ViewHandle(2), AnimationKind::Open, 100);
        assert_eq!(scheduler.cancel_for_view(ViewHandle(1)), 1);
        let commands = scheduler.tick(0, &mut views, &mut actions);
        assert!(commands.is_empty());
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn slide_has_no_visual_effect() {
        let mut views = registry_with(&[1]);
        let mut scheduler = AnimationScheduler::default();
        let mut actions = VecDeque::new();
        scheduler.create(&mut views, ViewHandle(1), AnimationKind::Slide, 0);
        scheduler.tick(0, &mut views, &mut actions);
        assert!(actions.is_empty());
        assert!(scheduler.is_empty());
    }
}
