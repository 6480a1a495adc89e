use crate::animation::{AnimationId, AnimationKind, Completion};
use crate::errors::{OcwmError, Result};
use crate::models::ViewHandle;
use crate::{DisplayAction, State};

impl State {
    /// Plays the open animation, or shows the view at full size right away
    /// while effects are off.
    pub fn animate_open(&mut self, handle: ViewHandle) -> Option<AnimationId> {
        if !self.effects.enabled {
            let view = self.views.get_mut(handle)?;
            view.set_opacity(1.0);
            view.scale = 1.0;
            self.push_effects(handle);
            return None;
        }
        let view = self.views.get_mut(handle)?;
        view.set_opacity(0.0);
        view.scale = 0.8;
        self.push_effects(handle);
        let duration = self.effects.open_duration;
        self.animations
            .create(&mut self.views, handle, AnimationKind::Open, duration)
    }

    /// Plays the close animation and runs `completion` once it ends. With
    /// effects off the view is hidden at once, `completion` is dropped and
    /// `None` is returned.
    pub fn animate_close(
        &mut self,
        handle: ViewHandle,
        completion: Option<Completion>,
    ) -> Option<AnimationId> {
        if !self.effects.enabled {
            let view = self.views.get_mut(handle)?;
            view.set_opacity(0.0);
            view.scale = 0.8;
            self.push_effects(handle);
            self.set_view_visible(handle, false);
            return None;
        }
        let duration = self.effects.close_duration;
        let id = self
            .animations
            .create(&mut self.views, handle, AnimationKind::Close, duration)?;
        if let (Some(completion), Some(animation)) = (completion, self.animations.get_mut(id)) {
            animation.on_complete(completion);
        }
        Some(id)
    }

    /// Advances animations to the frame time. Ignored while effects are off.
    pub fn tick_animations(&mut self, now: u64) {
        if !self.effects.enabled || self.animations.is_empty() {
            return;
        }
        let commands = self
            .animations
            .tick(now, &mut self.views, &mut self.actions);
        self.deferred.extend(commands);
    }

    /// Turning effects off leaves in-flight animations frozen until they are
    /// turned back on.
    pub fn set_effects_enabled(&mut self, enabled: bool) {
        self.effects.enabled = enabled;
        tracing::debug!("Effects {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Durations are in milliseconds. `close: None` keeps the current close
    /// duration.
    ///
    /// # Errors
    ///
    /// Rejects negative durations, and ones too long to represent, without
    /// changing anything.
    pub fn set_animation_durations(&mut self, open: i64, close: Option<i64>) -> Result<()> {
        let open = duration_ms(open)?;
        let close = close.map(duration_ms).transpose()?;
        self.effects.open_duration = open;
        if let Some(close) = close {
            self.effects.close_duration = close;
        }
        Ok(())
    }

    fn push_effects(&mut self, handle: ViewHandle) {
        if let Some(view) = self.views.get(handle) {
            self.actions
                .push_back(DisplayAction::SetOpacity(handle, view.opacity()));
            self.actions
                .push_back(DisplayAction::SetScale(handle, view.scale));
        }
    }
}

fn duration_ms(value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        OcwmError::InvalidParameter(format!("animation duration must be non-negative, got {value}"))
    })
}
