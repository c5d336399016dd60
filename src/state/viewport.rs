//! Page viewport with smooth scroll animation

use super::scroll::{ScrollBehavior, ScrollRequest, ViewportScroller};
use std::time::{Duration, Instant};

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

/// Vertical scroll position of the page shell
///
/// The page has no horizontal scrolling, so the `left` part of a request is
/// ignored.
#[derive(Debug)]
pub struct PageViewport {
    /// Current offset in rows (fractional while animating)
    offset: f32,
    /// Total rows of page content
    content_height: u16,
    /// Rows visible on screen
    viewport_height: u16,
    animation: Option<ScrollAnimation>,
}

impl PageViewport {
    /// Duration of a smooth scroll
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub fn new() -> Self {
        Self {
            offset: 0.0,
            content_height: 0,
            viewport_height: 0,
            animation: None,
        }
    }

    /// Update page and screen sizes, clamping the offset to the new range
    pub fn set_dimensions(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset() as f32;
        if self.offset > max {
            self.offset = max;
        }
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(max);
        }
    }

    /// Largest offset that still fills the screen
    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Current offset rounded to whole rows
    pub fn offset(&self) -> u16 {
        self.offset.round() as u16
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Scroll by a number of rows immediately, cancelling any animation
    pub fn scroll_by(&mut self, rows: i32) {
        self.animation = None;
        let target = (self.offset() as i32 + rows).clamp(0, self.max_offset() as i32);
        self.offset = target as f32;
    }

    /// Jump to the end of the page
    pub fn scroll_to_bottom(&mut self) {
        let top = self.max_offset();
        self.scroll_to(ScrollRequest {
            top,
            left: 0,
            behavior: ScrollBehavior::Instant,
        });
    }

    /// Advance the animation to the current time
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the animation to `now`
    pub fn tick_at(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };

        let elapsed = now.saturating_duration_since(animation.started);
        if elapsed >= Self::ANIMATION_DURATION {
            self.offset = animation.to;
            self.animation = None;
            return;
        }

        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        self.offset = animation.from + (animation.to - animation.from) * eased;
    }

    fn start_animation(&mut self, target: f32, now: Instant) {
        if (self.offset - target).abs() < f32::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            started: now,
        });
    }
}

impl Default for PageViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportScroller for PageViewport {
    fn scroll_to(&mut self, request: ScrollRequest) {
        let target = request.top.min(self.max_offset()) as f32;
        tracing::debug!(
            from = self.offset,
            to = target,
            left = request.left,
            behavior = ?request.behavior,
            "viewport scroll"
        );
        match request.behavior {
            ScrollBehavior::Instant => {
                self.animation = None;
                self.offset = target;
            }
            ScrollBehavior::Smooth => self.start_animation(target, Instant::now()),
        }
    }
}
