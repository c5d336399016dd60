//! Scroll-to-top action and the viewport scroll primitive it drives

/// How the viewport moves to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump straight to the target
    Instant,
    /// Animate toward the target
    Smooth,
}

/// Target offset for the viewport, in rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: u16,
    pub left: u16,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Smoothly back to the origin
    pub fn top() -> Self {
        Self {
            top: 0,
            left: 0,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Platform capability that moves the visible scroll position
#[cfg_attr(test, mockall::automock)]
pub trait ViewportScroller {
    fn scroll_to(&mut self, request: ScrollRequest);
}

/// Stateless one-shot scroll actions
pub struct ScrollController;

impl ScrollController {
    /// Request a smooth scroll to `(0, 0)`.
    ///
    /// Issues exactly one request per call. Without a scroller this does
    /// nothing.
    pub fn scroll_to_top(scroller: Option<&mut dyn ViewportScroller>) {
        match scroller {
            Some(scroller) => scroller.scroll_to(ScrollRequest::top()),
            None => tracing::debug!("no viewport scroller available, skipping scroll to top"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_top_request_is_smooth_origin() {
        let request = ScrollRequest::top();
        assert_eq!(request.top, 0);
        assert_eq!(request.left, 0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_scroll_to_top_requests_origin_once() {
        let mut scroller = MockViewportScroller::new();
        scroller
            .expect_scroll_to()
            .with(eq(ScrollRequest::top()))
            .times(1)
            .return_const(());

        ScrollController::scroll_to_top(Some(&mut scroller));
    }

    #[test]
    fn test_each_call_issues_a_request() {
        let mut scroller = MockViewportScroller::new();
        scroller
            .expect_scroll_to()
            .with(eq(ScrollRequest::top()))
            .times(3)
            .return_const(());

        for _ in 0..3 {
            ScrollController::scroll_to_top(Some(&mut scroller));
        }
    }

    #[test]
    fn test_missing_scroller_is_a_no_op() {
        ScrollController::scroll_to_top(None);
    }
}
