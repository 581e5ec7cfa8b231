pub const EVADE_MARGIN_DEFAULT: f64 = 80.0;
pub const EVADE_TRANSITION: &str = "transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1)";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Span available for a random draw on one axis. Collapses to zero when the
/// axis is smaller than both margins together.
pub fn safe_span(dimension: f64, margin: f64) -> f64 {
    (dimension - 2.0 * margin).max(0.0)
}

/// Maps unit samples in `[0, 1)` to an absolute target centre that keeps
/// `margin` away from every viewport edge.
pub fn pick_target(viewport: Viewport, margin: f64, sample: (f64, f64)) -> (f64, f64) {
    let margin = margin.max(0.0);
    let unit_x = sample.0.clamp(0.0, 1.0);
    let unit_y = sample.1.clamp(0.0, 1.0);
    (
        unit_x * safe_span(viewport.width, margin) + margin,
        unit_y * safe_span(viewport.height, margin) + margin,
    )
}

/// Display state of the escaping button. `offset` is measured from the
/// button's original layout slot, not from where it is currently drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvadeState {
    pub offset: (f64, f64),
    pub moved: bool,
}

impl EvadeState {
    /// `bounds` is the on-screen box as rendered right now, which already
    /// includes the current offset.
    pub fn relocate(
        &mut self,
        bounds: Rect,
        viewport: Viewport,
        margin: f64,
        sample: (f64, f64),
    ) -> (f64, f64) {
        let (current_x, current_y) = bounds.center();
        let (target_x, target_y) = pick_target(viewport, margin, sample);
        let delta = (target_x - current_x, target_y - current_y);
        self.offset.0 += delta.0;
        self.offset.1 += delta.1;
        self.moved = true;
        delta
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.offset.0, self.offset.1)
    }

    pub fn transition(&self) -> &'static str {
        if self.moved { EVADE_TRANSITION } else { "none" }
    }

    pub fn style(&self) -> String {
        format!("transform: {}; transition: {};", self.transform(), self.transition())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_render_has_no_transition() {
        let state = EvadeState::default();
        assert_eq!(state.style(), "transform: translate(0px, 0px); transition: none;");
    }

    #[test]
    fn small_viewport_collapses_to_margin() {
        let viewport = Viewport {
            width: 120.0,
            height: 40.0,
        };
        assert_eq!(safe_span(viewport.width, 80.0), 0.0);
        assert_eq!(pick_target(viewport, 80.0, (0.9, 0.5)), (80.0, 80.0));
    }
}
