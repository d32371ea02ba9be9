use crate::draw::{render_background, render_steps};
use crate::input::SurfaceError;
use crate::util::Rect;

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Paints the background and every visible step onto `ctx`.
    ///
    /// Reads history only. The output depends on nothing but the current
    /// visible prefix, so hosts may call it after every mutation.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, self.background_color);
        render_steps(ctx, self.history.visible_prefix());
    }

    /// Renders the surface into a fresh ARGB image of the given size.
    ///
    /// # Errors
    /// [`SurfaceError::Render`] if Cairo cannot allocate the image or context.
    pub fn render_to_image(
        &self,
        width: i32,
        height: i32,
    ) -> Result<cairo::ImageSurface, SurfaceError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        {
            let ctx = cairo::Context::new(&surface)?;
            self.render(&ctx);
        }
        surface.flush();
        Ok(surface)
    }

    /// Damage hint for the step the current gesture is reshaping.
    ///
    /// # Returns
    /// - `Some(Rect)` covering the active step, stroke width included
    /// - `None` if idle, awaiting a label, or the step draws nothing
    pub fn active_bounds(&self) -> Option<Rect> {
        let DrawingState::Drawing { step } = &self.state else {
            return None;
        };
        let step = self.history.visible_prefix().get(*step)?;
        step.shape.bounding_box(&step.paint)
    }

    /// Clears the redraw flag, returning whether a redraw was pending.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
