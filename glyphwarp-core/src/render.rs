//! Rendering: resolve parameters, draw the skeleton, thicken.

use glyphwarp_graphics::types::LOGICAL_SIZE;
use glyphwarp_graphics::{Canvas, Raster, dilate};
use log::debug;

use crate::error::CoreError;
use crate::letter::Letter;
use crate::params::{KeyPolicy, LetterParams, ParamMap, resolve};
use crate::schema::ParamSchema;

/// Renders glyphs onto one reusable 200×200 canvas.
///
/// Every render clears the canvas first, so results never depend on what
/// was drawn before.
#[derive(Debug)]
pub struct Renderer<'s> {
    schema: &'s ParamSchema,
    canvas: Canvas,
    policy: KeyPolicy,
}

impl<'s> Renderer<'s> {
    /// Create a renderer with the lenient key policy.
    ///
    /// # Errors
    ///
    /// Propagates canvas allocation failures.
    pub fn new(schema: &'s ParamSchema) -> Result<Self, CoreError> {
        Ok(Self {
            schema,
            canvas: Canvas::new(LOGICAL_SIZE, LOGICAL_SIZE)?,
            policy: KeyPolicy::default(),
        })
    }

    #[must_use]
    pub fn with_policy(mut self, policy: KeyPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn schema(&self) -> &'s ParamSchema {
        self.schema
    }

    /// Render `letter` with `params` layered over the schema defaults.
    ///
    /// # Errors
    ///
    /// Fails on unknown keys under [`KeyPolicy::Strict`] and on invalid
    /// thickness.
    pub fn render(&mut self, letter: Letter, params: &ParamMap) -> Result<Raster, CoreError> {
        let resolved = resolve(self.schema, letter, params, self.policy)?;
        self.render_params(&resolved)
    }

    /// Render already-typed parameters, bypassing the schema.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Graphics`] if `thickness < 1`.
    pub fn render_params(&mut self, params: &LetterParams) -> Result<Raster, CoreError> {
        params.draw(&mut self.canvas);
        let skeleton_pixels = self.canvas.as_raster().count_foreground();
        let glyph = dilate(self.canvas.as_raster(), params.thickness())?;
        debug!(
            "rendered {}: {skeleton_pixels} skeleton px, {} glyph px",
            params.letter(),
            glyph.count_foreground()
        );
        Ok(glyph)
    }

    /// Render `letter` with every parameter at its schema default.
    ///
    /// # Errors
    ///
    /// As [`render`](Self::render).
    pub fn canonical(&mut self, letter: Letter) -> Result<Raster, CoreError> {
        self.render(letter, &ParamMap::new())
    }

    /// The undilated skeleton left on the canvas by the last render.
    #[must_use]
    pub const fn skeleton_raster(&self) -> &Raster {
        self.canvas.as_raster()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
