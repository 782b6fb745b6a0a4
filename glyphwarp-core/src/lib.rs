//! Parametric block letters: schema, typed parameters, geometry and
//! rendering.
//!
//! ```no_run
//! use glyphwarp_core::{Letter, ParamMap, ParamSchema, Renderer};
//!
//! let schema = ParamSchema::builtin();
//! let mut renderer = Renderer::new(&schema)?;
//! let mut params = ParamMap::new();
//! params.insert("shear_x".into(), 20.0);
//! let glyph = renderer.render(Letter::A, &params)?;
//! assert_eq!(glyph.dims(), (200, 200));
//! # Ok::<(), glyphwarp_core::CoreError>(())
//! ```

pub mod error;
pub mod explore;
pub mod letter;
pub mod letters;
pub mod params;
pub mod render;
pub mod schema;

pub use error::{CoreError, SchemaError};
pub use letter::Letter;
pub use params::{KeyPolicy, LetterParams, ParamMap, resolve};
pub use render::Renderer;
pub use schema::{Limits, ParamSchema, ParamValue};
