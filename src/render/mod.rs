//! Favicon link renderer and stylesheet builder
//!
//! [`render`] turns one [`RenderRequest`] into anchor markup; [`build_css`]
//! produces the companion stylesheet for a [`StyleContext`].

pub mod css;
pub mod escape;
pub mod markup;
pub mod request;

pub use css::{build_css, css_rules, StyleContext, TypographyPreset};
pub use markup::{render, Rendered, CLASS_NAME};
pub use request::{RenderRequest, ResolvedIcon, SizeDecision};
