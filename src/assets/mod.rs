//! Prepared-input types and the decode edge.
//!
//! All IO and decoding is front-loaded here; the layout, plan, and render
//! stages only ever see prepared, fully-decoded handles.

/// Image/SVG/font decoding into prepared handles.
pub mod decode;
/// Prepared handles, capture ordering, text layout engine.
pub mod store;
