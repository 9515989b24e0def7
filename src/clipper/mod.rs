//! Line and polygon clipping.
//!
//! Three cooperating pieces:
//!
//! - [`line`]: Cohen-Sutherland clipping of a segment against an
//!   axis-aligned box, and clipping of a segment against a single
//!   half-space.
//! - [`polygon`]: Sutherland-Hodgman clipping of a convex polygon against
//!   a sequence of planes, with fan re-triangulation.
//! - [`frustum`]: the six camera-space view-frustum planes and the clip
//!   drivers the render pass calls.

pub mod frustum;
pub mod line;
pub mod polygon;

pub use frustum::Frustum;
pub use polygon::Polygon;
