//! Reusable HTML components
//!
//! Maud component functions for the pieces of the site that are rendered
//! outside the markdown pipeline: the standalone preview document wrapping
//! rendered post markup, and the dashboard views chart.

pub mod chart;
pub mod layout;
