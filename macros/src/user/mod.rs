//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[policy]` | on `impl Policy<W> for X` | Default every unwritten knob |
//! | `#[derive(Interoperable)]` | on struct | Declare comparable cursor pairs |

mod interoperable;
mod policy;

pub use interoperable::expand_derive_interoperable;
pub use policy::expand_policy;
