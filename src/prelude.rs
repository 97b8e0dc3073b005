//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::experiment::{Experiment, ExperimentState, Summary};
#[doc(no_inline)]
pub use crate::geometry::{Circle, Point, Square};
#[doc(no_inline)]
pub use crate::random::{uniform, uniform_int, unit};
#[doc(no_inline)]
pub use crate::result::{Error, ErrorKind};
#[doc(no_inline)]
pub use crate::trial::Trial;
