/*! Gate checks and their configuration.

A check decides whether a given item opens the gate.
Checks implement [Check], which is implemented for every `FnMut(&T) -> bool` closure,
so most callers never have to name the trait.

Checks can also be passed wrapped in [Options], which additionally carries the stage name
used in logs and error messages. [Options] are validated once, when building the gate.
! */
mod check;
mod options;

pub use check::BoxedCheck;
pub use check::Check;
pub use options::Options;
pub use options::DEFAULT_NAME;
