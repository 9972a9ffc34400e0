//! Session lifecycle: the state machine, its presentation view, the
//! navigation guard, the async timer driver, and the Python wrapper

mod bindings;
mod driver;
mod guard;
mod machine;
mod view;

pub use bindings::*;
pub use driver::*;
pub use guard::*;
pub use machine::*;
pub use view::*;
