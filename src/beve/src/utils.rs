mod io;
pub use io::*;

mod serde;
pub use serde::*;
