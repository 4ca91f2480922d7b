// Pure, DOM-free logic. Each file here only depends on external crates so the
// host tests can `include!` it directly.
pub mod content;
pub mod live;
pub mod motion;
pub mod reveal;
pub mod selection;
pub mod slot;
pub mod stagger;
pub mod transform;

pub use content::*;
pub use live::*;
pub use motion::*;
pub use reveal::*;
pub use selection::*;
pub use slot::*;
pub use stagger::*;
pub use transform::*;
