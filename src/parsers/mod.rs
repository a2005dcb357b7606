pub mod notes;

pub mod prelude {
    pub use super::notes::prelude::*;
}
