pub use islandsim_core::{FaunaLogic, FloraLogic, Lifeform};
pub mod config {
    pub use islandsim_core::config::*;
}
pub mod ecosystem {
    pub use islandsim_core::ecosystem::*;
}
pub mod environment {
    pub use islandsim_core::environment::*;
}
pub mod fauna {
    pub use islandsim_core::fauna::*;
}
pub mod flora {
    pub use islandsim_core::flora::*;
}
pub mod lifecycle {
    pub use islandsim_core::lifecycle::*;
}
pub mod metrics {
    pub use islandsim_core::metrics::*;
}
pub mod species {
    pub use islandsim_core::species::*;
}
pub mod systems {
    pub use islandsim_core::systems::*;
}

pub mod state {
    pub use islandsim_data::*;
}
