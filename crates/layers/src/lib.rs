pub mod feature_layer;
pub mod layer;
pub mod svg;
pub mod symbology;
pub mod tooltip;
pub mod transition;

pub use feature_layer::*;
pub use layer::*;
pub use svg::*;
pub use symbology::*;
pub use tooltip::*;
pub use transition::*;
