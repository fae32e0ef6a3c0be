//! Widget builders consumed by the render layer

pub mod model_list;
pub mod status_bar;
