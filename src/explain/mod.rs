mod reasoning;
mod tags;

pub use reasoning::build_reasoning;
pub use tags::recommendation_tags;
