mod plan;
mod properties;
