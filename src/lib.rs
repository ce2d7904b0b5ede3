pub mod global_variables;
pub mod map_renderer;
pub mod panels;
pub mod shared_data;
pub mod simulation_engine;
