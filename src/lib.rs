mod app;
mod app_state;
mod cube;
mod renderer;
mod scene;
mod state;
mod vertex;

pub mod math;

// Re-export the main public interface
pub use app::run;
pub use vertex::Vertex;
