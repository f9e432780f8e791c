use crate::graphics_api::GraphicsApi;

/// The factory, device and queue behind one probe run.
///
/// Only ever built whole: if the device or queue fails the run has already ended.
pub struct GraphicsContext<G: GraphicsApi> {
    pub factory: G::Factory,
    pub device: G::Device,
    pub command_queue: G::Queue,
    pub debug_layer_enabled: bool,
}
