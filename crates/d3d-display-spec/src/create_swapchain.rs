use crate::display_spec_error::FatalError;
use crate::graphics_api::GraphicsApi;
use crate::graphics_context::GraphicsContext;
use crate::probe_config::SwapchainConfig;
use tracing::info;

pub fn create_swapchain<G: GraphicsApi>(
    api: &G,
    context: &GraphicsContext<G>,
    window: &G::Window,
    config: &SwapchainConfig,
) -> Result<G::Swapchain, FatalError> {
    let swap_chain = api
        .create_swapchain(&context.factory, &context.command_queue, window, config)
        .map_err(FatalError::SwapchainCreation)?;
    info!(
        "Swapchain ready: {} x {}x{} {:?}",
        config.buffer_count, config.width, config.height, config.format
    );
    Ok(swap_chain)
}
