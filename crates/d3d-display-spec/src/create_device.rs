use crate::adapter_utils::select_adapter;
use crate::display_spec_error::FatalError;
use crate::graphics_api::GraphicsApi;
use crate::graphics_context::GraphicsContext;
use crate::probe_config::ProbeConfig;
use tracing::info;
use tracing::warn;

/// Create the factory, pick an adapter, then create the device and its direct queue.
pub fn create_graphics_context<G: GraphicsApi>(
    api: &G,
    config: &ProbeConfig,
) -> Result<GraphicsContext<G>, FatalError> {
    // Has to happen before the device exists.
    let mut debug_layer_enabled = false;
    if config.enable_debug_layer {
        debug_layer_enabled = api.enable_debug_layer();
        if debug_layer_enabled {
            info!("D3D12 Debug Layer Enabled");
        } else {
            warn!("Warning: D3D12 Debug Layer unavailable.");
        }
    }

    let factory = api
        .create_factory(debug_layer_enabled)
        .map_err(FatalError::FactoryCreation)?;

    let adapter = select_adapter(api, &factory, config.minimum_feature_level)?;
    let (device, command_queue) = init_device(api, adapter.as_ref(), config)?;

    Ok(GraphicsContext {
        factory,
        device,
        command_queue,
        debug_layer_enabled,
    })
}

/// Creates the device at the minimum feature level and a single queue on it.
pub fn init_device<G: GraphicsApi>(
    api: &G,
    adapter: Option<&G::Adapter>,
    config: &ProbeConfig,
) -> Result<(G::Device, G::Queue), FatalError> {
    let adapter = adapter.ok_or(FatalError::NoSuitableAdapter)?;

    let device = api
        .create_device(adapter, config.minimum_feature_level)
        .map_err(FatalError::DeviceCreation)?;
    info!("Device ready at {:?}", config.minimum_feature_level);

    let command_queue = api
        .create_command_queue(&device, &config.command_queue)
        .map_err(FatalError::CommandQueueCreation)?;
    info!("{:?} command queue ready", config.command_queue.kind);

    Ok((device, command_queue))
}
