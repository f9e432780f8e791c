use crate::create_device::create_graphics_context;
use crate::create_swapchain::create_swapchain;
use crate::display_spec_error::FatalError;
use crate::graphics_api::GraphicsApi;
use crate::output_descriptor::read_output_descriptor;
use crate::output_descriptor::OutputDescriptor;
use crate::probe_config::ProbeConfig;
use crate::report::print_report;
use std::io::Write;
use tracing::error;
use tracing::info;

/// Steps of a probe run, in the only order they can happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProbeStage {
    Start,
    AdapterSelected,
    DeviceReady,
    QueueReady,
    SwapchainReady,
    DescriptorRead,
    Reported,
}

impl ProbeStage {
    /// The last stage that completed before `error` was raised.
    pub fn reached_before(error: &FatalError) -> Self {
        match error {
            FatalError::FactoryCreation(_)
            | FatalError::AdapterEnumeration(_)
            | FatalError::NoSuitableAdapter => ProbeStage::Start,
            FatalError::DeviceCreation(_) => ProbeStage::AdapterSelected,
            FatalError::CommandQueueCreation(_) => ProbeStage::DeviceReady,
            FatalError::SwapchainCreation(_) => ProbeStage::QueueReady,
            FatalError::OutputQuery(_) => ProbeStage::SwapchainReady,
            FatalError::ReportOutput(_) => ProbeStage::DescriptorRead,
        }
    }
}

/// Result of a run that reached [`ProbeStage::Reported`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeOutcome {
    pub descriptor: OutputDescriptor,
    pub debug_layer_enabled: bool,
}

/// Runs the whole probe against `window` and writes the report to `out`.
///
/// Nothing reaches `out` unless the swapchain was created.
pub fn run_probe<G: GraphicsApi, W: Write>(
    api: &G,
    window: &G::Window,
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ProbeOutcome, FatalError> {
    run_stages(api, window, config, out).inspect_err(|error| {
        error!(
            "Probe aborted after {:?}: {}",
            ProbeStage::reached_before(error),
            error
        );
    })
}

fn run_stages<G: GraphicsApi, W: Write>(
    api: &G,
    window: &G::Window,
    config: &ProbeConfig,
    out: &mut W,
) -> Result<ProbeOutcome, FatalError> {
    let context = create_graphics_context(api, config)?;
    info!("Stage: {:?}", ProbeStage::QueueReady);

    let swap_chain = create_swapchain(api, &context, window, &config.swapchain)?;
    info!("Stage: {:?}", ProbeStage::SwapchainReady);

    let descriptor = read_output_descriptor(api, &swap_chain, out)?;
    info!("Stage: {:?}", ProbeStage::DescriptorRead);

    print_report(out, &descriptor).map_err(FatalError::ReportOutput)?;
    info!("Stage: {:?}", ProbeStage::Reported);

    Ok(ProbeOutcome {
        descriptor,
        debug_layer_enabled: context.debug_layer_enabled,
    })
}
