use crate::output_descriptor::OutputDescriptor;
use crate::probe_config::CommandQueueConfig;
use crate::probe_config::FeatureLevel;
use crate::probe_config::SwapchainConfig;

/// What the selector needs to know about an enumerated adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterInfo {
    pub name: String,
    /// Set for the Basic Render Driver and other emulated adapters.
    pub is_software: bool,
}

/// The platform calls the probe is built from.
///
/// Every call blocks until the platform answers. Handles are owned by the caller
/// and released when dropped.
pub trait GraphicsApi {
    type Factory;
    type Adapter;
    type Device;
    type Queue;
    type Swapchain;
    type Window;

    /// Name of the output interface that carries HDR metadata.
    const EXTENDED_OUTPUT_INTERFACE: &'static str;

    /// Returns whether a validation layer is now active. Only valid before any device exists.
    fn enable_debug_layer(&self) -> bool;

    fn create_factory(&self, debug: bool) -> eyre::Result<Self::Factory>;

    /// `Ok(None)` once `index` is past the last adapter.
    fn enum_adapter(
        &self,
        factory: &Self::Factory,
        index: u32,
    ) -> eyre::Result<Option<Self::Adapter>>;

    fn describe_adapter(&self, adapter: &Self::Adapter) -> eyre::Result<AdapterInfo>;

    /// Checks device support at `level` without creating the device.
    fn supports_feature_level(&self, adapter: &Self::Adapter, level: FeatureLevel) -> bool;

    fn create_device(
        &self,
        adapter: &Self::Adapter,
        level: FeatureLevel,
    ) -> eyre::Result<Self::Device>;

    fn create_command_queue(
        &self,
        device: &Self::Device,
        config: &CommandQueueConfig,
    ) -> eyre::Result<Self::Queue>;

    /// The queue is bound so presents can flush it.
    fn create_swapchain(
        &self,
        factory: &Self::Factory,
        queue: &Self::Queue,
        window: &Self::Window,
        config: &SwapchainConfig,
    ) -> eyre::Result<Self::Swapchain>;

    /// `Ok(None)` when the containing output does not expose the extended interface.
    fn read_output_descriptor(
        &self,
        swapchain: &Self::Swapchain,
    ) -> eyre::Result<Option<OutputDescriptor>>;
}
