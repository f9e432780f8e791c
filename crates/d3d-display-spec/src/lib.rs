pub mod adapter_utils;
pub mod color_space;
pub mod create_device;
pub mod create_swapchain;
#[cfg(windows)]
pub mod d3d12_api;
pub mod display_spec_error;
pub mod graphics_api;
pub mod graphics_context;
pub mod output_descriptor;
pub mod probe;
pub mod probe_config;
pub mod report;
