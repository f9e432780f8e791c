// Scripted GraphicsApi shared by the integration tests.
#![allow(dead_code)]

use d3d_display_spec::color_space::ColorSpace;
use d3d_display_spec::graphics_api::AdapterInfo;
use d3d_display_spec::graphics_api::GraphicsApi;
use d3d_display_spec::output_descriptor::OutputDescriptor;
use d3d_display_spec::probe_config::CommandQueueConfig;
use d3d_display_spec::probe_config::FeatureLevel;
use d3d_display_spec::probe_config::SwapchainConfig;
use eyre::eyre;
use std::cell::RefCell;

#[derive(Clone, Debug)]
pub struct FakeAdapter {
    pub name: String,
    pub is_software: bool,
    pub supports_minimum_level: bool,
}

pub fn hardware(name: &str) -> FakeAdapter {
    FakeAdapter {
        name: name.to_string(),
        is_software: false,
        supports_minimum_level: true,
    }
}

pub fn warp() -> FakeAdapter {
    FakeAdapter {
        name: "Microsoft Basic Render Driver".to_string(),
        is_software: true,
        supports_minimum_level: true,
    }
}

pub fn legacy(name: &str) -> FakeAdapter {
    FakeAdapter {
        name: name.to_string(),
        is_software: false,
        supports_minimum_level: false,
    }
}

pub fn hdr10_descriptor() -> OutputDescriptor {
    OutputDescriptor {
        device_name: r"\\.\DISPLAY1".to_string(),
        color_space: ColorSpace::RGB_FULL_G2084_NONE_P2020,
        red_primary: [0.64, 0.33],
        green_primary: [0.3, 0.6],
        blue_primary: [0.15, 0.06],
        white_point: [0.3125, 0.329],
        min_luminance: 0.5,
        max_luminance: 1499.0,
        max_full_frame_luminance: 799.0,
        bits_per_color: 10,
    }
}

pub struct ScriptedApi {
    pub adapters: Vec<FakeAdapter>,
    pub debug_layer_available: bool,
    pub fail_enum: bool,
    pub fail_device: bool,
    pub fail_queue: bool,
    pub fail_swapchain: bool,
    /// Containing output lookup or `GetDesc1` failing.
    pub fail_output: bool,
    /// `None` models an output without the extended interface.
    pub output: Option<OutputDescriptor>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn new(adapters: Vec<FakeAdapter>) -> Self {
        Self {
            adapters,
            debug_layer_available: true,
            fail_enum: false,
            fail_device: false,
            fail_queue: false,
            fail_swapchain: false,
            fail_output: false,
            output: Some(hdr10_descriptor()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|call| call.starts_with(prefix))
    }

    pub fn position(&self, prefix: &str) -> Option<usize> {
        self.calls
            .borrow()
            .iter()
            .position(|call| call.starts_with(prefix))
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

pub struct FakeFactory {
    pub debug: bool,
}

pub struct FakeDevice {
    pub adapter: String,
}

pub struct FakeQueue {
    pub config: CommandQueueConfig,
}

pub struct FakeSwapchain {
    pub window: u32,
    pub config: SwapchainConfig,
}

impl GraphicsApi for ScriptedApi {
    type Factory = FakeFactory;
    type Adapter = FakeAdapter;
    type Device = FakeDevice;
    type Queue = FakeQueue;
    type Swapchain = FakeSwapchain;
    type Window = u32;

    const EXTENDED_OUTPUT_INTERFACE: &'static str = "IDXGIOutput6";

    fn enable_debug_layer(&self) -> bool {
        self.record("enable_debug_layer".to_string());
        self.debug_layer_available
    }

    fn create_factory(&self, debug: bool) -> eyre::Result<FakeFactory> {
        self.record(format!("create_factory debug={debug}"));
        Ok(FakeFactory { debug })
    }

    fn enum_adapter(&self, _factory: &FakeFactory, index: u32) -> eyre::Result<Option<FakeAdapter>> {
        self.record(format!("enum_adapter {index}"));
        if self.fail_enum {
            return Err(eyre!("DXGI_ERROR_INVALID_CALL"));
        }
        Ok(self.adapters.get(index as usize).cloned())
    }

    fn describe_adapter(&self, adapter: &FakeAdapter) -> eyre::Result<AdapterInfo> {
        Ok(AdapterInfo {
            name: adapter.name.clone(),
            is_software: adapter.is_software,
        })
    }

    fn supports_feature_level(&self, adapter: &FakeAdapter, _level: FeatureLevel) -> bool {
        self.record(format!("probe {}", adapter.name));
        adapter.supports_minimum_level
    }

    fn create_device(&self, adapter: &FakeAdapter, level: FeatureLevel) -> eyre::Result<FakeDevice> {
        self.record(format!("create_device {} {:?}", adapter.name, level));
        if self.fail_device {
            return Err(eyre!("DXGI_ERROR_DEVICE_REMOVED"));
        }
        Ok(FakeDevice {
            adapter: adapter.name.clone(),
        })
    }

    fn create_command_queue(
        &self,
        _device: &FakeDevice,
        config: &CommandQueueConfig,
    ) -> eyre::Result<FakeQueue> {
        self.record(format!("create_command_queue {:?}", config.kind));
        if self.fail_queue {
            return Err(eyre!("E_OUTOFMEMORY"));
        }
        Ok(FakeQueue { config: *config })
    }

    fn create_swapchain(
        &self,
        _factory: &FakeFactory,
        _queue: &FakeQueue,
        window: &u32,
        config: &SwapchainConfig,
    ) -> eyre::Result<FakeSwapchain> {
        self.record(format!(
            "create_swapchain window={} {}x{}x{} {:?}",
            window, config.buffer_count, config.width, config.height, config.format
        ));
        if self.fail_swapchain {
            return Err(eyre!("DXGI_ERROR_INVALID_CALL"));
        }
        Ok(FakeSwapchain {
            window: *window,
            config: *config,
        })
    }

    fn read_output_descriptor(
        &self,
        _swapchain: &FakeSwapchain,
    ) -> eyre::Result<Option<OutputDescriptor>> {
        self.record("read_output_descriptor".to_string());
        if self.fail_output {
            return Err(eyre!("DXGI_ERROR_NOT_FOUND"));
        }
        Ok(self.output.clone())
    }
}
