use crate::color_space::ColorSpace;
use crate::display_spec_error::IntoReport;
use crate::display_spec_error::WrappedWindowsError;
use crate::graphics_api::AdapterInfo;
use crate::graphics_api::GraphicsApi;
use crate::output_descriptor::decode_wide_name;
use crate::output_descriptor::OutputDescriptor;
use crate::probe_config::CommandQueueConfig;
use crate::probe_config::CommandQueueKind;
use crate::probe_config::FeatureLevel;
use crate::probe_config::PixelFormat;
use crate::probe_config::SwapEffect;
use crate::probe_config::SwapchainConfig;
use eyre::bail;
use eyre::eyre;
use tracing::debug;
use windows::core::Interface;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D::*;
use windows::Win32::Graphics::Direct3D12::*;
use windows::Win32::Graphics::Dxgi::Common::*;
use windows::Win32::Graphics::Dxgi::*;
use windows::Win32::System::Console::GetConsoleWindow;

/// Direct3D 12 over DXGI.
pub struct D3d12Api;

impl GraphicsApi for D3d12Api {
    type Factory = IDXGIFactory4;
    type Adapter = IDXGIAdapter1;
    type Device = ID3D12Device;
    type Queue = ID3D12CommandQueue;
    type Swapchain = IDXGISwapChain4;
    type Window = HWND;

    const EXTENDED_OUTPUT_INTERFACE: &'static str = "IDXGIOutput6";

    fn enable_debug_layer(&self) -> bool {
        // Requires the Graphics Tools optional feature.
        unsafe {
            let mut debug: Option<ID3D12Debug> = None;
            if let Some(debug) = D3D12GetDebugInterface(&mut debug).ok().and(debug) {
                debug.EnableDebugLayer();
                true
            } else {
                false
            }
        }
    }

    fn create_factory(&self, debug: bool) -> eyre::Result<IDXGIFactory4> {
        let flags = if debug {
            DXGI_CREATE_FACTORY_DEBUG
        } else {
            DXGI_CREATE_FACTORY_FLAGS(0)
        };
        unsafe { CreateDXGIFactory2::<IDXGIFactory4>(flags) }.into_report()
    }

    fn enum_adapter(
        &self,
        factory: &IDXGIFactory4,
        index: u32,
    ) -> eyre::Result<Option<IDXGIAdapter1>> {
        match unsafe { factory.EnumAdapters1(index) } {
            Ok(adapter) => Ok(Some(adapter)),
            Err(e) if e.code() == DXGI_ERROR_NOT_FOUND => Ok(None), // No more adapters
            Err(e) => Err(WrappedWindowsError::from(e).into()),
        }
    }

    fn describe_adapter(&self, adapter: &IDXGIAdapter1) -> eyre::Result<AdapterInfo> {
        let desc = unsafe { adapter.GetDesc1() }.into_report()?;
        Ok(AdapterInfo {
            name: decode_wide_name(&desc.Description),
            is_software: (DXGI_ADAPTER_FLAG(desc.Flags as i32) & DXGI_ADAPTER_FLAG_SOFTWARE)
                != DXGI_ADAPTER_FLAG_NONE,
        })
    }

    fn supports_feature_level(&self, adapter: &IDXGIAdapter1, level: FeatureLevel) -> bool {
        unsafe {
            D3D12CreateDevice(
                adapter,
                d3d_feature_level(level),
                std::ptr::null_mut::<Option<ID3D12Device>>(),
            )
        }
        .is_ok()
    }

    fn create_device(
        &self,
        adapter: &IDXGIAdapter1,
        level: FeatureLevel,
    ) -> eyre::Result<ID3D12Device> {
        let mut device: Option<ID3D12Device> = None;
        unsafe { D3D12CreateDevice(adapter, d3d_feature_level(level), &mut device) }
            .into_report()?;
        device.ok_or_else(|| eyre!("D3D12CreateDevice succeeded without returning a device"))
    }

    fn create_command_queue(
        &self,
        device: &ID3D12Device,
        config: &CommandQueueConfig,
    ) -> eyre::Result<ID3D12CommandQueue> {
        let desc = D3D12_COMMAND_QUEUE_DESC {
            Type: command_list_type(config.kind),
            Flags: D3D12_COMMAND_QUEUE_FLAG_NONE,
            ..Default::default()
        };
        unsafe { device.CreateCommandQueue::<ID3D12CommandQueue>(&desc) }.into_report()
    }

    fn create_swapchain(
        &self,
        factory: &IDXGIFactory4,
        queue: &ID3D12CommandQueue,
        window: &HWND,
        config: &SwapchainConfig,
    ) -> eyre::Result<IDXGISwapChain4> {
        let swap_chain_desc = DXGI_SWAP_CHAIN_DESC1 {
            BufferCount: config.buffer_count,
            Width: config.width,
            Height: config.height,
            Format: dxgi_format(config.format),
            BufferUsage: DXGI_USAGE_RENDER_TARGET_OUTPUT,
            SwapEffect: dxgi_swap_effect(config.swap_effect),
            SampleDesc: DXGI_SAMPLE_DESC {
                Count: config.sample_count,
                ..Default::default()
            },
            ..Default::default()
        };

        let swap_chain_base: IDXGISwapChain1 = unsafe {
            factory.CreateSwapChainForHwnd(queue, *window, &swap_chain_desc, None, None)
        }
        .into_report()?;
        swap_chain_base.cast::<IDXGISwapChain4>().into_report()
    }

    fn read_output_descriptor(
        &self,
        swapchain: &IDXGISwapChain4,
    ) -> eyre::Result<Option<OutputDescriptor>> {
        let output: IDXGIOutput = unsafe { swapchain.GetContainingOutput() }.into_report()?;
        let output6: IDXGIOutput6 = match output.cast() {
            Ok(output6) => output6,
            Err(e) => {
                debug!("IDXGIOutput6 query failed: {}", e);
                return Ok(None);
            }
        };

        let desc = unsafe { output6.GetDesc1() }.into_report()?;
        Ok(Some(OutputDescriptor {
            device_name: decode_wide_name(&desc.DeviceName),
            color_space: ColorSpace(desc.ColorSpace.0),
            red_primary: desc.RedPrimary,
            green_primary: desc.GreenPrimary,
            blue_primary: desc.BluePrimary,
            white_point: desc.WhitePoint,
            min_luminance: desc.MinLuminance,
            max_luminance: desc.MaxLuminance,
            max_full_frame_luminance: desc.MaxFullFrameLuminance,
            bits_per_color: desc.BitsPerColor,
        }))
    }
}

/// The console this process is attached to. The swapchain is bound to it instead of
/// a window of our own.
pub fn console_window() -> eyre::Result<HWND> {
    let hwnd = unsafe { GetConsoleWindow() };
    if hwnd.is_invalid() {
        bail!("Process has no console window to bind a swapchain to.");
    }
    Ok(hwnd)
}

fn d3d_feature_level(level: FeatureLevel) -> D3D_FEATURE_LEVEL {
    match level {
        FeatureLevel::Level11_0 => D3D_FEATURE_LEVEL_11_0,
    }
}

fn command_list_type(kind: CommandQueueKind) -> D3D12_COMMAND_LIST_TYPE {
    match kind {
        CommandQueueKind::Direct => D3D12_COMMAND_LIST_TYPE_DIRECT,
    }
}

fn dxgi_format(format: PixelFormat) -> DXGI_FORMAT {
    match format {
        PixelFormat::R10G10B10A2Unorm => DXGI_FORMAT_R10G10B10A2_UNORM,
    }
}

fn dxgi_swap_effect(effect: SwapEffect) -> DXGI_SWAP_EFFECT {
    match effect {
        SwapEffect::FlipDiscard => DXGI_SWAP_EFFECT_FLIP_DISCARD,
    }
}
