/// Lowest Direct3D feature level an adapter must reach to be picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureLevel {
    Level11_0,
}

/// 10 bits per color channel, 2 bits alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    R10G10B10A2Unorm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapEffect {
    FlipDiscard,
}

/// General purpose, immediate execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandQueueKind {
    Direct,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandQueueConfig {
    pub kind: CommandQueueKind,
}

/// Back buffers are always used as render target output and never multisampled
/// beyond `sample_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapchainConfig {
    pub buffer_count: u32,
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub swap_effect: SwapEffect,
    pub sample_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    pub minimum_feature_level: FeatureLevel,
    /// Must be applied before the device exists, turning it on later invalidates the device.
    pub enable_debug_layer: bool,
    pub command_queue: CommandQueueConfig,
    pub swapchain: SwapchainConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            minimum_feature_level: FeatureLevel::Level11_0,
            enable_debug_layer: cfg!(debug_assertions),
            command_queue: CommandQueueConfig {
                kind: CommandQueueKind::Direct,
            },
            swapchain: SwapchainConfig {
                buffer_count: 2,
                width: 640,
                height: 480,
                format: PixelFormat::R10G10B10A2Unorm,
                swap_effect: SwapEffect::FlipDiscard,
                sample_count: 1,
            },
        }
    }
}
