use crate::color_space::ColorSpace;
use crate::display_spec_error::FatalError;
use crate::graphics_api::GraphicsApi;
use std::io::Write;
use tracing::info;
use tracing::warn;
use widestring::U16Str;

/// Snapshot of `DXGI_OUTPUT_DESC1` for the display presenting the swapchain.
///
/// `Default` is the zeroed descriptor reported when the output has no extended interface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputDescriptor {
    pub device_name: String,
    pub color_space: ColorSpace,
    /// CIE xy chromaticity.
    pub red_primary: [f32; 2],
    pub green_primary: [f32; 2],
    pub blue_primary: [f32; 2],
    pub white_point: [f32; 2],
    /// Nits.
    pub min_luminance: f32,
    pub max_luminance: f32,
    pub max_full_frame_luminance: f32,
    pub bits_per_color: u32,
}

/// Decodes a fixed-size UTF-16 name buffer, stopping at the first NUL.
pub fn decode_wide_name(buffer: &[u16]) -> String {
    let len = buffer
        .iter()
        .position(|&unit| unit == 0)
        .unwrap_or(buffer.len());
    U16Str::from_slice(&buffer[..len]).to_string_lossy()
}

/// Reads the descriptor of the output containing `swapchain`.
///
/// A missing extended interface is not fatal: the `Fail : Get ...` line goes to
/// `diagnostics` and the zeroed descriptor is returned.
pub fn read_output_descriptor<G: GraphicsApi, W: Write>(
    api: &G,
    swapchain: &G::Swapchain,
    diagnostics: &mut W,
) -> Result<OutputDescriptor, FatalError> {
    match api
        .read_output_descriptor(swapchain)
        .map_err(FatalError::OutputQuery)?
    {
        Some(descriptor) => {
            info!(
                device_name = %descriptor.device_name,
                color_space = descriptor.color_space.0,
                "Read output descriptor"
            );
            Ok(descriptor)
        }
        None => {
            warn!(
                "Containing output does not expose {}",
                G::EXTENDED_OUTPUT_INTERFACE
            );
            writeln!(diagnostics, "Fail : Get {}", G::EXTENDED_OUTPUT_INTERFACE)
                .map_err(FatalError::ReportOutput)?;
            Ok(OutputDescriptor::default())
        }
    }
}
