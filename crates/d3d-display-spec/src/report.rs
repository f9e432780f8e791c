use crate::color_space::color_space_name;
use crate::output_descriptor::OutputDescriptor;
use std::io::Write;

/// Writes the ten report lines in their fixed order.
pub fn print_report<W: Write>(out: &mut W, descriptor: &OutputDescriptor) -> std::io::Result<()> {
    writeln!(out, "Device Name: {}", descriptor.device_name)?;
    writeln!(
        out,
        "Color Space: {}",
        color_space_name(descriptor.color_space)
    )?;

    write_pair(out, "RedPrimary", descriptor.red_primary)?;
    write_pair(out, "GreenPrimary", descriptor.green_primary)?;
    write_pair(out, "BluePrimary", descriptor.blue_primary)?;
    write_pair(out, "WhitePoint", descriptor.white_point)?;

    writeln!(out, "MinLuminance: {}", descriptor.min_luminance)?;
    writeln!(out, "MaxLuminance: {}", descriptor.max_luminance)?;
    writeln!(
        out,
        "MaxFullFrameLuminance: {}",
        descriptor.max_full_frame_luminance
    )?;

    writeln!(out, "BitsPerColor: {}", descriptor.bits_per_color)?;
    out.flush()
}

fn write_pair<W: Write>(out: &mut W, label: &str, [x, y]: [f32; 2]) -> std::io::Result<()> {
    writeln!(out, "{label}: {x} {y}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_space::ColorSpace;

    fn render(descriptor: &OutputDescriptor) -> String {
        let mut out = Vec::new();
        print_report(&mut out, descriptor).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hdr10_display_report() {
        let descriptor = OutputDescriptor {
            device_name: r"\\.\DISPLAY1".to_string(),
            color_space: ColorSpace::RGB_FULL_G2084_NONE_P2020,
            red_primary: [0.708, 0.292],
            green_primary: [0.17, 0.797],
            blue_primary: [0.131, 0.046],
            white_point: [0.3127, 0.329],
            min_luminance: 0.01,
            max_luminance: 1000.0,
            max_full_frame_luminance: 600.5,
            bits_per_color: 10,
        };

        let expected = "\
Device Name: \\\\.\\DISPLAY1
Color Space: DXGI_COLOR_SPACE_RGB_FULL_G2084_NONE_P2020
RedPrimary: 0.708 0.292
GreenPrimary: 0.17 0.797
BluePrimary: 0.131 0.046
WhitePoint: 0.3127 0.329
MinLuminance: 0.01
MaxLuminance: 1000
MaxFullFrameLuminance: 600.5
BitsPerColor: 10
";
        assert_eq!(render(&descriptor), expected);
    }

    #[test]
    fn unknown_color_space_leaves_name_blank() {
        let descriptor = OutputDescriptor {
            color_space: ColorSpace(22),
            ..Default::default()
        };
        let text = render(&descriptor);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "Color Space: ");
    }
}
