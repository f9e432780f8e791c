use d3d_display_spec::display_spec_error::MyResult;
use tracing::info;

#[cfg(windows)]
pub fn main() -> MyResult<()> {
    use d3d_display_spec::d3d12_api::console_window;
    use d3d_display_spec::d3d12_api::D3d12Api;
    use d3d_display_spec::probe::run_probe;
    use d3d_display_spec::probe_config::ProbeConfig;

    init()?;

    let hwnd = console_window()?;
    let config = ProbeConfig::default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = run_probe(&D3d12Api, &hwnd, &config, &mut out)?;
    info!(
        debug_layer = outcome.debug_layer_enabled,
        "Reported {}", outcome.descriptor.device_name
    );
    Ok(())
}

#[cfg(not(windows))]
pub fn main() -> MyResult<()> {
    init()?;
    Err(eyre::eyre!("Direct3D 12 and DXGI are only available on Windows.").into())
}

fn init() -> MyResult<()> {
    color_eyre::install()?;
    // stdout carries the report, everything else goes to stderr.
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
    info!("Querying display output through a D3D12 swapchain");
    Ok(())
}
