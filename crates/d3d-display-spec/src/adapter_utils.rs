use crate::display_spec_error::FatalError;
use crate::graphics_api::GraphicsApi;
use crate::probe_config::FeatureLevel;
use tracing::debug;
use tracing::info;

/// Enumerates adapters and returns the first hardware adapter that supports `level`.
///
/// Software adapters are skipped before any device probe, so a machine with only the
/// Basic Render Driver yields `Ok(None)`.
pub fn select_adapter<G: GraphicsApi>(
    api: &G,
    factory: &G::Factory,
    level: FeatureLevel,
) -> Result<Option<G::Adapter>, FatalError> {
    info!("Enumerating Adapters:");
    for i in 0.. {
        let adapter = match api
            .enum_adapter(factory, i)
            .map_err(FatalError::AdapterEnumeration)?
        {
            Some(a) => a,
            None => break,
        };

        let desc = api
            .describe_adapter(&adapter)
            .map_err(FatalError::AdapterEnumeration)?;

        if desc.is_software {
            debug!("  Adapter {}: {} (Software Adapter - Skipping)", i, desc.name);
            continue;
        }

        if api.supports_feature_level(&adapter, level) {
            info!("  Adapter {}: {} (Selected)", i, desc.name);
            return Ok(Some(adapter));
        }
        debug!("  Adapter {}: {} (Does not support {:?})", i, desc.name, level);
    }

    Ok(None)
}
