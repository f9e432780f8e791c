pub type MyResult<T, E = MyReport> = core::result::Result<T, E>;

pub struct MyReport {
    inner: eyre::Report,
}
impl From<eyre::Report> for MyReport {
    fn from(report: eyre::Report) -> Self {
        Self { inner: report }
    }
}
impl From<FatalError> for MyReport {
    fn from(error: FatalError) -> Self {
        Self {
            inner: eyre::Report::new(error),
        }
    }
}
impl std::fmt::Display for MyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

impl std::fmt::Debug for MyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

/// A failure that ends the probe. Nothing is printed once one of these is raised.
#[derive(Debug)]
pub enum FatalError {
    FactoryCreation(eyre::Report),
    AdapterEnumeration(eyre::Report),
    /// Enumeration ran out without a hardware adapter at the minimum feature level.
    NoSuitableAdapter,
    DeviceCreation(eyre::Report),
    CommandQueueCreation(eyre::Report),
    SwapchainCreation(eyre::Report),
    /// The containing output could not be resolved or its descriptor could not be read.
    OutputQuery(eyre::Report),
    ReportOutput(std::io::Error),
}

impl FatalError {
    pub fn kind(&self) -> &'static str {
        match self {
            FatalError::FactoryCreation(_) => "factory creation",
            FatalError::AdapterEnumeration(_) => "adapter enumeration",
            FatalError::NoSuitableAdapter => "adapter selection",
            FatalError::DeviceCreation(_) => "device creation",
            FatalError::CommandQueueCreation(_) => "command queue creation",
            FatalError::SwapchainCreation(_) => "swapchain creation",
            FatalError::OutputQuery(_) => "output query",
            FatalError::ReportOutput(_) => "report output",
        }
    }
}

impl std::fmt::Display for FatalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FatalError::NoSuitableAdapter => {
                write!(f, "No suitable D3D12 hardware adapter found.")
            }
            _ => write!(f, "{} failed", self.kind()),
        }
    }
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FatalError::FactoryCreation(report)
            | FatalError::AdapterEnumeration(report)
            | FatalError::DeviceCreation(report)
            | FatalError::CommandQueueCreation(report)
            | FatalError::SwapchainCreation(report)
            | FatalError::OutputQuery(report) => Some(&**report),
            FatalError::ReportOutput(error) => Some(error),
            FatalError::NoSuitableAdapter => None,
        }
    }
}

#[cfg(windows)]
pub struct WrappedWindowsError {
    inner: windows::core::Error,
}
#[cfg(windows)]
impl From<windows::core::Error> for WrappedWindowsError {
    fn from(error: windows::core::Error) -> Self {
        Self { inner: error }
    }
}

#[cfg(windows)]
impl std::error::Error for WrappedWindowsError {}
#[cfg(windows)]
impl std::fmt::Display for WrappedWindowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

#[cfg(windows)]
impl std::fmt::Debug for WrappedWindowsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Turns `windows::core::Result` into an eyre result.
#[cfg(windows)]
pub trait IntoReport<T> {
    fn into_report(self) -> eyre::Result<T>;
}

#[cfg(windows)]
impl<T> IntoReport<T> for windows::core::Result<T> {
    fn into_report(self) -> eyre::Result<T> {
        self.map_err(|error| eyre::Report::new(WrappedWindowsError::from(error)))
    }
}
