//! Launch sequencing for the writer daemon.

use std::sync::Arc;

use tracing::info;

use crate::bootstrap::{ConfigLoader, SystemConfigLoader, bootstrap_with};
use crate::dispatch::{EventSink, TracingEventSink};
use crate::health::{HealthReporter, StructuredHealthReporter};

use super::errors::LaunchError;
use super::shutdown::{ShutdownSignal, SystemShutdownSignal};
use super::{PROCESS_TARGET, SHUTDOWN_TIMEOUT};

/// Collaborators required to launch the daemon runtime.
pub(crate) struct LaunchPlan<L, S> {
    pub(crate) loader: L,
    pub(crate) reporter: Arc<dyn HealthReporter>,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) shutdown: S,
}

/// Runs the daemon using the production collaborators.
///
/// Returns once a termination signal has been handled and the listener has
/// stopped.
///
/// # Errors
///
/// Returns [`LaunchError`] if bootstrap fails, the writer socket cannot be
/// served, or signal handlers cannot be installed.
pub fn run_daemon() -> Result<(), LaunchError> {
    let plan = LaunchPlan {
        loader: SystemConfigLoader,
        reporter: Arc::new(StructuredHealthReporter::new()),
        events: Arc::new(TracingEventSink::new()),
        shutdown: SystemShutdownSignal::new(SHUTDOWN_TIMEOUT),
    };
    run_daemon_with(plan)
}

/// Runs the daemon with injected collaborators.
pub(crate) fn run_daemon_with<L, S>(plan: LaunchPlan<L, S>) -> Result<(), LaunchError>
where
    L: ConfigLoader,
    S: ShutdownSignal,
{
    let LaunchPlan {
        loader,
        reporter,
        events,
        shutdown,
    } = plan;

    let daemon = bootstrap_with(&loader, reporter)?;
    info!(
        target: PROCESS_TARGET,
        endpoint = %daemon.config().writer_socket(),
        "starting writer runtime"
    );
    let listener = daemon.serve(events)?;
    let waited = shutdown.wait();
    listener.shutdown();
    listener.join()?;
    waited?;
    info!(
        target: PROCESS_TARGET,
        "shutdown sequence completed"
    );
    Ok(())
}
