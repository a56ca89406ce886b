//! SIGINT / SIGTERM → [`Shutdown`] request.

use std::sync::Arc;

use log::info;

use crate::error::{Error, Result};
use crate::shutdown::Shutdown;

pub fn install(shutdown: &Arc<Shutdown>) -> Result<()> {
    let shutdown = Arc::clone(shutdown);
    ctrlc::set_handler(move || {
        info!("Termination requested");
        shutdown.request();
    })
    .map_err(|_| Error::Init("signal handler install failed"))
}
