//! Speech engine implementations
//!
//! Concrete implementations of the [`SpeechEngine`] port:
//! - [`RemoteHttpEngine`] - remote neural synthesis over HTTP
//! - [`LocalCliEngine`] - offline CLI engine (espeak-ng style)
//! - [`DummyEngine`] - always-succeeding placeholder

pub mod dummy;
pub mod local;
pub mod remote;

use std::sync::Arc;

pub use dummy::DummyEngine;
pub use local::LocalCliEngine;
pub use remote::RemoteHttpEngine;

use crate::config::{EngineSelection, SpeechConfig};
use crate::error::SpeechError;
use crate::ports::SpeechEngine;

/// Build the primary engine selected by the configuration
pub fn engine_for(config: &SpeechConfig) -> Result<Arc<dyn SpeechEngine>, SpeechError> {
    match config.engine {
        EngineSelection::Remote => Ok(Arc::new(RemoteHttpEngine::new(config.remote.clone())?)),
        EngineSelection::Local => Ok(Arc::new(LocalCliEngine::new(config.local.clone()))),
        EngineSelection::Dummy => Ok(Arc::new(DummyEngine)),
    }
}
