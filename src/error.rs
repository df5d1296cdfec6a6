//! Top-level error type for application startup and the frame loop.

use crate::layout::LayoutError;
use crate::platform::PlatformError;
use crate::render::RenderError;
use crate::resource::ResourceError;

/// Everything that can stop an application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window error: {0}")]
    Platform(#[from] PlatformError),

    #[error("failed to load font {name}: {source}")]
    Font {
        name: String,
        #[source]
        source: ResourceError,
    },

    #[error("renderer error: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
