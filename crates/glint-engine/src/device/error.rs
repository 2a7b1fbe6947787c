use thiserror::Error;

use super::api::ShaderStage;

/// Errors produced by the GPU resource layer.
///
/// Nothing here is retried: allocation failures are fatal startup
/// conditions, and compile/link diagnostics are captured once and carried
/// upward for the caller to report and abort on.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The driver refused to hand out a new object handle.
    #[error("failed to allocate GPU {what} object: {message}")]
    Allocation {
        what: &'static str,
        message: String,
    },

    /// Vertex data that cannot form whole 3-component positions.
    #[error("vertex data length {len} is not a multiple of 3")]
    VertexLayout { len: usize },

    /// A shader stage failed to compile; `log` carries the driver
    /// diagnostic, tagged with the unit's name and stage.
    #[error("shader `{name}` ({stage}) failed to compile:\n{log}")]
    Compile {
        name: String,
        stage: ShaderStage,
        log: String,
    },

    /// All stages compiled but the program failed to link.
    #[error("shader program failed to link:\n{log}")]
    Link { log: String },

    /// A pipeline needs at least one shader stage to link anything.
    #[error("a shader pipeline requires at least one shader stage")]
    NoStages,

    /// Validation was requested after the pipeline's standalone shader
    /// objects were reclaimed; compile status can no longer be queried.
    #[error("cannot validate a shader pipeline after its units were reclaimed")]
    AlreadyReclaimed,
}
