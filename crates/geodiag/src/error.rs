//! Error type shared by the scene, renderer and page modules.

use thiserror::Error;

use crate::angle::AngleId;
use crate::line::LineId;
use crate::point::PointId;

#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("unknown point {0:?}")]
    UnknownPoint(PointId),
    #[error("unknown line {0:?}")]
    UnknownLine(LineId),
    #[error("unknown angle annotation {0:?}")]
    UnknownAngle(AngleId),
    /// A scene file referenced a point name that was never declared.
    #[error("unknown point name `{0}`")]
    UnknownName(String),
    #[error("duplicate point name `{0}`")]
    DuplicateName(String),
    /// The page has no element with this id to mount a diagram into.
    #[error("missing mount point `#{0}`")]
    MissingMount(String),
    #[error("line {0:?} has no rotation handler attached")]
    NotRotatable(LineId),
    #[error("graph transform is not invertible")]
    NotInvertible,
    #[error("invalid scene file: {0}")]
    SceneFile(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DiagramError>;
