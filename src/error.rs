use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("a {width}x{height} grid cannot hold {nodes} nodes")]
    GridTooSmall { width: usize, height: usize, nodes: usize },
    #[error("a {width}x{height} grid does not fit the cell encoding")]
    GridTooLarge { width: usize, height: usize },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("the rotation window must hold at least 2 slots, got {0}")]
    InvalidWindow(usize),
    #[error("cell list of length {len} is not a permutation of the grid cells")]
    NotAPermutation { len: usize },
    #[error("placement holds {placement} nodes but the graph has {graph}")]
    NodeCountMismatch { placement: usize, graph: usize },
    #[error("malformed coordinate row on line {line}")]
    MalformedCoordinates { line: usize },
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: std::io::Error },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("failed to set up flamegraph output: {0}")]
    Flame(#[from] tracing_flame::Error),
    #[error(transparent)]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
