/// ID for vertices, the hash of a vertex payload.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(x: u64) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(x: u64) -> Self {
        Self(x)
    }
}
