//! Wire types and line protocol shared by the `gazewheel` daemon and the
//! `gazectl` client.

pub mod landmark;
pub mod macros;
pub mod protocol;

pub use landmark::{LandmarkSet, Point3};
pub use protocol::{ProtocolError, Reply, Request, SOCKET_PATH};
