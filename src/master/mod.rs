//! The master replication engine: HTTP surface, quorum selection, the
//! join protocol, and the background gossip loops (§4.C).

pub mod http;
pub mod loops;
pub mod quorum;
pub mod start;

pub use http::{router, MasterState};
pub use quorum::{get_quorum, quorum_size};
pub use start::{master_join, master_stop, new_master, prepare_join_master, prepare_new_master};
