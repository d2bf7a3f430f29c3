pub use anyhow::{anyhow, bail, Result};
pub use log::{debug, error, info, trace, warn};

pub use crate::command::Command;
pub use crate::config::{self, Config};
pub use crate::coordinator::{Coordinator, Outcome};
pub use crate::error::NoDataError;
pub use crate::fox::{self, FoxService};
pub use crate::options::Options;
pub use crate::transport::Transport;
