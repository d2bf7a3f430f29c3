use clap::Parser;

/// Fox Bridge - send a callback to a Fox inverter over Modbus
#[derive(Debug, Parser)]
#[clap(author, version)]
pub struct Options {
    /// Config file to read
    #[clap(short = 'c', long = "config", default_value = "config.yaml")]
    pub config_file: String,

    /// Callback to run, eg set_min_soc
    pub callback: String,

    /// Callback arguments; any beyond those the callback needs are ignored
    #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::parse()
    }
}
