use crate::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartForceChargeNow,
    StartForceChargeOffPeak,
    StopForceCharge,
    SetMinSoc(u16),
    SetChargeCurrent(f64),
    DeviceInfo,
}

impl Command {
    /// Builds a command from a host callback invocation. Callbacks are fired
    /// with whatever positional arguments the host has to hand, so anything
    /// past the arguments a command needs is ignored.
    //
    // eg set_min_soc ["37", "sensor.battery"] => SetMinSoc(37)
    pub fn from_callback<S: AsRef<str>>(name: &str, args: &[S]) -> Result<Self> {
        use Command::*;

        let args: Vec<&str> = args.iter().map(|a| a.as_ref().trim()).collect();

        let r = match (name, &args[..]) {
            ("start_force_charge_now", _) => StartForceChargeNow,
            ("start_force_charge_off_peak", _) => StartForceChargeOffPeak,
            ("stop_force_charge", _) => StopForceCharge,
            ("set_min_soc", [soc, ..]) => SetMinSoc(
                soc.parse::<u16>()
                    .map_err(|err| anyhow!("set_min_soc: bad soc {:?}: {}", soc, err))?,
            ),
            ("set_charge_current", [current, ..]) => SetChargeCurrent(
                current
                    .parse::<f64>()
                    .map_err(|err| anyhow!("set_charge_current: bad current {:?}: {}", current, err))?,
            ),
            ("device_info", _) => DeviceInfo,
            ("set_min_soc" | "set_charge_current", []) => {
                bail!("{}: missing required argument", name)
            }
            _ => bail!("unhandled callback: {} {:?}", name, args),
        };

        Ok(r)
    }

    pub fn name(&self) -> &'static str {
        use Command::*;

        match self {
            StartForceChargeNow => "start_force_charge_now",
            StartForceChargeOffPeak => "start_force_charge_off_peak",
            StopForceCharge => "stop_force_charge",
            SetMinSoc(_) => "set_min_soc",
            SetChargeCurrent(_) => "set_charge_current",
            DeviceInfo => "device_info",
        }
    }
}
